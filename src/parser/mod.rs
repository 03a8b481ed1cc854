//! KML parsing and serialization.
//!
//! This module is the serialization boundary of the pipeline: it wraps
//! quick-xml's serde integration to read the modelled KML subset and to
//! write it back with a declaration header and two-space indentation.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Kml;

/// Standard declaration emitted ahead of every serialized document.
const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Parses a KML document from its textual form.
///
/// Elements outside the modelled subset are ignored. Missing optional
/// elements (descriptions, folders, style collections) default to empty.
///
/// # Errors
///
/// Returns an error if the input is not well-formed XML or lacks a
/// `Document` element.
pub fn parse_kml(input: &str) -> Result<Kml> {
    quick_xml::de::from_str(input).context("Failed to parse KML document")
}

/// Serializes a KML document, declaration header included.
///
/// Output is UTF-8 with two-space indentation and is deterministic:
/// serializing an unchanged model twice yields identical bytes.
pub fn serialize_kml(kml: &Kml) -> Result<String> {
    let mut body = String::new();
    let mut ser = quick_xml::se::Serializer::with_root(&mut body, Some("kml"))
        .context("Failed to set up KML serializer")?;
    ser.indent(' ', 2);
    kml.serialize(ser)
        .context("Failed to serialize KML document")?;

    let mut output = String::with_capacity(XML_HEADER.len() + body.len() + 1);
    output.push_str(XML_HEADER);
    output.push_str(&body);
    output.push('\n');
    Ok(output)
}
