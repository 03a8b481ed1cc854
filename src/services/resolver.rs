//! Palette resolution: discovers color codes and assigns canonical styles.
//!
//! The assignment policy is discovered-sequential: every 6-hex-digit
//! dash-delimited token found in a style or style-map identifier becomes
//! a color key; the distinct keys are sorted and assigned palette colors
//! in a fixed order, wrapping modulo sixteen when more keys than colors
//! are discovered. An identifier containing none of the discovered keys
//! falls back to the blue entry.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Document, Style, StyleMap, COLOR_ORDER, DEFAULT_STYLE_ID, PALETTE};

/// Length of a color key token (RRGGBB).
const COLOR_CODE_LEN: usize = 6;

/// Mapping from discovered color code to canonical palette ID.
pub type ColorMapping = BTreeMap<String, &'static str>;

/// Mapping from original style/style-map identifier to canonical palette ID.
pub type StyleMapping = BTreeMap<String, String>;

fn is_hex_color(token: &str) -> bool {
    token.len() == COLOR_CODE_LEN && token.chars().all(|c| c.is_ascii_hexdigit())
}

/// Collects the distinct color codes named by style and style-map IDs.
///
/// Tokens are dash-delimited, so `icon-1602-0288D1-normal` names the code
/// `0288D1`. The result is sorted, which fixes the assignment order.
pub fn extract_color_codes(styles: &[Style], style_maps: &[StyleMap]) -> Vec<String> {
    let mut codes = BTreeSet::new();

    let ids = styles
        .iter()
        .map(|style| style.id.as_str())
        .chain(style_maps.iter().map(|style_map| style_map.id.as_str()));

    for id in ids {
        for token in id.split('-') {
            if is_hex_color(token) {
                codes.insert(token.to_string());
            }
        }
    }

    codes.into_iter().collect()
}

/// Assigns each discovered code a palette color, in sorted code order.
///
/// Assignment wraps around when more than sixteen codes are discovered,
/// so distinct codes may share a color on very colorful inputs.
pub fn sequential_color_mapping(codes: &[String]) -> ColorMapping {
    codes
        .iter()
        .enumerate()
        .map(|(index, code)| (code.clone(), COLOR_ORDER[index % COLOR_ORDER.len()]))
        .collect()
}

/// Resolves one identifier against the color mapping.
///
/// An identifier that already names a canonical palette entry maps to
/// itself, which keeps re-runs of the tool from bouncing established
/// references back to the default. Everything else matches by substring
/// containment, not equality: rich identifiers such as
/// `msn_icon-1602-0288D1` resolve through the embedded code. Candidate
/// codes are tried in sorted order so resolution is reproducible.
/// Identifiers matching no code resolve to the blue default.
pub fn resolve_style_id(id: &str, color_mapping: &ColorMapping) -> &'static str {
    if let Some(entry) = PALETTE.iter().find(|entry| entry.id == id) {
        return entry.id;
    }

    color_mapping
        .iter()
        .find(|(code, _)| id.contains(code.as_str()))
        .map_or(DEFAULT_STYLE_ID, |(_, style_id)| *style_id)
}

/// Maps every style and style-map identifier to its canonical palette ID.
///
/// The mapping is total over both collections: identifiers without a
/// recognizable color code map to the default entry rather than being
/// dropped.
pub fn build_style_mapping(document: &Document, color_mapping: &ColorMapping) -> StyleMapping {
    document
        .styles
        .iter()
        .map(|style| style.id.as_str())
        .chain(document.style_maps.iter().map(|style_map| style_map.id.as_str()))
        .map(|id| (id.to_string(), resolve_style_id(id, color_mapping).to_string()))
        .collect()
}
