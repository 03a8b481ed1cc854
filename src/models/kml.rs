//! Serde data model for the subset of KML handled by this tool.
//!
//! IDs live in attributes, content in nested elements, matching how
//! Google Earth and similar exporters emit placemark documents. Elements
//! outside this subset are ignored on input; modelled values (names,
//! descriptions, coordinates) pass through the transform unchanged.

use serde::{Deserialize, Serialize};

/// Root `<kml>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "kml")]
pub struct Kml {
    /// Default namespace, carried through verbatim when present.
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    /// The single document the file describes.
    #[serde(rename = "Document")]
    pub document: Document,
}

/// `<Document>`: container for styles, style maps, and folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title.
    #[serde(default)]
    pub name: String,
    /// Free-form document description.
    #[serde(default)]
    pub description: String,
    /// Icon style definitions, in document order.
    #[serde(rename = "Style", default)]
    pub styles: Vec<Style>,
    /// Style maps (normal/highlight indirection), in document order.
    #[serde(rename = "StyleMap", default)]
    pub style_maps: Vec<StyleMap>,
    /// Placemark folders, in document order.
    #[serde(rename = "Folder", default)]
    pub folders: Vec<Folder>,
}

/// `<Style>`: a single-icon point style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Unique style identifier within the document.
    #[serde(rename = "@id", default)]
    pub id: String,
    /// The icon this style attaches to a placemark.
    #[serde(rename = "IconStyle", default)]
    pub icon_style: IconStyle,
}

impl Style {
    /// Builds a style around a single icon address.
    #[must_use]
    pub fn with_icon(id: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            icon_style: IconStyle {
                icon: Icon {
                    href: href.to_string(),
                },
            },
        }
    }
}

/// `<IconStyle>` wrapper around the icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconStyle {
    /// The referenced icon.
    #[serde(rename = "Icon", default)]
    pub icon: Icon,
}

/// `<Icon>`: an icon address (URL or path).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Icon {
    /// Icon address.
    #[serde(default)]
    pub href: String,
}

/// `<StyleMap>`: indirection from state keys (normal/highlight) to styles.
///
/// A style map never carries its own visual definition, only references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMap {
    /// Unique style map identifier within the document.
    #[serde(rename = "@id", default)]
    pub id: String,
    /// Conditional style selection entries, in document order.
    #[serde(rename = "Pair", default)]
    pub pairs: Vec<Pair>,
}

/// `<Pair>`: one (state key, style reference) entry of a style map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// State key, e.g. `normal` or `highlight`.
    #[serde(default)]
    pub key: String,
    /// Reference to the target style, usually `#`-prefixed.
    #[serde(rename = "styleUrl", default)]
    pub style_url: String,
}

/// `<Folder>`: named, ordered container of placemarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name.
    #[serde(default)]
    pub name: String,
    /// Contained placemarks, in document order.
    #[serde(rename = "Placemark", default)]
    pub placemarks: Vec<Placemark>,
}

/// `<Placemark>`: a named point annotation referencing a visual style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placemark {
    /// Placemark name.
    #[serde(default)]
    pub name: String,
    /// Free-form placemark description.
    #[serde(default)]
    pub description: String,
    /// Reference to a style or style map, usually `#`-prefixed.
    #[serde(rename = "styleUrl", default)]
    pub style_url: String,
    /// Location of the placemark.
    #[serde(rename = "Point", default)]
    pub point: Point,
}

/// `<Point>`: coordinates are opaque to this tool and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Raw coordinate string, e.g. `13.377704,52.516275,0`.
    #[serde(default)]
    pub coordinates: String,
}
