//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use kmlrestyle::models::{Document, Folder, Kml, Pair, Placemark, Point, Style, StyleMap};
use kmlrestyle::parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a style with a placeholder icon.
pub fn style(id: &str) -> Style {
    Style::with_icon(id, "https://example.com/icons/pin.png")
}

/// Creates a style map with normal and highlight pairs pointing at `target`.
pub fn style_map(id: &str, target: &str) -> StyleMap {
    StyleMap {
        id: id.to_string(),
        pairs: vec![
            Pair {
                key: "normal".to_string(),
                style_url: format!("#{target}"),
            },
            Pair {
                key: "highlight".to_string(),
                style_url: format!("#{target}"),
            },
        ],
    }
}

/// Creates a placemark referencing `style_ref` (already `#`-prefixed).
pub fn placemark(name: &str, style_ref: &str, coordinates: &str) -> Placemark {
    Placemark {
        name: name.to_string(),
        description: format!("{name} description"),
        style_url: style_ref.to_string(),
        point: Point {
            coordinates: coordinates.to_string(),
        },
    }
}

/// Assembles a full document from its parts.
pub fn kml_with(styles: Vec<Style>, style_maps: Vec<StyleMap>, folders: Vec<Folder>) -> Kml {
    Kml {
        xmlns: Some("http://www.opengis.net/kml/2.2".to_string()),
        document: Document {
            name: "Test Places".to_string(),
            description: "Fixture document".to_string(),
            styles,
            style_maps,
            folders,
        },
    }
}

/// The canonical fixture: one styled placemark reached through a style map.
pub fn kml_basic() -> Kml {
    kml_with(
        vec![style("icon-1602-0288D1-normal")],
        vec![style_map("msn_icon-1602-0288D1", "icon-1602-0288D1-normal")],
        vec![Folder {
            name: "Places".to_string(),
            placemarks: vec![placemark(
                "Brandenburg Gate",
                "#msn_icon-1602-0288D1",
                "13.377704,52.516275,0",
            )],
        }],
    )
}

/// Serializes a document into a temp file, returning its path.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn write_temp_kml(kml: &Kml) -> (PathBuf, TempDir) {
    let serialized = parser::serialize_kml(kml).expect("fixture should serialize");
    write_temp_text(&serialized)
}

/// Writes arbitrary text into a temp file, returning its path.
pub fn write_temp_text(contents: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("input.kml");
    fs::write(&path, contents).expect("Failed to write temp file");
    (path, dir)
}
