//! Reference rewriting: installs the canonical palette into a document.

use crate::models::{Kml, PaletteEntry, PALETTE};
use crate::services::resolver::StyleMapping;

/// Reference prefix used by KML style URLs.
const STYLE_REF_PREFIX: char = '#';

/// Installs the canonical palette and rewrites placemark references.
///
/// The document's style collection is replaced by all sixteen palette
/// entries, referenced or not, which keeps the palette stable across
/// runs. Style maps are dropped entirely; after rewriting, every mapped
/// placemark points directly at a canonical style. References absent
/// from the mapping stay untouched.
pub fn apply_palette(kml: &mut Kml, style_mapping: &StyleMapping) {
    kml.document.styles = PALETTE.iter().map(PaletteEntry::to_style).collect();
    kml.document.style_maps.clear();

    for folder in &mut kml.document.folders {
        for placemark in &mut folder.placemarks {
            let old_id = placemark
                .style_url
                .strip_prefix(STYLE_REF_PREFIX)
                .unwrap_or(&placemark.style_url);

            if let Some(new_id) = style_mapping.get(old_id) {
                placemark.style_url = format!("{STYLE_REF_PREFIX}{new_id}");
            }
        }
    }
}
