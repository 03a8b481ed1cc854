//! Data models for KML documents and the canonical style palette.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of I/O and business
//! logic.

pub mod kml;
pub mod palette;

// Re-export all model types
pub use kml::{Document, Folder, Icon, IconStyle, Kml, Pair, Placemark, Point, Style, StyleMap};
pub use palette::{PaletteEntry, COLOR_ORDER, DEFAULT_STYLE_ID, PALETTE};
