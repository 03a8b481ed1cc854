//! The canonical sixteen-entry placemark palette.
//!
//! These identifiers and icon addresses are fixed interoperability data:
//! downstream consumers expect exactly these IDs and URLs. Nothing here
//! is computed at runtime.

use super::Style;

/// One canonical palette entry: a style ID and its hosted icon address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Canonical style identifier, `placemark-<colorname>`.
    pub id: &'static str,
    /// Hosted icon address for the color.
    pub href: &'static str,
}

impl PaletteEntry {
    /// Materializes the entry as a document style.
    #[must_use]
    pub fn to_style(&self) -> Style {
        Style::with_icon(self.id, self.href)
    }
}

/// Style ID assigned when an identifier matches no discovered color code.
pub const DEFAULT_STYLE_ID: &str = "placemark-blue";

/// The sixteen canonical styles, in catalog order.
pub const PALETTE: [PaletteEntry; 16] = [
    PaletteEntry {
        id: "placemark-red",
        href: "https://omaps.app/placemarks/placemark-red.png",
    },
    PaletteEntry {
        id: "placemark-blue",
        href: "https://omaps.app/placemarks/placemark-blue.png",
    },
    PaletteEntry {
        id: "placemark-purple",
        href: "https://omaps.app/placemarks/placemark-purple.png",
    },
    PaletteEntry {
        id: "placemark-yellow",
        href: "https://omaps.app/placemarks/placemark-yellow.png",
    },
    PaletteEntry {
        id: "placemark-pink",
        href: "https://omaps.app/placemarks/placemark-pink.png",
    },
    PaletteEntry {
        id: "placemark-brown",
        href: "https://omaps.app/placemarks/placemark-brown.png",
    },
    PaletteEntry {
        id: "placemark-green",
        href: "https://omaps.app/placemarks/placemark-green.png",
    },
    PaletteEntry {
        id: "placemark-orange",
        href: "https://omaps.app/placemarks/placemark-orange.png",
    },
    PaletteEntry {
        id: "placemark-deeppurple",
        href: "https://omaps.app/placemarks/placemark-deeppurple.png",
    },
    PaletteEntry {
        id: "placemark-lightblue",
        href: "https://omaps.app/placemarks/placemark-lightblue.png",
    },
    PaletteEntry {
        id: "placemark-cyan",
        href: "https://omaps.app/placemarks/placemark-cyan.png",
    },
    PaletteEntry {
        id: "placemark-teal",
        href: "https://omaps.app/placemarks/placemark-teal.png",
    },
    PaletteEntry {
        id: "placemark-lime",
        href: "https://omaps.app/placemarks/placemark-lime.png",
    },
    PaletteEntry {
        id: "placemark-deeporange",
        href: "https://omaps.app/placemarks/placemark-deeporange.png",
    },
    PaletteEntry {
        id: "placemark-gray",
        href: "https://omaps.app/placemarks/placemark-gray.png",
    },
    PaletteEntry {
        id: "placemark-bluegray",
        href: "https://omaps.app/placemarks/placemark-bluegray.png",
    },
];

/// Assignment order for discovered color codes, cold to warm and back.
pub const COLOR_ORDER: [&str; 16] = [
    "placemark-blue",
    "placemark-cyan",
    "placemark-teal",
    "placemark-lime",
    "placemark-green",
    "placemark-yellow",
    "placemark-orange",
    "placemark-deeporange",
    "placemark-red",
    "placemark-pink",
    "placemark-purple",
    "placemark-deeppurple",
    "placemark-brown",
    "placemark-gray",
    "placemark-bluegray",
    "placemark-lightblue",
];
