//! Service layer for the transformation pipeline.
//!
//! This module contains the two pure stages between parsing and
//! serialization: palette resolution and reference rewriting. Neither
//! performs any I/O.

pub mod resolver;
pub mod rewriter;

// Re-export commonly used functions
pub use resolver::{build_style_mapping, extract_color_codes, sequential_color_mapping};
pub use rewriter::apply_palette;
