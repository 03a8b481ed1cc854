//! Convert command: the whole transformation pipeline, file to file.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::parser;
use crate::services::{
    apply_palette, build_style_mapping, extract_color_codes, sequential_color_mapping,
};

/// Rewrite a KML document against the canonical placemark palette
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Path to the input KML file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path the transformed KML document is written to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl ConvertArgs {
    /// Execute the conversion pipeline end to end.
    ///
    /// Reads and parses the input, resolves the palette mapping, rewrites
    /// the document, writes it out, and prints the resolved mappings for
    /// operator visibility. Mappings are printed in sorted key order so
    /// the report is deterministic.
    pub fn execute(&self) -> CliResult<()> {
        if !self.input.exists() {
            return Err(CliError::io(format!(
                "Input file not found: {}\n\nFor usage, run: {} --help",
                self.input.display(),
                APP_BINARY_NAME
            )));
        }

        let data = fs::read_to_string(&self.input)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", self.input.display())))?;

        let mut kml = parser::parse_kml(&data)
            .map_err(|e| CliError::parse(format!("Failed to parse {}: {e:#}", self.input.display())))?;

        let codes = extract_color_codes(&kml.document.styles, &kml.document.style_maps);
        let color_mapping = sequential_color_mapping(&codes);
        let style_mapping = build_style_mapping(&kml.document, &color_mapping);

        println!("Color mapping:");
        for (code, style_id) in &color_mapping {
            println!("  {code} -> {style_id}");
        }

        apply_palette(&mut kml, &style_mapping);

        let output = parser::serialize_kml(&kml)
            .map_err(|e| CliError::io(format!("Failed to serialize document: {e:#}")))?;

        fs::write(&self.output, output)
            .map_err(|e| CliError::io(format!("Failed to write {}: {e}", self.output.display())))?;

        println!(
            "Successfully converted {} to {}",
            self.input.display(),
            self.output.display()
        );
        println!("Style mapping summary:");
        for (old_id, new_id) in &style_mapping {
            println!("  {old_id} -> {new_id}");
        }

        Ok(())
    }
}
