// src/generator.rs
use crate::error::StrataError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use strata_style::UtilitySheet;

const HEADER: &str = "/* Generated by strata. Layout utility presets and fluid type. */";

/// Writes a `UtilitySheet` out as CSS text.
#[derive(Debug, Clone)]
pub struct CssGenerator {
    sheet: UtilitySheet,
}

impl CssGenerator {
    pub fn new(sheet: UtilitySheet) -> Self {
        Self { sheet }
    }

    pub fn sheet(&self) -> &UtilitySheet {
        &self.sheet
    }

    /// Writes the header followed by every rule, separated by blank lines.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), StrataError> {
        let rules = self.sheet.rules();
        writeln!(writer, "{}", HEADER)?;
        for rule in &rules {
            writeln!(writer)?;
            writeln!(writer, "{}", rule)?;
        }
        writer.flush()?;
        log::debug!("Wrote {} rules", rules.len());
        Ok(())
    }

    pub fn generate_string(&self) -> Result<String, StrataError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        // Every rule is assembled from `String`s, so the buffer is valid UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StrataError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.write_to(&mut writer)?;
        log::info!("Generated {}", path.as_ref().display());
        Ok(())
    }
}
