pub mod css_assertions;
pub mod fixtures;

use strata::{CssGenerator, SheetBuilder, StrataError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Tolerance for comparing interpolated sizes.
pub const EPSILON: f64 = 1e-9;

/// Generate CSS text from a JSON theme applied over the standard sheet.
pub fn generate_css_from_json(theme: &serde_json::Value) -> Result<String, StrataError> {
    generator_from_json(theme)?.generate_string()
}

pub fn generator_from_json(theme: &serde_json::Value) -> Result<CssGenerator, StrataError> {
    let source = serde_json::to_string(theme)?;
    Ok(SheetBuilder::new().with_config_source(&source)?.build())
}
