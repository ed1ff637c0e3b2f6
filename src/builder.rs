// src/builder.rs
use crate::config::ThemeConfig;
use crate::error::StrataError;
use crate::generator::CssGenerator;
use std::path::Path;
use strata_style::{FluidScaleConfig, Preset, UtilitySheet};

/// A builder for creating a `CssGenerator`.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    sheet: UtilitySheet,
}

impl SheetBuilder {
    /// Creates a new `SheetBuilder` starting from the standard sheet.
    pub fn new() -> Self {
        Default::default()
    }

    /// Applies a JSON theme file on top of the current sheet.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, StrataError> {
        ThemeConfig::from_file(path)?.apply_to(&mut self.sheet)?;
        Ok(self)
    }

    /// Applies a JSON theme from a string on top of the current sheet.
    pub fn with_config_source(mut self, json: &str) -> Result<Self, StrataError> {
        ThemeConfig::from_json(json)?.apply_to(&mut self.sheet)?;
        Ok(self)
    }

    /// Overrides a single setting, e.g. `with_setting("space", "2rem")`.
    pub fn with_setting(mut self, name: &str, value: &str) -> Result<Self, StrataError> {
        self.sheet.settings.apply_setting(name, value)?;
        Ok(self)
    }

    /// Applies `name: value; ...` overrides.
    pub fn with_inline_settings(mut self, declarations: &str) -> Result<Self, StrataError> {
        self.sheet.settings.apply_inline(declarations)?;
        Ok(self)
    }

    /// Adds or replaces the fluid scale applied to the `name` selector.
    pub fn with_fluid_context(
        mut self,
        name: &str,
        config: FluidScaleConfig,
    ) -> Result<Self, StrataError> {
        self.sheet.set_fluid_context(name, config)?;
        Ok(self)
    }

    /// Restricts the sheet to the named presets, rejecting unknown names.
    pub fn with_presets<I, S>(mut self, names: I) -> Result<Self, StrataError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sheet.presets = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Preset>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    pub fn sheet(&self) -> &UtilitySheet {
        &self.sheet
    }

    pub fn build(self) -> CssGenerator {
        CssGenerator::new(self.sheet)
    }
}
