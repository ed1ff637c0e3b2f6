// src/config.rs
use crate::error::StrataError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use strata_style::{FluidScaleConfig, Preset, UtilitySheet};
use strata_types::{Length, LengthUnit};

/// A theme file. Every field is optional; anything left out keeps the value
/// from [`UtilitySheet::standard`].
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub space: Option<Length>,
    #[serde(default)]
    pub grid_min: Option<Length>,
    #[serde(default)]
    pub measure: Option<Length>,
    #[serde(default)]
    pub gutter: Option<Length>,
    /// Replaces the standard preset list when present.
    #[serde(default)]
    pub presets: Option<Vec<Preset>>,
    /// Merged over the standard fluid contexts, replacing them by name.
    #[serde(default)]
    pub fluid: BTreeMap<String, FluidScaleConfig>,
    #[serde(default)]
    pub fluid_unit: Option<LengthUnit>,
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, StrataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StrataError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            )
        })?;
        log::debug!("Loaded theme config from {}", path_ref.display());
        Self::from_json(&source)
    }

    /// Applies this config on top of `sheet`. On error `sheet` is left untouched.
    pub fn apply_to(self, sheet: &mut UtilitySheet) -> Result<(), StrataError> {
        let mut next = sheet.clone();
        let settings = &mut next.settings;
        for (slot, value) in [
            (&mut settings.space, self.space),
            (&mut settings.grid_min, self.grid_min),
            (&mut settings.measure, self.measure),
            (&mut settings.gutter, self.gutter),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(presets) = self.presets {
            next.presets = presets;
        }
        if let Some(unit) = self.fluid_unit {
            next.fluid_unit = unit;
        }
        for (name, config) in self.fluid {
            if let Some(previous) = next.set_fluid_context(name.clone(), config)? {
                log::warn!(
                    "Fluid context '{}' overridden ({} -> {} at the upper lock)",
                    name,
                    previous.max_size(),
                    config.max_size()
                );
            }
        }
        *sheet = next;
        Ok(())
    }

    pub fn into_sheet(self) -> Result<UtilitySheet, StrataError> {
        let mut sheet = UtilitySheet::standard();
        self.apply_to(&mut sheet)?;
        Ok(sheet)
    }
}
