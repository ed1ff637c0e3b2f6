//! Defines the top-level utility sheet that holds every enabled preset and
//! fluid context.

use crate::directive::{Declaration, Rule};
use crate::fluid::FluidScaleConfig;
use crate::parsers::{StyleParseError, parse_length, run_parser};
use crate::preset::{Preset, PresetError, lookup_preset, standard_presets};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strata_types::{Length, LengthUnit};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    #[error("No fluid context named '{0}'")]
    UnknownContext(String),

    #[error("Fluid context name '{0}' is not a usable selector")]
    InvalidContextName(String),
}

// Context names are emitted verbatim as selectors.
fn validate_context_name(name: &str) -> Result<(), SheetError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(['{', '}', ';']) || trimmed.contains("/*") {
        return Err(SheetError::InvalidContextName(name.to_string()));
    }
    Ok(())
}

/// Lengths shared by the presets that take a parameter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetSettings {
    /// Gap used by `stack`, `scroll-track` and the grids.
    pub space: Length,
    /// Smallest column width `auto-grid` lets an item shrink to.
    pub grid_min: Length,
    /// Max content width of `wrapper`.
    pub measure: Length,
    /// Inline padding of `wrapper`.
    pub gutter: Length,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            space: Length::rem(1.0),
            grid_min: Length::rem(16.0),
            measure: Length::rem(60.0),
            gutter: Length::rem(1.0),
        }
    }
}

impl SheetSettings {
    /// Overrides one setting from a CSS-like length, e.g. `("space", "1.5rem")`.
    pub fn apply_setting(&mut self, name: &str, value: &str) -> Result<(), StyleParseError> {
        let slot = match name.trim() {
            "space" => &mut self.space,
            "grid-min" | "gridMin" => &mut self.grid_min,
            "measure" => &mut self.measure,
            "gutter" => &mut self.gutter,
            other => return Err(StyleParseError::UnknownSetting(other.to_string())),
        };
        *slot = run_parser(parse_length, value).map_err(|_| StyleParseError::InvalidValue {
            property: name.trim().to_string(),
            value: value.trim().to_string(),
        })?;
        Ok(())
    }

    /// Applies a `key: value; ...` list of overrides.
    pub fn apply_inline(&mut self, declarations: &str) -> Result<(), StyleParseError> {
        for declaration in declarations.split(';') {
            if declaration.trim().is_empty() {
                continue;
            }
            match declaration.split_once(':') {
                Some((key, value)) => self.apply_setting(key, value)?,
                None => {
                    return Err(StyleParseError::Parse(format!(
                        "Expected 'name: value', got '{}'",
                        declaration.trim()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UtilitySheet {
    pub settings: SheetSettings,
    /// Enabled presets, in output order.
    pub presets: Vec<Preset>,
    /// Fluid font-size scales keyed by the selector they apply to.
    pub fluid: BTreeMap<String, FluidScaleConfig>,
    /// Unit the fluid scale parameters are expressed in.
    pub fluid_unit: LengthUnit,
}

impl Default for UtilitySheet {
    fn default() -> Self {
        Self::standard()
    }
}

impl UtilitySheet {
    /// Every preset with default settings, plus the `h1` and `blockquote` scales.
    pub fn standard() -> Self {
        let fluid = BTreeMap::from([
            ("blockquote".to_string(), FluidScaleConfig::BLOCKQUOTE),
            ("h1".to_string(), FluidScaleConfig::HEADING),
        ]);
        Self {
            settings: SheetSettings::default(),
            presets: standard_presets(),
            fluid,
            fluid_unit: LengthUnit::Rem,
        }
    }

    pub fn fluid_context(&self, name: &str) -> Option<&FluidScaleConfig> {
        self.fluid.get(name)
    }

    /// Adds or replaces a fluid context, returning the one it replaced.
    ///
    /// Names that would break out of a selector (`{`, `}`, `;`, comments) are rejected.
    pub fn set_fluid_context(
        &mut self,
        name: impl Into<String>,
        config: FluidScaleConfig,
    ) -> Result<Option<FluidScaleConfig>, SheetError> {
        let name = name.into();
        validate_context_name(&name)?;
        Ok(self.fluid.insert(name, config))
    }

    /// Interpolated size of the named context at `viewport_width`.
    pub fn size_for(&self, context: &str, viewport_width: f64) -> Result<f64, SheetError> {
        self.fluid_context(context)
            .map(|config| config.size_at(viewport_width))
            .ok_or_else(|| SheetError::UnknownContext(context.to_string()))
    }

    /// Rules for a single preset, resolved by name against this sheet's settings.
    pub fn preset_rules(&self, name: &str) -> Result<Vec<Rule>, PresetError> {
        Ok(lookup_preset(name)?.rules(&self.settings))
    }

    /// All preset rules in order, followed by one rule per fluid context.
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules: Vec<Rule> = self
            .presets
            .iter()
            .flat_map(|preset| preset.rules(&self.settings))
            .collect();
        rules.extend(self.fluid.iter().map(|(selector, config)| {
            Rule::new(
                selector.clone(),
                vec![Declaration::new("font-size", config.to_css(self.fluid_unit))],
            )
        }));
        log::debug!(
            "Built {} rules from {} presets and {} fluid contexts",
            rules.len(),
            self.presets.len(),
            self.fluid.len()
        );
        rules
    }
}
