//! Layout utility presets and fluid type scales, rendered to CSS.
//!
//! The computation lives in `strata-style`; this crate adds theme loading,
//! CSS output and the `strata` command line tool.

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;

pub use builder::SheetBuilder;
pub use config::ThemeConfig;
pub use error::StrataError;
pub use generator::CssGenerator;

pub use strata_style::{
    ConfigurationError, Declaration, FluidScaleConfig, Interpolation, Preset, PresetError, Rule,
    SheetError, SheetSettings, UtilitySheet, compute_fluid_size, lookup_preset,
};
pub use strata_types::{AspectRatio, Length, LengthUnit};
