// src/error.rs
use strata_style::{ConfigurationError, PresetError, SheetError, StyleParseError};
use thiserror::Error;

/// A comprehensive error type for loading a theme and generating its CSS.
#[derive(Error, Debug)]
pub enum StrataError {
    #[error("Invalid fluid scale: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Preset lookup failed: {0}")]
    Preset(#[from] PresetError),

    #[error("Invalid setting: {0}")]
    Setting(#[from] StyleParseError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("Config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
