pub mod directive;
pub mod fluid;
pub mod parsers;
pub mod preset;
pub mod stylesheet;

pub use directive::{Declaration, Rule};
pub use fluid::{ConfigurationError, FluidScaleConfig, Interpolation, compute_fluid_size};
pub use parsers::StyleParseError;
pub use preset::{MAX_GRID_COLUMNS, Preset, PresetError, lookup_preset, standard_presets};
pub use stylesheet::{SheetError, SheetSettings, UtilitySheet};
