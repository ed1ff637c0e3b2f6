//! Named layout presets and the read-only table that resolves them.
use crate::directive::{Declaration, Rule, class_selector};
use crate::parsers::{ParameterizedName, parse_parameterized_name, run_parser};
use crate::stylesheet::SheetSettings;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use strata_types::AspectRatio;
use thiserror::Error;

pub const MAX_GRID_COLUMNS: u8 = 12;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresetError {
    #[error("Unknown preset '{0}'")]
    Unknown(String),

    #[error("Column count {count} in '{name}' is outside 1..={max}", max = MAX_GRID_COLUMNS)]
    OutOfRange { name: String, count: u32 },

    #[error("Invalid aspect ratio in '{0}': both sides must be positive")]
    InvalidRatio(String),
}

/// A layout utility applied by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Vertical rhythm: every child after the first gets the sheet's space above it.
    Stack,
    VisuallyHidden,
    FullBleed,
    AspectRatio(AspectRatio),
    ScrollTrack,
    AutoGrid,
    /// Fixed column count, always within `1..=MAX_GRID_COLUMNS`.
    GridCols(u8),
    Wrapper,
    /// Centers any number of children inside the filled container.
    Center,
    /// Centers a single child through auto margins.
    CenterChild,
}

static KEYWORD_PRESETS: [(&str, Preset); 10] = [
    ("stack", Preset::Stack),
    ("visually-hidden", Preset::VisuallyHidden),
    ("full-bleed", Preset::FullBleed),
    ("aspect-wide", Preset::AspectRatio(AspectRatio::WIDE)),
    ("aspect-square", Preset::AspectRatio(AspectRatio::SQUARE)),
    ("scroll-track", Preset::ScrollTrack),
    ("auto-grid", Preset::AutoGrid),
    ("wrapper", Preset::Wrapper),
    ("center", Preset::Center),
    ("center-child", Preset::CenterChild),
];

/// Resolves a preset by name, e.g. `"wrapper"`, `"grid-cols-3"` or `"aspect-4:3"`.
pub fn lookup_preset(name: &str) -> Result<Preset, PresetError> {
    let name = name.trim();
    if let Some((_, preset)) = KEYWORD_PRESETS.iter().find(|(key, _)| *key == name) {
        log::trace!("Resolved keyword preset '{}'", name);
        return Ok(*preset);
    }

    let parsed = run_parser(parse_parameterized_name, name).map_err(|e| {
        log::debug!("Preset lookup for '{}' failed: {}", name, e);
        PresetError::Unknown(name.to_string())
    })?;

    match parsed {
        ParameterizedName::GridCols(count) => u8::try_from(count)
            .ok()
            .filter(|n| (1..=MAX_GRID_COLUMNS).contains(n))
            .map(Preset::GridCols)
            .ok_or_else(|| PresetError::OutOfRange {
                name: name.to_string(),
                count,
            }),
        ParameterizedName::Aspect(width, height) => AspectRatio::new(width, height)
            .map(|ratio| Preset::AspectRatio(canonical_ratio(ratio)))
            .ok_or_else(|| PresetError::InvalidRatio(name.to_string())),
    }
}

// 32:18 and 16:9 resolve to the same preset.
fn canonical_ratio(ratio: AspectRatio) -> AspectRatio {
    [AspectRatio::WIDE, AspectRatio::SQUARE]
        .into_iter()
        .find(|named| ratio.is_equivalent(*named))
        .unwrap_or(ratio)
}

/// Every keyword preset plus `grid-cols-1` through `grid-cols-12`.
pub fn standard_presets() -> Vec<Preset> {
    let mut presets = Vec::with_capacity(KEYWORD_PRESETS.len() + MAX_GRID_COLUMNS as usize);
    for (_, preset) in &KEYWORD_PRESETS {
        presets.push(*preset);
        if *preset == Preset::AutoGrid {
            presets.extend((1..=MAX_GRID_COLUMNS).map(Preset::GridCols));
        }
    }
    presets
}

impl Preset {
    /// Canonical name; `lookup_preset(&p.name())` returns `p`.
    pub fn name(&self) -> String {
        match self {
            Preset::Stack => "stack".to_string(),
            Preset::VisuallyHidden => "visually-hidden".to_string(),
            Preset::FullBleed => "full-bleed".to_string(),
            Preset::AspectRatio(ratio) if ratio.is_equivalent(AspectRatio::WIDE) => {
                "aspect-wide".to_string()
            }
            Preset::AspectRatio(ratio) if ratio.is_equivalent(AspectRatio::SQUARE) => {
                "aspect-square".to_string()
            }
            Preset::AspectRatio(ratio) => format!("aspect-{}", ratio),
            Preset::ScrollTrack => "scroll-track".to_string(),
            Preset::AutoGrid => "auto-grid".to_string(),
            Preset::GridCols(n) => format!("grid-cols-{}", n),
            Preset::Wrapper => "wrapper".to_string(),
            Preset::Center => "center".to_string(),
            Preset::CenterChild => "center-child".to_string(),
        }
    }

    pub fn column_count(&self) -> Option<u8> {
        match self {
            Preset::GridCols(n) => Some(*n),
            _ => None,
        }
    }

    /// The CSS rules this preset stands for, filled in from `settings`.
    pub fn rules(&self, settings: &SheetSettings) -> Vec<Rule> {
        let selector = class_selector(&self.name());
        let space = settings.space.to_string();
        match self {
            Preset::Stack => vec![
                Rule::new(
                    selector.clone(),
                    vec![
                        Declaration::new("display", "flex"),
                        Declaration::new("flex-direction", "column"),
                        Declaration::new("justify-content", "flex-start"),
                    ],
                ),
                Rule::new(
                    format!("{} > * + *", selector),
                    vec![Declaration::new("margin-block-start", space)],
                ),
            ],
            Preset::VisuallyHidden => vec![Rule::new(
                selector,
                vec![
                    Declaration::new("position", "absolute !important"),
                    Declaration::new("width", "1px"),
                    Declaration::new("height", "1px"),
                    Declaration::new("padding", "0"),
                    Declaration::new("margin", "-1px"),
                    Declaration::new("overflow", "hidden"),
                    Declaration::new("clip", "rect(0, 0, 0, 0)"),
                    Declaration::new("clip-path", "inset(50%)"),
                    Declaration::new("white-space", "nowrap"),
                    Declaration::new("border", "0"),
                ],
            )],
            Preset::FullBleed => vec![Rule::new(
                selector,
                vec![
                    Declaration::new("width", "100vw"),
                    Declaration::new("margin-inline-start", "50%"),
                    Declaration::new("transform", "translateX(-50%)"),
                ],
            )],
            Preset::AspectRatio(ratio) => vec![
                Rule::new(
                    selector.clone(),
                    vec![
                        Declaration::new("position", "relative"),
                        Declaration::new("height", "0"),
                        Declaration::new("padding-top", format!("{}%", ratio.padding_percent())),
                    ],
                ),
                Rule::new(
                    format!("{} > *", selector),
                    vec![
                        Declaration::new("position", "absolute"),
                        Declaration::new("inset", "0"),
                        Declaration::new("width", "100%"),
                        Declaration::new("height", "100%"),
                    ],
                ),
            ],
            Preset::ScrollTrack => vec![
                Rule::new(
                    selector.clone(),
                    vec![
                        Declaration::new("display", "flex"),
                        Declaration::new("gap", space),
                        Declaration::new("overflow-x", "auto"),
                        Declaration::new("overscroll-behavior-inline", "contain"),
                        Declaration::new("scroll-snap-type", "inline mandatory"),
                    ],
                ),
                Rule::new(
                    format!("{} > *", selector),
                    vec![
                        Declaration::new("flex", "0 0 auto"),
                        Declaration::new("scroll-snap-align", "start"),
                    ],
                ),
            ],
            Preset::AutoGrid => vec![Rule::new(
                selector,
                vec![
                    Declaration::new("display", "grid"),
                    Declaration::new("gap", space),
                    Declaration::new(
                        "grid-template-columns",
                        format!("repeat(auto-fit, minmax(min({}, 100%), 1fr))", settings.grid_min),
                    ),
                ],
            )],
            Preset::GridCols(n) => vec![Rule::new(
                selector,
                vec![
                    Declaration::new("display", "grid"),
                    Declaration::new("gap", space),
                    Declaration::new("grid-template-columns", format!("repeat({}, minmax(0, 1fr))", n)),
                ],
            )],
            Preset::Wrapper => vec![Rule::new(
                selector,
                vec![
                    Declaration::new("box-sizing", "content-box"),
                    Declaration::new("max-width", settings.measure.to_string()),
                    Declaration::new("margin-inline", "auto"),
                    Declaration::new("padding-inline", settings.gutter.to_string()),
                ],
            )],
            Preset::Center => vec![Rule::new(
                selector,
                vec![
                    Declaration::new("display", "flex"),
                    Declaration::new("flex-direction", "column"),
                    Declaration::new("justify-content", "center"),
                    Declaration::new("align-items", "center"),
                    Declaration::new("min-block-size", "100%"),
                ],
            )],
            Preset::CenterChild => vec![
                Rule::new(selector.clone(), vec![Declaration::new("display", "flex")]),
                Rule::new(
                    format!("{} > *", selector),
                    vec![Declaration::new("margin", "auto")],
                ),
            ],
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_preset(s)
    }
}

impl Serialize for Preset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for Preset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        lookup_preset(&name).map_err(de::Error::custom)
    }
}
