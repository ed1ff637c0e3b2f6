//! CSS length values shared by every preset and fluid scale.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Rem,
    Em,
    Px,
    Ch,
    Vw,
    #[serde(rename = "%")]
    Percent,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Rem => "rem",
            LengthUnit::Em => "em",
            LengthUnit::Px => "px",
            LengthUnit::Ch => "ch",
            LengthUnit::Vw => "vw",
            LengthUnit::Percent => "%",
        }
    }

    // `rem` has to be tried before `em`.
    const ALL: [LengthUnit; 6] = [
        LengthUnit::Rem,
        LengthUnit::Em,
        LengthUnit::Px,
        LengthUnit::Ch,
        LengthUnit::Vw,
        LengthUnit::Percent,
    ];
}

/// A numeric value with a CSS unit, e.g. `1.5rem` or `65ch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.unit.hash(state);
    }
}

impl Eq for Length {}

impl Default for Length {
    fn default() -> Self {
        Self::zero()
    }
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn rem(value: f64) -> Self {
        Self::new(value, LengthUnit::Rem)
    }

    pub const fn ch(value: f64) -> Self {
        Self::new(value, LengthUnit::Ch)
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    pub const fn zero() -> Self {
        Self::rem(0.0)
    }

    /// Parse a CSS length such as "1.5rem", "60ch" or "100%".
    ///
    /// A bare number is only accepted when it is zero.
    fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        for unit in LengthUnit::ALL {
            if let Some(val) = input.strip_suffix(unit.suffix()) {
                let value = val
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| format!("Invalid number in length '{}': {}", input, e))?;
                if !value.is_finite() {
                    return Err(format!("Length must be finite, got '{}'", input));
                }
                return Ok(Length::new(value, unit));
            }
        }

        match input.parse::<f64>() {
            Ok(v) if v == 0.0 => Ok(Length::zero()),
            Ok(_) => Err(format!("Length '{}' is missing a unit", input)),
            Err(e) => Err(format!("Invalid length '{}': {}", input, e)),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthDef {
            Str(String),
            Map { value: f64, unit: LengthUnit },
        }

        match LengthDef::deserialize(deserializer)? {
            LengthDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            LengthDef::Map { value, unit } => Ok(Length::new(value, unit)),
        }
    }
}
