use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Width-to-height proportion of an aspect-ratio box. Both sides are finite
/// and strictly positive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "RawAspectRatio")]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawAspectRatio {
    width: f64,
    height: f64,
}

impl TryFrom<RawAspectRatio> for AspectRatio {
    type Error = String;

    fn try_from(raw: RawAspectRatio) -> Result<Self, Self::Error> {
        AspectRatio::new(raw.width, raw.height).ok_or_else(|| {
            format!(
                "Aspect ratio sides must be finite and positive, got {}:{}",
                raw.width, raw.height
            )
        })
    }
}

impl Hash for AspectRatio {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }
}

impl Eq for AspectRatio {}

impl AspectRatio {
    pub const WIDE: AspectRatio = AspectRatio { width: 16.0, height: 9.0 };
    pub const SQUARE: AspectRatio = AspectRatio { width: 1.0, height: 1.0 };

    /// Returns `None` unless both sides are finite and strictly positive.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    /// True when both describe the same proportion, e.g. 32:18 and 16:9.
    pub fn is_equivalent(self, other: AspectRatio) -> bool {
        self.width * other.height == other.width * self.height
    }

    /// Top padding, as a percentage of the box width, that yields this ratio.
    pub fn padding_percent(self) -> f64 {
        self.height / self.width * 100.0
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_percent() {
        assert_eq!(AspectRatio::WIDE.padding_percent(), 56.25);
        assert_eq!(AspectRatio::SQUARE.padding_percent(), 100.0);
        let four_three = AspectRatio::new(4.0, 3.0).unwrap();
        assert_eq!(four_three.padding_percent(), 75.0);
    }

    #[test]
    fn test_new_rejects_degenerate_sides() {
        assert!(AspectRatio::new(0.0, 9.0).is_none());
        assert!(AspectRatio::new(16.0, -1.0).is_none());
        assert!(AspectRatio::new(f64::NAN, 1.0).is_none());
        assert!(AspectRatio::new(f64::INFINITY, 1.0).is_none());
    }

    #[test]
    fn test_is_equivalent() {
        let doubled = AspectRatio::new(32.0, 18.0).unwrap();
        assert!(doubled.is_equivalent(AspectRatio::WIDE));
        assert!(!doubled.is_equivalent(AspectRatio::SQUARE));
        assert_ne!(doubled, AspectRatio::WIDE);
    }

    #[test]
    fn test_deserialize_validates_sides() {
        let ratio: AspectRatio = serde_json::from_str(r#"{ "width": 4, "height": 3 }"#).unwrap();
        assert_eq!(ratio, AspectRatio::new(4.0, 3.0).unwrap());
        assert!(serde_json::from_str::<AspectRatio>(r#"{ "width": 0, "height": 9 }"#).is_err());
        assert!(serde_json::from_str::<AspectRatio>(r#"{ "width": 16, "height": -9 }"#).is_err());
    }
}
