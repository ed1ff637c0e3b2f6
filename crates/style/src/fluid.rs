//! Fluid type scale: a size that interpolates linearly between two
//! (size, viewport width) locks.
use serde::{Deserialize, Serialize};
use strata_types::LengthUnit;
use thiserror::Error;

/// Raised when a fluid scale is constructed from parameters that cannot
/// describe an interpolation range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("max screen ({max_screen}) must be greater than min screen ({min_screen})")]
    InvalidRange { min_screen: f64, max_screen: f64 },

    #[error("fluid scale parameter '{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("screen range {min_screen}..{max_screen} is too wide to interpolate over")]
    ScreenSpanOverflow { min_screen: f64, max_screen: f64 },
}

/// Behaviour outside the `[min_screen, max_screen]` range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    /// Hold `min_size` below the lower lock and `max_size` above the upper one.
    #[default]
    Clamped,
    /// Keep following the line through both locks.
    Extrapolate,
}

/// Validated parameters of a fluid scale. All values share one linear unit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawFluidScale")]
pub struct FluidScaleConfig {
    min_size: f64,
    max_size: f64,
    min_screen: f64,
    max_screen: f64,
    interpolation: Interpolation,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFluidScale {
    min_size: f64,
    max_size: f64,
    min_screen: f64,
    max_screen: f64,
    #[serde(default)]
    interpolation: Interpolation,
}

impl TryFrom<RawFluidScale> for FluidScaleConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawFluidScale) -> Result<Self, Self::Error> {
        Ok(FluidScaleConfig::new(raw.min_size, raw.max_size, raw.min_screen, raw.max_screen)?
            .with_interpolation(raw.interpolation))
    }
}

impl FluidScaleConfig {
    /// Heading scale: 1 at a 20-wide viewport up to 2 at 88 wide.
    pub const HEADING: FluidScaleConfig = FluidScaleConfig::locked(1.0, 2.0, 20.0, 88.0);
    /// Blockquote scale: 1 at a 20-wide viewport up to 1.5 at 88 wide.
    pub const BLOCKQUOTE: FluidScaleConfig = FluidScaleConfig::locked(1.0, 1.5, 20.0, 88.0);

    // Only for constants whose range is known to be valid.
    const fn locked(min_size: f64, max_size: f64, min_screen: f64, max_screen: f64) -> Self {
        Self {
            min_size,
            max_size,
            min_screen,
            max_screen,
            interpolation: Interpolation::Clamped,
        }
    }

    /// Builds a clamped scale, rejecting `max_screen <= min_screen` and
    /// non-finite parameters.
    pub fn new(
        min_size: f64,
        max_size: f64,
        min_screen: f64,
        max_screen: f64,
    ) -> Result<Self, ConfigurationError> {
        for (field, value) in [
            ("minSize", min_size),
            ("maxSize", max_size),
            ("minScreen", min_screen),
            ("maxScreen", max_screen),
        ] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite { field, value });
            }
        }
        if max_screen <= min_screen {
            return Err(ConfigurationError::InvalidRange {
                min_screen,
                max_screen,
            });
        }
        if !(max_screen - min_screen).is_finite() {
            return Err(ConfigurationError::ScreenSpanOverflow {
                min_screen,
                max_screen,
            });
        }
        Ok(Self::locked(min_size, max_size, min_screen, max_screen))
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    pub fn min_screen(&self) -> f64 {
        self.min_screen
    }

    pub fn max_screen(&self) -> f64 {
        self.max_screen
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Size at the given viewport width. See [`compute_fluid_size`].
    pub fn size_at(&self, viewport_width: f64) -> f64 {
        compute_fluid_size(viewport_width, self)
    }

    /// Renders the scale as a CSS expression the browser re-evaluates on resize.
    ///
    /// `unit` is the unit all four parameters are expressed in.
    pub fn to_css(&self, unit: LengthUnit) -> String {
        let u = unit.suffix();
        let line = format!(
            "calc({min}{u} + ({max} - {min}) * ((100vw - {lo}{u}) / ({hi} - {lo})))",
            min = self.min_size,
            max = self.max_size,
            lo = self.min_screen,
            hi = self.max_screen,
        );
        match self.interpolation {
            Interpolation::Extrapolate => line,
            Interpolation::Clamped => {
                // clamp() needs its lower bound first, even for shrinking scales.
                let (lower, upper) = ordered(self.min_size, self.max_size);
                format!("clamp({lower}{u}, {line}, {upper}{u})")
            }
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Interpolates a size for `viewport_width` between the two locks of `config`.
///
/// With [`Interpolation::Clamped`] the result is exactly `min_size` at or below
/// `min_screen`, exactly `max_size` at or above `max_screen`, and never leaves
/// the interval spanned by the two sizes. A NaN viewport yields NaN.
pub fn compute_fluid_size(viewport_width: f64, config: &FluidScaleConfig) -> f64 {
    let clamped = config.interpolation == Interpolation::Clamped;
    if clamped && viewport_width <= config.min_screen {
        return config.min_size;
    }
    if clamped && viewport_width >= config.max_screen {
        return config.max_size;
    }

    let progress = (viewport_width - config.min_screen) / (config.max_screen - config.min_screen);
    // Weighting both ends avoids forming `max - min`, which overflows for wide spans.
    let size = config.min_size * (1.0 - progress) + config.max_size * progress;
    if clamped {
        // Rounding can still overshoot a lock by an ulp.
        let (lower, upper) = ordered(config.min_size, config.max_size);
        size.clamp(lower, upper)
    } else {
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn heading() -> FluidScaleConfig {
        FluidScaleConfig::new(1.0, 2.0, 20.0, 88.0).unwrap()
    }

    #[test]
    fn test_constants_match_validated_construction() {
        assert_eq!(FluidScaleConfig::HEADING, heading());
        assert_eq!(
            FluidScaleConfig::BLOCKQUOTE,
            FluidScaleConfig::new(1.0, 1.5, 20.0, 88.0).unwrap()
        );
    }

    #[test]
    fn test_midpoint() {
        assert!((heading().size_at(54.0) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_locks_are_exact() {
        assert_eq!(heading().size_at(20.0), 1.0);
        assert_eq!(heading().size_at(88.0), 2.0);
    }

    #[test]
    fn test_clamped_outside_locks() {
        let config = heading();
        assert_eq!(config.size_at(0.0), 1.0);
        assert_eq!(config.size_at(19.999), 1.0);
        assert_eq!(config.size_at(88.001), 2.0);
        assert_eq!(config.size_at(1.0e6), 2.0);
    }

    #[test]
    fn test_extrapolate_follows_the_line() {
        let config = heading().with_interpolation(Interpolation::Extrapolate);
        assert!((config.size_at(10.0) - (1.0 - 10.0 / 68.0)).abs() < EPSILON);
        assert!((config.size_at(122.0) - 2.5).abs() < EPSILON);
        assert!((config.size_at(54.0) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_shrinking_scale_is_non_increasing() {
        let config = FluidScaleConfig::new(3.0, 1.0, 30.0, 90.0).unwrap();
        let mut previous = f64::INFINITY;
        for step in 0..=120 {
            let size = config.size_at(step as f64);
            assert!(size <= previous);
            assert!((1.0..=3.0).contains(&size));
            previous = size;
        }
        assert!((config.size_at(60.0) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_wide_size_span_does_not_overflow() {
        let config = FluidScaleConfig::new(-1e308, 1e308, 0.0, 1.0).unwrap();
        assert_eq!(config.size_at(0.5), 0.0);
        assert_eq!(config.size_at(0.0), -1e308);
        assert_eq!(config.size_at(1.0), 1e308);

        let extrapolating = config.with_interpolation(Interpolation::Extrapolate);
        assert_eq!(extrapolating.size_at(0.0), -1e308);
        assert_eq!(extrapolating.size_at(1.0), 1e308);
        assert_eq!(extrapolating.size_at(0.5), 0.0);
    }

    #[test]
    fn test_wide_screen_span_is_rejected() {
        assert_eq!(
            FluidScaleConfig::new(1.0, 2.0, -1e308, 1e308),
            Err(ConfigurationError::ScreenSpanOverflow {
                min_screen: -1e308,
                max_screen: 1e308
            })
        );
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        assert_eq!(
            FluidScaleConfig::new(1.0, 2.0, 88.0, 20.0),
            Err(ConfigurationError::InvalidRange {
                min_screen: 88.0,
                max_screen: 20.0
            })
        );
        assert!(FluidScaleConfig::new(1.0, 2.0, 20.0, 20.0).is_err());
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let err = FluidScaleConfig::new(f64::NAN, 2.0, 20.0, 88.0).unwrap_err();
        assert!(matches!(err, ConfigurationError::NonFinite { field: "minSize", .. }));
        assert!(FluidScaleConfig::new(1.0, 2.0, 20.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_to_css() {
        let config = heading();
        assert_eq!(
            config.with_interpolation(Interpolation::Extrapolate).to_css(LengthUnit::Rem),
            "calc(1rem + (2 - 1) * ((100vw - 20rem) / (88 - 20)))"
        );
        assert_eq!(
            config.to_css(LengthUnit::Rem),
            "clamp(1rem, calc(1rem + (2 - 1) * ((100vw - 20rem) / (88 - 20))), 2rem)"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let config: FluidScaleConfig = serde_json::from_str(
            r#"{ "minSize": 1, "maxSize": 2, "minScreen": 20, "maxScreen": 88, "interpolation": "extrapolate" }"#,
        )
        .unwrap();
        assert_eq!(config.interpolation(), Interpolation::Extrapolate);

        let err = serde_json::from_str::<FluidScaleConfig>(
            r#"{ "minSize": 1, "maxSize": 2, "minScreen": 88, "maxScreen": 20 }"#,
        );
        assert!(err.is_err());
    }
}
