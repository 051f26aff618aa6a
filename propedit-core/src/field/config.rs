use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::coercion::coerce_value;
use crate::validation::{FieldGrammar, ValidationMode};

/// Fraction digits shown by decimal fields unless configured otherwise.
pub const DEFAULT_MAX_ROUND_DIGITS: usize = 3;
/// Upper limit for configured fraction digits; doubles carry ~15 significant digits.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Inclusive `[minimum, maximum]` range of a field. `minimum <= maximum` always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericBounds {
    minimum: f64,
    maximum: f64,
}

impl NumericBounds {
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, ConfigError> {
        // NaN fails the comparison as well
        if !(minimum <= maximum) {
            return Err(ConfigError::InvalidBounds { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    pub fn clamp(&self, value: f64) -> f64 {
        coerce_value(value, self.minimum, self.maximum)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.minimum, self.maximum).map(|_| ())
    }
}

impl Default for NumericBounds {
    fn default() -> Self {
        Self {
            minimum: f64::MIN,
            maximum: f64::MAX,
        }
    }
}

/// Immutable settings of one numeric editor field.
///
/// Every key is optional when deserializing:
///
/// ```toml
/// mode = "integer"
/// allow_negative = false
/// increment = 5.0
///
/// [bounds]
/// minimum = 0.0
/// maximum = 100.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub mode: ValidationMode,
    pub allow_negative: bool,
    pub allow_ratio: bool,
    pub bounds: NumericBounds,
    pub increment: f64,
    pub wraps: bool,
    /// Decimal fields only; integer fields always show whole numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fraction_digits: Option<usize>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Decimal,
            allow_negative: true,
            allow_ratio: false,
            bounds: NumericBounds::default(),
            increment: 1.0,
            wraps: false,
            max_fraction_digits: None,
        }
    }
}

impl FieldConfig {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn decimal() -> Self {
        Self::new(ValidationMode::Decimal)
    }

    pub fn integer() -> Self {
        Self::new(ValidationMode::Integer)
    }

    pub fn with_bounds(mut self, bounds: NumericBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    pub fn with_ratio(mut self, allow_ratio: bool) -> Self {
        self.allow_ratio = allow_ratio;
        self
    }

    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    pub fn with_wrap(mut self, wraps: bool) -> Self {
        self.wraps = wraps;
        self
    }

    pub fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }

    pub fn grammar(&self) -> FieldGrammar {
        FieldGrammar::from_flags(self.mode, self.allow_ratio)
    }

    /// Fraction digits kept in the display value.
    pub fn precision(&self) -> usize {
        match self.mode {
            ValidationMode::Decimal => self.max_fraction_digits.unwrap_or(DEFAULT_MAX_ROUND_DIGITS),
            ValidationMode::Integer => 0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        if !(self.increment.is_finite() && self.increment > 0.0) {
            return Err(ConfigError::InvalidIncrement(self.increment));
        }
        if let Some(found) = self.max_fraction_digits {
            if found > MAX_FRACTION_DIGITS {
                return Err(ConfigError::Precision {
                    found,
                    max: MAX_FRACTION_DIGITS,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_reject_inverted_and_nan() {
        assert!(NumericBounds::new(0.0, 10.0).is_ok());
        assert!(NumericBounds::new(5.0, 5.0).is_ok());
        assert!(matches!(
            NumericBounds::new(10.0, 0.0),
            Err(ConfigError::InvalidBounds { .. })
        ));
        assert!(NumericBounds::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn bounds_clamp_and_contain() {
        let bounds = NumericBounds::new(-1.0, 1.0).unwrap();
        assert!(bounds.contains(0.5));
        assert!(!bounds.contains(2.0));
        assert_eq!(bounds.clamp(2.0), 1.0);
        assert_eq!(bounds.clamp(-2.0), -1.0);
    }

    #[test]
    fn precision_depends_on_mode() {
        assert_eq!(FieldConfig::decimal().precision(), DEFAULT_MAX_ROUND_DIGITS);
        assert_eq!(FieldConfig::decimal().with_fraction_digits(1).precision(), 1);
        assert_eq!(FieldConfig::integer().with_fraction_digits(4).precision(), 0);
    }

    #[test]
    fn validate_checks_increment_and_digits() {
        assert!(FieldConfig::default().validate().is_ok());
        assert!(matches!(
            FieldConfig::default().with_increment(0.0).validate(),
            Err(ConfigError::InvalidIncrement(_))
        ));
        assert!(matches!(
            FieldConfig::default().with_fraction_digits(16).validate(),
            Err(ConfigError::Precision { found: 16, .. })
        ));
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let config: FieldConfig = toml::from_str("mode = \"integer\"").unwrap();
        assert_eq!(config.mode, ValidationMode::Integer);
        assert!(config.allow_negative);
        assert_eq!(config.increment, 1.0);
        assert_eq!(config.bounds, NumericBounds::default());
    }
}
