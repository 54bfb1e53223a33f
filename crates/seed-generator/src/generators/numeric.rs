//! Numeric value generators.
//!
//! Integers are drawn uniformly from an inclusive range. Floats are drawn
//! uniformly from an inclusive range and then rounded to `precision`
//! decimal places. The positive variants pin the lower bound to 0 and the
//! negative variants pin the upper bound to -1.

use super::ValueGenerator;
use crate::error::GeneratorError;
use rand::Rng;
use seed_core::Value;

/// Default lower bound for integer and float ranges.
pub const DEFAULT_RANGE_MIN: i64 = -1_000_000_000;

/// Default upper bound for integer and float ranges.
pub const DEFAULT_RANGE_MAX: i64 = 1_000_000_000;

/// Default number of decimal places for floats and decimals.
pub const DEFAULT_PRECISION: u32 = 1;

/// Largest accepted precision; matches the maximum scale of an exact decimal.
pub const MAX_PRECISION: u32 = 28;

/// Round to `precision` decimal places.
///
/// Values too large to scale are returned unchanged.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

// ============================================================================
// Integers
// ============================================================================

/// Uniform integer in `[range_min, range_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerGenerator {
    range_min: i64,
    range_max: i64,
}

impl IntegerGenerator {
    pub fn new(range_min: i64, range_max: i64) -> Result<Self, GeneratorError> {
        if range_min > range_max {
            return Err(GeneratorError::InvalidRange {
                min: range_min.to_string(),
                max: range_max.to_string(),
            });
        }
        Ok(Self::bounded(range_min, range_max))
    }

    /// Construct from bounds already known to be ordered.
    pub(crate) const fn bounded(range_min: i64, range_max: i64) -> Self {
        Self {
            range_min,
            range_max,
        }
    }

    pub fn range_min(&self) -> i64 {
        self.range_min
    }

    pub fn range_max(&self) -> i64 {
        self.range_max
    }

    /// Draw a raw integer.
    pub fn generate_i64<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.range_min..=self.range_max)
    }
}

impl Default for IntegerGenerator {
    fn default() -> Self {
        Self::bounded(DEFAULT_RANGE_MIN, DEFAULT_RANGE_MAX)
    }
}

impl ValueGenerator for IntegerGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::Int(self.generate_i64(rng))
    }
}

/// Uniform integer in `[0, range_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveIntegerGenerator(IntegerGenerator);

impl PositiveIntegerGenerator {
    pub fn new(range_max: i64) -> Result<Self, GeneratorError> {
        IntegerGenerator::new(0, range_max).map(Self)
    }

    pub(crate) const fn bounded(range_max: i64) -> Self {
        Self(IntegerGenerator::bounded(0, range_max))
    }

    pub fn range_max(&self) -> i64 {
        self.0.range_max
    }

    pub fn generate_i64<R: Rng>(&self, rng: &mut R) -> i64 {
        self.0.generate_i64(rng)
    }
}

impl Default for PositiveIntegerGenerator {
    fn default() -> Self {
        Self::bounded(DEFAULT_RANGE_MAX)
    }
}

impl ValueGenerator for PositiveIntegerGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        self.0.generate(rng)
    }
}

/// Uniform integer in `[range_min, -1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeIntegerGenerator(IntegerGenerator);

impl NegativeIntegerGenerator {
    pub fn new(range_min: i64) -> Result<Self, GeneratorError> {
        IntegerGenerator::new(range_min, -1).map(Self)
    }

    pub fn range_min(&self) -> i64 {
        self.0.range_min
    }
}

impl Default for NegativeIntegerGenerator {
    fn default() -> Self {
        Self(IntegerGenerator::bounded(DEFAULT_RANGE_MIN, -1))
    }
}

impl ValueGenerator for NegativeIntegerGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        self.0.generate(rng)
    }
}

// ============================================================================
// Floats
// ============================================================================

/// Uniform float in `[range_min, range_max]`, rounded to `precision` places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatGenerator {
    range_min: f64,
    range_max: f64,
    precision: u32,
}

impl FloatGenerator {
    pub fn new(range_min: f64, range_max: f64, precision: u32) -> Result<Self, GeneratorError> {
        for bound in [range_min, range_max] {
            if !bound.is_finite() {
                return Err(GeneratorError::NonFiniteBound(bound));
            }
        }
        if range_min > range_max {
            return Err(GeneratorError::InvalidRange {
                min: range_min.to_string(),
                max: range_max.to_string(),
            });
        }
        // gen_range samples over the span, which must itself be finite.
        if !(range_max - range_min).is_finite() {
            return Err(GeneratorError::RangeOverflow {
                min: range_min,
                max: range_max,
            });
        }
        if precision > MAX_PRECISION {
            return Err(GeneratorError::InvalidPrecision {
                precision,
                max: MAX_PRECISION,
            });
        }
        Ok(Self::bounded(range_min, range_max, precision))
    }

    /// Construct from a configuration already known to be valid.
    pub(crate) const fn bounded(range_min: f64, range_max: f64, precision: u32) -> Self {
        Self {
            range_min,
            range_max,
            precision,
        }
    }

    pub fn range_min(&self) -> f64 {
        self.range_min
    }

    pub fn range_max(&self) -> f64 {
        self.range_max
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Draw a raw float, already rounded.
    pub fn generate_f64<R: Rng>(&self, rng: &mut R) -> f64 {
        let raw = if self.range_min == self.range_max {
            self.range_min
        } else {
            rng.gen_range(self.range_min..=self.range_max)
        };
        round_to_precision(raw, self.precision)
    }
}

impl Default for FloatGenerator {
    fn default() -> Self {
        Self::bounded(
            DEFAULT_RANGE_MIN as f64,
            DEFAULT_RANGE_MAX as f64,
            DEFAULT_PRECISION,
        )
    }
}

impl ValueGenerator for FloatGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::Float(self.generate_f64(rng))
    }
}

/// Float in `[0, range_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositiveFloatGenerator(FloatGenerator);

impl PositiveFloatGenerator {
    pub fn new(range_max: f64, precision: u32) -> Result<Self, GeneratorError> {
        FloatGenerator::new(0.0, range_max, precision).map(Self)
    }

    pub fn inner(&self) -> &FloatGenerator {
        &self.0
    }
}

impl Default for PositiveFloatGenerator {
    fn default() -> Self {
        Self(FloatGenerator::bounded(
            0.0,
            DEFAULT_RANGE_MAX as f64,
            DEFAULT_PRECISION,
        ))
    }
}

impl ValueGenerator for PositiveFloatGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        self.0.generate(rng)
    }
}

/// Float in `[range_min, -1]`.
///
/// Precision is a count of decimal places, so rounding a draw that is at
/// most -1 can never reach zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeFloatGenerator(FloatGenerator);

impl NegativeFloatGenerator {
    pub fn new(range_min: f64, precision: u32) -> Result<Self, GeneratorError> {
        FloatGenerator::new(range_min, -1.0, precision).map(Self)
    }

    pub fn inner(&self) -> &FloatGenerator {
        &self.0
    }
}

impl Default for NegativeFloatGenerator {
    fn default() -> Self {
        Self(FloatGenerator::bounded(
            DEFAULT_RANGE_MIN as f64,
            -1.0,
            DEFAULT_PRECISION,
        ))
    }
}

impl ValueGenerator for NegativeFloatGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        self.0.generate(rng)
    }
}
