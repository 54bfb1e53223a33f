//! Exact decimal value generators.
//!
//! A decimal is drawn as a float with the same range and precision, then
//! converted to `rust_decimal::Decimal` and rounded again so the result
//! carries at most `precision` fractional digits.

use super::numeric::{FloatGenerator, DEFAULT_PRECISION, DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN};
use super::ValueGenerator;
use crate::error::GeneratorError;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use seed_core::Value;

/// Uniform decimal in `[range_min, range_max]` with `precision` places.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecimalGenerator(FloatGenerator);

impl DecimalGenerator {
    pub fn new(range_min: f64, range_max: f64, precision: u32) -> Result<Self, GeneratorError> {
        let float = FloatGenerator::new(range_min, range_max, precision)?;
        for bound in [range_min, range_max] {
            if Decimal::from_f64(bound).is_none() {
                return Err(GeneratorError::DecimalOutOfRange(bound));
            }
        }
        Ok(Self(float))
    }

    pub fn range_min(&self) -> f64 {
        self.0.range_min()
    }

    pub fn range_max(&self) -> f64 {
        self.0.range_max()
    }

    pub fn precision(&self) -> u32 {
        self.0.precision()
    }

    /// Draw a raw decimal.
    ///
    /// Returns `None` only if the draw cannot be represented, which the
    /// constructor rules out.
    pub fn generate_decimal<R: Rng>(&self, rng: &mut R) -> Option<Decimal> {
        let raw = self.0.generate_f64(rng);
        Decimal::from_f64(raw).map(|d| d.round_dp(self.0.precision()))
    }
}

impl ValueGenerator for DecimalGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        // Unreachable Null: `new` rejects bounds `Decimal::from_f64` cannot
        // take, and every draw lies within them.
        self.generate_decimal(rng)
            .map(Value::Decimal)
            .unwrap_or(Value::Null)
    }
}

/// Decimal in `[0, range_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositiveDecimalGenerator(DecimalGenerator);

impl PositiveDecimalGenerator {
    pub fn new(range_max: f64, precision: u32) -> Result<Self, GeneratorError> {
        DecimalGenerator::new(0.0, range_max, precision).map(Self)
    }

    pub fn inner(&self) -> &DecimalGenerator {
        &self.0
    }
}

impl Default for PositiveDecimalGenerator {
    fn default() -> Self {
        Self(DecimalGenerator(FloatGenerator::bounded(
            0.0,
            DEFAULT_RANGE_MAX as f64,
            DEFAULT_PRECISION,
        )))
    }
}

impl ValueGenerator for PositiveDecimalGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        self.0.generate(rng)
    }
}

/// Decimal in `[range_min, -1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeDecimalGenerator(DecimalGenerator);

impl NegativeDecimalGenerator {
    pub fn new(range_min: f64, precision: u32) -> Result<Self, GeneratorError> {
        DecimalGenerator::new(range_min, -1.0, precision).map(Self)
    }

    pub fn inner(&self) -> &DecimalGenerator {
        &self.0
    }
}

impl Default for NegativeDecimalGenerator {
    fn default() -> Self {
        Self(DecimalGenerator(FloatGenerator::bounded(
            DEFAULT_RANGE_MIN as f64,
            -1.0,
            DEFAULT_PRECISION,
        )))
    }
}

impl ValueGenerator for NegativeDecimalGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        self.0.generate(rng)
    }
}
