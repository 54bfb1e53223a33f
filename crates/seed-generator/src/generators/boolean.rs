//! Boolean value generator.

use super::ValueGenerator;
use rand::Rng;
use seed_core::Value;

/// Uniform true/false.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BooleanGenerator;

impl ValueGenerator for BooleanGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::Bool(rng.gen())
    }
}
