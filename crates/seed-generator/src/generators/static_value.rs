//! Static and null value generators.

use super::ValueGenerator;
use rand::Rng;
use seed_core::Value;
use serde_yaml::Value as YamlValue;

/// Always returns the configured value.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticGenerator {
    value: Value,
}

impl StaticGenerator {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Build from a YAML literal.
    pub fn from_yaml(yaml: &YamlValue) -> Self {
        Self::new(Value::from_yaml(yaml))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Default for StaticGenerator {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

impl ValueGenerator for StaticGenerator {
    fn generate<R: Rng>(&self, _rng: &mut R) -> Value {
        self.value.clone()
    }
}

/// Always returns [`Value::Null`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoneGenerator;

impl ValueGenerator for NoneGenerator {
    fn generate<R: Rng>(&self, _rng: &mut R) -> Value {
        Value::Null
    }
}
