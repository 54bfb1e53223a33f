//! Random text generator.

use super::ValueGenerator;
use crate::error::GeneratorError;
use rand::Rng;
use seed_core::Value;

/// Default maximum length of generated strings.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Characters a generated string may contain.
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// String of ASCII letters and spaces with a length in `[1, max_length]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringGenerator {
    max_length: usize,
}

impl StringGenerator {
    pub fn new(max_length: usize) -> Result<Self, GeneratorError> {
        if max_length == 0 {
            return Err(GeneratorError::InvalidMaxLength(max_length));
        }
        Ok(Self { max_length })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Draw a raw string.
    pub fn generate_string<R: Rng>(&self, rng: &mut R) -> String {
        let length = rng.gen_range(1..=self.max_length);
        (0..length)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl Default for StringGenerator {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl ValueGenerator for StringGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::String(self.generate_string(rng))
    }
}
