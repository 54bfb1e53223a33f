//! Composite generators for email addresses, URLs and IPv4 addresses.

use super::numeric::PositiveIntegerGenerator;
use super::string::StringGenerator;
use super::ValueGenerator;
use crate::error::GeneratorError;
use rand::Rng;
use seed_core::Value;

/// `{local}@{domain}.com`, both parts drawn from a [`StringGenerator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailGenerator {
    part: StringGenerator,
}

impl EmailGenerator {
    pub fn new(max_length: usize) -> Result<Self, GeneratorError> {
        StringGenerator::new(max_length).map(|part| Self { part })
    }

    pub fn max_length(&self) -> usize {
        self.part.max_length()
    }
}

impl ValueGenerator for EmailGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        let local = self.part.generate_string(rng);
        let domain = self.part.generate_string(rng);
        Value::String(format!("{local}@{domain}.com"))
    }
}

/// `http://{label}.com`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlGenerator {
    label: StringGenerator,
}

impl UrlGenerator {
    pub fn new(max_length: usize) -> Result<Self, GeneratorError> {
        StringGenerator::new(max_length).map(|label| Self { label })
    }
}

impl ValueGenerator for UrlGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::String(format!("http://{}.com", self.label.generate_string(rng)))
    }
}

const OCTET: PositiveIntegerGenerator = PositiveIntegerGenerator::bounded(255);

/// Dotted-quad IPv4 address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpAddressGenerator;

impl ValueGenerator for IpAddressGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        let octets: Vec<String> = (0..4)
            .map(|_| OCTET.generate_i64(rng).to_string())
            .collect();
        Value::String(octets.join("."))
    }
}
