//! UUID value generator.

use super::ValueGenerator;
use rand::Rng;
use seed_core::Value;
use uuid::Uuid;

/// Random version 4 UUID drawn from the caller's RNG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn generate_uuid<R: Rng>(&self, rng: &mut R) -> Uuid {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);

        bytes[6] = (bytes[6] & 0x0f) | 0x40; // version 4
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // RFC 4122 variant

        Uuid::from_bytes(bytes)
    }
}

impl ValueGenerator for UuidGenerator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::Uuid(self.generate_uuid(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuid_version_and_uniqueness() {
        let mut rng = StdRng::seed_from_u64(42);

        let first = UuidGenerator.generate_uuid(&mut rng);
        let second = UuidGenerator.generate_uuid(&mut rng);

        assert_eq!(first.get_version_num(), 4);
        assert_eq!(first.get_variant(), ::uuid::Variant::RFC4122);
        assert_ne!(first, second);
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            UuidGenerator.generate(&mut rng1),
            UuidGenerator.generate(&mut rng2)
        );
    }
}
