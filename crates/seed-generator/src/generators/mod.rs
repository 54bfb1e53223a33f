//! Individual value generators for different field types.
//!
//! Every generator owns an immutable configuration and draws randomness
//! from the RNG passed to [`ValueGenerator::generate`], so one instance can
//! be reused for any number of values.

pub mod boolean;
pub mod decimal;
pub mod network;
pub mod numeric;
pub mod static_value;
pub mod string;
pub mod timestamp;
pub mod uuid;

use rand::Rng;
use seed_core::Value;

pub use self::boolean::BooleanGenerator;
pub use self::decimal::{DecimalGenerator, NegativeDecimalGenerator, PositiveDecimalGenerator};
pub use self::network::{EmailGenerator, IpAddressGenerator, UrlGenerator};
pub use self::numeric::{
    FloatGenerator, IntegerGenerator, NegativeFloatGenerator, NegativeIntegerGenerator,
    PositiveFloatGenerator, PositiveIntegerGenerator,
};
pub use self::static_value::{NoneGenerator, StaticGenerator};
pub use self::string::StringGenerator;
pub use self::timestamp::{DateGenerator, DateTimeGenerator, TimeGenerator};
pub use self::uuid::UuidGenerator;

/// Trait for generating values.
pub trait ValueGenerator {
    /// Generate a value using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> Value;
}

/// Any configured generator.
#[derive(Debug, Clone)]
pub enum Generator {
    Static(StaticGenerator),
    None(NoneGenerator),
    Boolean(BooleanGenerator),
    Integer(IntegerGenerator),
    PositiveInteger(PositiveIntegerGenerator),
    NegativeInteger(NegativeIntegerGenerator),
    Float(FloatGenerator),
    PositiveFloat(PositiveFloatGenerator),
    NegativeFloat(NegativeFloatGenerator),
    Decimal(DecimalGenerator),
    PositiveDecimal(PositiveDecimalGenerator),
    NegativeDecimal(NegativeDecimalGenerator),
    String(StringGenerator),
    DateTime(DateTimeGenerator),
    Date(DateGenerator),
    Time(TimeGenerator),
    Email(EmailGenerator),
    Url(UrlGenerator),
    IpAddress(IpAddressGenerator),
    Uuid(UuidGenerator),
}

impl ValueGenerator for Generator {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        match self {
            Generator::Static(g) => g.generate(rng),
            Generator::None(g) => g.generate(rng),
            Generator::Boolean(g) => g.generate(rng),
            Generator::Integer(g) => g.generate(rng),
            Generator::PositiveInteger(g) => g.generate(rng),
            Generator::NegativeInteger(g) => g.generate(rng),
            Generator::Float(g) => g.generate(rng),
            Generator::PositiveFloat(g) => g.generate(rng),
            Generator::NegativeFloat(g) => g.generate(rng),
            Generator::Decimal(g) => g.generate(rng),
            Generator::PositiveDecimal(g) => g.generate(rng),
            Generator::NegativeDecimal(g) => g.generate(rng),
            Generator::String(g) => g.generate(rng),
            Generator::DateTime(g) => g.generate(rng),
            Generator::Date(g) => g.generate(rng),
            Generator::Time(g) => g.generate(rng),
            Generator::Email(g) => g.generate(rng),
            Generator::Url(g) => g.generate(rng),
            Generator::IpAddress(g) => g.generate(rng),
            Generator::Uuid(g) => g.generate(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_enum_delegates_to_wrapped_generator() {
        let mut rng = StdRng::seed_from_u64(42);

        let generator = Generator::Static(StaticGenerator::new(Value::from("Hello World")));
        assert_eq!(
            generator.generate(&mut rng),
            Value::String("Hello World".to_string())
        );

        let generator = Generator::None(NoneGenerator);
        assert!(generator.generate(&mut rng).is_null());

        let generator = Generator::Integer(IntegerGenerator::new(10, 20).unwrap());
        let value = generator.generate(&mut rng).as_i64().unwrap();
        assert!((10..=20).contains(&value));
    }

    #[test]
    fn test_same_seed_same_values() {
        let generator = Generator::Email(EmailGenerator::default());

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(generator.generate(&mut rng1), generator.generate(&mut rng2));
        }
    }
}
