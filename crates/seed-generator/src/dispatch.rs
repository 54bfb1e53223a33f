//! Field type to generator dispatch.
//!
//! The table is a pure function over [`FieldType`]. Types without an entry
//! (auto keys, binary, JSON and relations) are left to the schema default
//! or, for relations, to the seeder's relation resolution.

use crate::generators::{
    BooleanGenerator, DateGenerator, DateTimeGenerator, DecimalGenerator, EmailGenerator,
    FloatGenerator, Generator, IntegerGenerator, IpAddressGenerator, PositiveIntegerGenerator,
    StringGenerator, TimeGenerator, UrlGenerator, UuidGenerator,
};
use seed_core::FieldType;

/// Generator strategy selected for a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Integer,
    PositiveInteger,
    Boolean,
    String,
    Date,
    DateTime,
    Time,
    Decimal,
    Float,
    Email,
    Url,
    IpAddress,
    Uuid,
}

impl GeneratorKind {
    /// Instantiate the strategy with its default configuration.
    pub fn build(self) -> Generator {
        match self {
            GeneratorKind::Integer => Generator::Integer(IntegerGenerator::default()),
            GeneratorKind::PositiveInteger => {
                Generator::PositiveInteger(PositiveIntegerGenerator::default())
            }
            GeneratorKind::Boolean => Generator::Boolean(BooleanGenerator),
            GeneratorKind::String => Generator::String(StringGenerator::default()),
            GeneratorKind::Date => Generator::Date(DateGenerator::default()),
            GeneratorKind::DateTime => Generator::DateTime(DateTimeGenerator::default()),
            GeneratorKind::Time => Generator::Time(TimeGenerator),
            GeneratorKind::Decimal => Generator::Decimal(DecimalGenerator::default()),
            GeneratorKind::Float => Generator::Float(FloatGenerator::default()),
            GeneratorKind::Email => Generator::Email(EmailGenerator::default()),
            GeneratorKind::Url => Generator::Url(UrlGenerator::default()),
            GeneratorKind::IpAddress => Generator::IpAddress(IpAddressGenerator),
            GeneratorKind::Uuid => Generator::Uuid(UuidGenerator),
        }
    }
}

/// Look up the generator for a field type.
pub fn generator_for(field_type: FieldType) -> Option<GeneratorKind> {
    let kind = match field_type {
        FieldType::BigInteger | FieldType::Integer | FieldType::SmallInteger => {
            GeneratorKind::Integer
        }
        FieldType::PositiveInteger | FieldType::PositiveSmallInteger => {
            GeneratorKind::PositiveInteger
        }
        FieldType::Boolean | FieldType::NullBoolean => GeneratorKind::Boolean,
        FieldType::Char | FieldType::Text => GeneratorKind::String,
        FieldType::Date => GeneratorKind::Date,
        FieldType::DateTime => GeneratorKind::DateTime,
        FieldType::Time => GeneratorKind::Time,
        FieldType::Decimal => GeneratorKind::Decimal,
        FieldType::Float => GeneratorKind::Float,
        FieldType::Email => GeneratorKind::Email,
        FieldType::Url => GeneratorKind::Url,
        FieldType::IpAddress => GeneratorKind::IpAddress,
        FieldType::Uuid => GeneratorKind::Uuid,
        FieldType::Auto
        | FieldType::BigAuto
        | FieldType::Binary
        | FieldType::Json
        | FieldType::ForeignKey => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ValueGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mapping() {
        let cases = [
            (FieldType::BigInteger, GeneratorKind::Integer),
            (FieldType::Integer, GeneratorKind::Integer),
            (FieldType::SmallInteger, GeneratorKind::Integer),
            (FieldType::PositiveInteger, GeneratorKind::PositiveInteger),
            (FieldType::PositiveSmallInteger, GeneratorKind::PositiveInteger),
            (FieldType::Boolean, GeneratorKind::Boolean),
            (FieldType::NullBoolean, GeneratorKind::Boolean),
            (FieldType::Char, GeneratorKind::String),
            (FieldType::Text, GeneratorKind::String),
            (FieldType::Date, GeneratorKind::Date),
            (FieldType::DateTime, GeneratorKind::DateTime),
            (FieldType::Time, GeneratorKind::Time),
            (FieldType::Decimal, GeneratorKind::Decimal),
            (FieldType::Float, GeneratorKind::Float),
            (FieldType::Email, GeneratorKind::Email),
            (FieldType::Url, GeneratorKind::Url),
            (FieldType::IpAddress, GeneratorKind::IpAddress),
            (FieldType::Uuid, GeneratorKind::Uuid),
        ];

        for (field_type, kind) in cases {
            assert_eq!(generator_for(field_type), Some(kind), "{field_type}");
        }
    }

    #[test]
    fn test_unmapped_types() {
        for field_type in [
            FieldType::Auto,
            FieldType::BigAuto,
            FieldType::Binary,
            FieldType::Json,
            FieldType::ForeignKey,
        ] {
            assert_eq!(generator_for(field_type), None, "{field_type}");
        }
    }

    #[test]
    fn test_generated_values_fit_their_column() {
        let mut rng = StdRng::seed_from_u64(42);

        for field_type in FieldType::ALL {
            let Some(kind) = generator_for(field_type) else {
                continue;
            };
            let generator = kind.build();
            for _ in 0..20 {
                let value = generator.generate(&mut rng);
                assert!(!value.is_null(), "{field_type} generated null");
                assert!(
                    field_type.accepts(&value),
                    "{field_type} does not accept {value:?}"
                );
            }
        }
    }
}
