//! Model identifier resolution for the command line.

use seed_core::{ModelDescriptor, ModelSchema};

/// Resolve every identifier before any seeding starts.
///
/// Fails on the first identifier the schema does not define, naming it.
pub fn resolve_models<'a, S: AsRef<str>>(
    schema: &'a ModelSchema,
    identifiers: &[S],
) -> anyhow::Result<Vec<&'a ModelDescriptor>> {
    if identifiers.is_empty() {
        anyhow::bail!("At least one model must be given");
    }

    identifiers
        .iter()
        .map(|id| {
            let id = id.as_ref();
            schema
                .get_model(id)
                .ok_or_else(|| anyhow::anyhow!("Model \"{id}\" does not exist in schema"))
        })
        .collect()
}

/// One line per model: its name followed by `field: type` pairs.
pub fn describe_models(schema: &ModelSchema) -> Vec<String> {
    schema
        .models
        .iter()
        .map(|model| {
            let fields: Vec<String> = model
                .fields
                .iter()
                .map(|field| match field.related_model() {
                    Some(target) => format!("{}: {} -> {}", field.name, field.field_type, target),
                    None => format!("{}: {}", field.name, field.field_type),
                })
                .collect();
            format!("{} ({})", model.name, fields.join(", "))
        })
        .collect()
}
