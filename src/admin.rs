//! Administrative "generate" trigger.
//!
//! A web admin exposes a `generate/` page per model. Submitting its form
//! posts a record count (`generate_num`) and a relation flag; the handler
//! seeds that many records and redirects back to the model's list page.
//! Rendering and routing belong to the web layer. This module holds the
//! parts with behaviour: count parsing, the seeding run, and the names the
//! web layer needs.

use seed_core::{ModelDescriptor, ModelSchema, Record, RecordStore};
use seed_generator::{DataSeeder, SeederError};
use thiserror::Error;
use tracing::info;

/// Count used when the form leaves `generate_num` empty.
pub const DEFAULT_GENERATE_COUNT: u64 = 1;

/// Where the browser is sent after a successful run.
pub const REDIRECT_TO: &str = "../";

/// Errors from the generate action.
#[derive(Debug, Error)]
pub enum AdminError {
    /// `generate_num` was not a positive integer
    #[error("Invalid generate count '{0}': expected a positive integer")]
    InvalidCount(String),

    /// The seeding run failed
    #[error(transparent)]
    Seeder(#[from] SeederError),
}

/// Submitted generate form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateForm {
    /// Raw `generate_num` field; absent when the field was not posted
    pub generate_num: Option<String>,
    /// Whether to create related records for foreign keys
    pub generate_related: bool,
}

/// Result of a successful generate action.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOutcome {
    pub records: Vec<Record>,
    pub redirect_to: &'static str,
}

/// Parse the posted record count.
///
/// Missing or blank input means [`DEFAULT_GENERATE_COUNT`]. Anything that
/// is not an integer of at least 1 is rejected.
pub fn parse_generate_count(raw: Option<&str>) -> Result<u64, AdminError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_GENERATE_COUNT);
    };

    match raw.parse::<u64>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(AdminError::InvalidCount(raw.to_string())),
    }
}

/// Handle a posted generate form for `model`.
pub fn generate<S: RecordStore>(
    schema: &ModelSchema,
    model: &str,
    form: &GenerateForm,
    store: &mut S,
) -> Result<GenerateOutcome, AdminError> {
    let count = parse_generate_count(form.generate_num.as_deref())?;

    let records = DataSeeder::new(schema, model)?
        .with_seeds(count)
        .with_generate_related(form.generate_related)
        .seed(store)?;

    info!("Admin generated {} {} record(s)", records.len(), model);

    Ok(GenerateOutcome {
        records,
        redirect_to: REDIRECT_TO,
    })
}

/// Title of the generate page, e.g. `Generate Orders` for `shop.Order`.
pub fn generate_title(model: &ModelDescriptor) -> String {
    format!("Generate {}s", short_name(model))
}

/// Route name of the generate page, e.g. `shop_order_generate`.
pub fn generate_route_name(model: &ModelDescriptor) -> String {
    let app = model
        .name
        .rsplit_once('.')
        .map_or("", |(app, _)| app)
        .replace('.', "_");
    let short = short_name(model).to_lowercase();

    if app.is_empty() {
        format!("{short}_generate")
    } else {
        format!("{app}_{short}_generate")
    }
}

fn short_name(model: &ModelDescriptor) -> &str {
    model
        .name
        .rsplit_once('.')
        .map_or(model.name.as_str(), |(_, name)| name)
}
