use super::fields::FieldErrors;
use super::payload::Payload;
use crate::domain::author::{AuthorId, AuthorUpsert, PersonName};
use serde_json::Value;

const AUTHOR_FIELDS: &[&str] = &["id", "first_name", "last_name"];

pub fn validate_author(value: &Value) -> Result<AuthorUpsert, FieldErrors> {
    let mut payload = Payload::parse(value, AUTHOR_FIELDS)?;

    let id = payload
        .integer("id", false)
        .and_then(|raw| payload.check("id", AuthorId::new(raw)));
    let first_name = payload
        .string("first_name", true)
        .and_then(|raw| payload.check("first_name", PersonName::new(raw)));
    let last_name = payload
        .string("last_name", true)
        .and_then(|raw| payload.check("last_name", PersonName::new(raw)));

    let errors = payload.into_errors();
    match (first_name, last_name) {
        (Some(first_name), Some(last_name)) if errors.is_empty() => Ok(AuthorUpsert {
            id,
            first_name,
            last_name,
        }),
        _ => Err(errors),
    }
}
