use super::fields::FieldErrors;
use super::payload::Payload;
use crate::domain::region::{
    NewRegion, RegionCode, RegionId, RegionName, RegionReference, RegionUpsert,
};
use serde_json::Value;

const REGION_FIELDS: &[&str] = &["id", "code", "name"];

/// Field checks of the region endpoints. The code uniqueness rule for new
/// regions needs the store and is applied by the command service.
pub fn validate_region(value: &Value) -> Result<RegionUpsert, FieldErrors> {
    let mut payload = Payload::parse(value, REGION_FIELDS)?;

    let id = payload
        .integer("id", false)
        .and_then(|raw| payload.check("id", RegionId::new(raw)));
    let code = payload
        .string("code", true)
        .and_then(|raw| payload.check("code", RegionCode::new(raw)));
    let name = payload
        .string("name", false)
        .and_then(|raw| payload.check("name", RegionName::new(raw)));

    let errors = payload.into_errors();
    match code {
        Some(code) if errors.is_empty() => Ok(RegionUpsert { id, code, name }),
        _ => Err(errors),
    }
}

/// One element of an article's `regions` list: `{id}` refers to a stored
/// region, anything else describes a region to get or create.
pub fn validate_region_reference(value: &Value) -> Result<RegionReference, FieldErrors> {
    let mut payload = Payload::parse(value, REGION_FIELDS)?;
    let by_id = payload.contains("id");

    let id = payload
        .integer("id", false)
        .and_then(|raw| payload.check("id", RegionId::new(raw)));
    let code = payload
        .string("code", !by_id)
        .and_then(|raw| payload.check("code", RegionCode::new(raw)));
    let name = payload
        .string("name", false)
        .and_then(|raw| payload.check("name", RegionName::new(raw)));

    let errors = payload.into_errors();
    if !errors.is_empty() {
        return Err(errors);
    }
    match (id, code) {
        (Some(id), _) => Ok(RegionReference::Existing(id)),
        (None, Some(code)) => Ok(RegionReference::New(NewRegion {
            code,
            name: name.unwrap_or_default(),
        })),
        (None, None) => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn code_is_required_and_exactly_two_chars() {
        let errors = validate_region(&json!({ "name": "Austria" })).unwrap_err();
        assert_eq!(
            errors.get("code"),
            Some(&["Missing data for required field.".to_string()][..])
        );

        let errors = validate_region(&json!({ "code": "AUT" })).unwrap_err();
        assert_eq!(errors.get("code"), Some(&["Length must be 2.".to_string()][..]));
    }

    #[test]
    fn name_is_optional() {
        let upsert = validate_region(&json!({ "code": "AU" })).unwrap();
        assert!(upsert.name.is_none());
        assert!(upsert.id.is_none());
    }

    #[test]
    fn reference_by_id_ignores_missing_code() {
        let reference = validate_region_reference(&json!({ "id": 3 })).unwrap();
        assert_eq!(reference, RegionReference::Existing(RegionId::new(3).unwrap()));
    }

    #[test]
    fn reference_without_id_describes_a_new_region() {
        let reference =
            validate_region_reference(&json!({ "code": "US", "name": "United States of America" }))
                .unwrap();
        match reference {
            RegionReference::New(region) => {
                assert_eq!(region.code.as_str(), "US");
                assert_eq!(region.name.as_str(), "United States of America");
            }
            other => panic!("unexpected reference {other:?}"),
        }
    }

    #[test]
    fn reference_without_id_or_code_is_rejected() {
        let errors = validate_region_reference(&json!({ "name": "Nowhere" })).unwrap_err();
        assert!(errors.get("code").is_some());
    }
}
