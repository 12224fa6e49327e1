use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_KEY: &str = "_schema";

pub mod messages {
    pub const MISSING: &str = "Missing data for required field.";
    pub const NULL: &str = "Field may not be null.";
    pub const NOT_A_STRING: &str = "Not a valid string.";
    pub const NOT_AN_INTEGER: &str = "Not a valid integer.";
    pub const NOT_A_LIST: &str = "Not a valid list.";
    pub const UNKNOWN_FIELD: &str = "Unknown field.";
    pub const INVALID_INPUT: &str = "Invalid input type.";
    pub const INVALID_AUTHOR_ID: &str = "Invalid author id.";
    pub const INVALID_REGION_ID: &str = "Invalid region id.";
    pub const REGION_CODE_EXISTS: &str = "Region code already exists.";
}

/// Field name to messages, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::single(SCHEMA_KEY, message)
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Folds the errors of the `index`-th element of a list field into
    /// `field`, prefixing each message with the element position.
    pub fn add_nested(&mut self, field: &str, index: usize, nested: FieldErrors) {
        for (inner, messages) in nested.0 {
            for message in messages {
                let message = if inner == SCHEMA_KEY {
                    format!("[{index}]: {message}")
                } else {
                    format!("[{index}].{inner}: {message}")
                };
                self.add(field, message);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_field_map() {
        let mut errors = FieldErrors::single("author_id", messages::MISSING);
        errors.add("title", "Longer than maximum length 255.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "author_id": ["Missing data for required field."],
                "title": ["Longer than maximum length 255."],
            })
        );
    }

    #[test]
    fn nested_errors_are_prefixed_with_their_position() {
        let mut nested = FieldErrors::single("code", "Length must be 2.");
        nested.add(SCHEMA_KEY, messages::INVALID_INPUT);

        let mut errors = FieldErrors::new();
        errors.add_nested("regions", 1, nested);

        let regions = errors.get("regions").unwrap();
        assert!(regions.contains(&"[1].code: Length must be 2.".to_string()));
        assert!(regions.contains(&"[1]: Invalid input type.".to_string()));
    }

    #[test]
    fn display_joins_every_message() {
        let mut errors = FieldErrors::single("first_name", messages::MISSING);
        errors.add("last_name", messages::MISSING);
        assert_eq!(
            errors.to_string(),
            "first_name: Missing data for required field.; last_name: Missing data for required field."
        );
    }
}
