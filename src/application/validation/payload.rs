// src/application/validation/payload.rs
use super::fields::{FieldErrors, messages};
use crate::domain::errors::DomainResult;
use serde_json::{Map, Value};

/// Reads typed fields out of a JSON object while accumulating errors.
///
/// Readers return `None` both when an optional field is absent and when the
/// field was rejected; callers finish with [`Payload::into_errors`] and only
/// build their result when it is empty.
pub(crate) struct Payload<'a> {
    fields: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> Payload<'a> {
    /// Fails when `value` is not an object. Keys outside `known` are
    /// recorded as unknown fields.
    pub(crate) fn parse(value: &'a Value, known: &[&str]) -> Result<Self, FieldErrors> {
        let fields = value
            .as_object()
            .ok_or_else(|| FieldErrors::schema(messages::INVALID_INPUT))?;

        let mut errors = FieldErrors::new();
        for key in fields.keys() {
            if !known.contains(&key.as_str()) {
                errors.add(key.as_str(), messages::UNKNOWN_FIELD);
            }
        }

        Ok(Self { fields, errors })
    }

    pub(crate) fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    fn raw(&mut self, field: &str, required: bool) -> Option<&'a Value> {
        let fields = self.fields;
        match fields.get(field) {
            None => {
                if required {
                    self.errors.add(field, messages::MISSING);
                }
                None
            }
            Some(Value::Null) => {
                self.errors.add(field, messages::NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    pub(crate) fn string(&mut self, field: &str, required: bool) -> Option<&'a str> {
        let value = self.raw(field, required)?;
        match value.as_str() {
            Some(text) => Some(text),
            None => {
                self.errors.add(field, messages::NOT_A_STRING);
                None
            }
        }
    }

    pub(crate) fn integer(&mut self, field: &str, required: bool) -> Option<i64> {
        let value = self.raw(field, required)?;
        match as_integer(value) {
            Some(number) => Some(number),
            None => {
                self.errors.add(field, messages::NOT_AN_INTEGER);
                None
            }
        }
    }

    pub(crate) fn list(&mut self, field: &str) -> Option<&'a [Value]> {
        let value = self.raw(field, false)?;
        match value.as_array() {
            Some(items) => Some(items.as_slice()),
            None => {
                self.errors.add(field, messages::NOT_A_LIST);
                None
            }
        }
    }

    /// Records the message of a failed domain constructor under `field`.
    pub(crate) fn check<T>(&mut self, field: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.add(field, err.message());
                None
            }
        }
    }

    pub(crate) fn nest(&mut self, field: &str, index: usize, errors: FieldErrors) {
        self.errors.add_nested(field, index, errors);
    }

    pub(crate) fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

/// Integers may arrive as JSON integers, integral floats or numeric strings.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && float.abs() < i64::MAX as f64)
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
