// src/application/commands/mod.rs
pub mod articles;
pub mod authors;
pub mod regions;

use serde_json::Value;

/// Path ids win over any `id` in the body. Non-object bodies are returned
/// as-is so the validators can reject them.
pub(crate) fn with_path_id(payload: Value, id: i64) -> Value {
    match payload {
        Value::Object(mut fields) => {
            fields.insert("id".into(), Value::from(id));
            Value::Object(fields)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_id_overrides_body_id() {
        let merged = with_path_id(json!({ "id": 99, "code": "US" }), 3);
        assert_eq!(merged, json!({ "id": 3, "code": "US" }));
    }

    #[test]
    fn non_objects_are_left_alone() {
        assert_eq!(with_path_id(Value::Null, 3), Value::Null);
    }
}
