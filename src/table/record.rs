use serde_json::{Map, Value};

use super::value::FieldValue;

/// A row that exposes its fields by name.
///
/// Implement this for domain structs by matching on the field name and
/// returning [`FieldValue::Missing`] for anything unknown:
///
/// ```
/// use user_table::table::{FieldValue, Record};
///
/// struct Row {
///     id: i64,
///     name: String,
/// }
///
/// impl Record for Row {
///     fn field(&self, name: &str) -> FieldValue<'_> {
///         match name {
///             "id" => FieldValue::Int(self.id),
///             "name" => FieldValue::Text(&self.name),
///             _ => FieldValue::Missing,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Value of the named field, or `Missing` when the record lacks it.
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> FieldValue<'_> {
        (**self).field(name)
    }
}

/// Dynamic records, such as objects decoded straight from JSON.
impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match self.get(name) {
            Some(value) => json_field(value),
            None => FieldValue::Missing,
        }
    }
}

fn json_field(value: &Value) -> FieldValue<'_> {
    match value {
        Value::String(text) => FieldValue::Text(text),
        Value::Number(number) => match number.as_i64() {
            Some(n) => FieldValue::Int(n),
            None => number
                .as_f64()
                .map_or(FieldValue::Missing, FieldValue::Float),
        },
        Value::Bool(b) => FieldValue::Bool(*b),
        // Nested structures have no natural text form or order here.
        Value::Null | Value::Array(_) | Value::Object(_) => FieldValue::Missing,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn json_objects_expose_fields() {
        let row = object(json!({
            "id": 7,
            "score": 1.5,
            "name": "Al",
            "admin": false,
            "note": null,
            "tags": ["a"]
        }));

        assert_eq!(row.field("id"), FieldValue::Int(7));
        assert_eq!(row.field("score"), FieldValue::Float(1.5));
        assert_eq!(row.field("name"), FieldValue::Text("Al"));
        assert_eq!(row.field("admin"), FieldValue::Bool(false));
        assert_eq!(row.field("note"), FieldValue::Missing);
        assert_eq!(row.field("tags"), FieldValue::Missing);
        assert_eq!(row.field("absent"), FieldValue::Missing);
    }

    #[test]
    fn large_unsigned_numbers_fall_back_to_float() {
        let row = object(json!({ "big": u64::MAX }));
        assert!(matches!(row.field("big"), FieldValue::Float(_)));
    }
}
