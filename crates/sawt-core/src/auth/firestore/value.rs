//! Conversion between plain JSON and Firestore's typed value encoding.
//!
//! Firestore REST documents wrap every value in a single-key object such as
//! `{"stringValue": "x"}` or `{"integerValue": "42"}`. Integers travel as
//! strings.

use serde_json::{Map, Number, Value};

use crate::auth::{AuthError, AuthResult};

/// Encode a JSON object as a Firestore `fields` map.
pub fn encode_fields(value: &Value) -> AuthResult<Map<String, Value>> {
    let Value::Object(object) = value else {
        return Err(AuthError::Store(
            "document body must be a JSON object".to_string(),
        ));
    };
    Ok(object
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect())
}

pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => serde_json::json!({ "nullValue": null }),
        Value::Bool(flag) => serde_json::json!({ "booleanValue": flag }),
        Value::Number(number) if number.is_f64() => {
            serde_json::json!({ "doubleValue": number })
        }
        Value::Number(number) => serde_json::json!({ "integerValue": number.to_string() }),
        Value::String(text) => serde_json::json!({ "stringValue": text }),
        Value::Array(items) => serde_json::json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(object) => serde_json::json!({
            "mapValue": {
                "fields": object
                    .iter()
                    .map(|(key, value)| (key.clone(), encode_value(value)))
                    .collect::<Map<String, Value>>()
            }
        }),
    }
}

/// Decode a Firestore `fields` map back into a JSON object.
pub fn decode_fields(fields: &Map<String, Value>) -> AuthResult<Value> {
    let mut object = Map::with_capacity(fields.len());
    for (key, value) in fields {
        object.insert(key.clone(), decode_value(value)?);
    }
    Ok(Value::Object(object))
}

pub fn decode_value(value: &Value) -> AuthResult<Value> {
    let Some((kind, inner)) = value.as_object().and_then(|object| object.iter().next()) else {
        return Err(AuthError::Store(format!(
            "malformed Firestore value: {value}"
        )));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| malformed(kind, inner)),
        "integerValue" => decode_integer(inner).ok_or_else(|| malformed(kind, inner)),
        "doubleValue" => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| malformed(kind, inner)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|text| Value::String(text.to_string()))
            .ok_or_else(|| malformed(kind, inner)),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(decode_value).collect::<AuthResult<Vec<_>>>())
                .transpose()?
                .unwrap_or_default();
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => decode_fields(fields),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(AuthError::Store(format!(
            "unsupported Firestore value type: {other}"
        ))),
    }
}

fn decode_integer(inner: &Value) -> Option<Value> {
    if let Some(text) = inner.as_str() {
        if let Ok(number) = text.parse::<i64>() {
            return Some(Value::from(number));
        }
        return text.parse::<u64>().ok().map(Value::from);
    }
    (inner.is_i64() || inner.is_u64()).then(|| inner.clone())
}

fn malformed(kind: &str, inner: &Value) -> AuthError {
    AuthError::Store(format!("malformed Firestore {kind}: {inner}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn integers_are_sent_as_strings() {
        assert_eq!(
            encode_value(&json!(100_000_000)),
            json!({ "integerValue": "100000000" })
        );
        assert_eq!(encode_value(&json!(1.5)), json!({ "doubleValue": 1.5 }));
    }

    #[test]
    fn nested_values_are_wrapped() {
        let encoded = encode_fields(&json!({
            "stats": { "likes": 0 },
            "ownedItems": [],
            "isAdmin": false
        }))
        .unwrap();
        assert_eq!(
            encoded["stats"],
            json!({ "mapValue": { "fields": { "likes": { "integerValue": "0" } } } })
        );
        assert_eq!(encoded["ownedItems"], json!({ "arrayValue": { "values": [] } }));
        assert_eq!(encoded["isAdmin"], json!({ "booleanValue": false }));
    }

    #[test]
    fn decodes_document_fields_from_the_wire() {
        let fields = json!({
            "name": { "stringValue": "Layla" },
            "coins": { "integerValue": "1000" },
            "createdAt": { "timestampValue": "2025-03-01T10:00:00.123Z" },
            "ownedItems": { "arrayValue": {} },
            "stats": { "mapValue": {} },
            "frame": { "nullValue": null }
        });
        let decoded = decode_fields(fields.as_object().unwrap()).unwrap();
        assert_eq!(
            decoded,
            json!({
                "name": "Layla",
                "coins": 1000,
                "createdAt": "2025-03-01T10:00:00.123Z",
                "ownedItems": [],
                "stats": {},
                "frame": null
            })
        );
    }

    #[test]
    fn rejects_non_object_documents_and_unknown_types() {
        assert!(encode_fields(&json!([1, 2])).is_err());
        assert!(decode_value(&json!({ "mysteryValue": 1 })).is_err());
        assert!(decode_value(&json!("bare")).is_err());
    }
}
