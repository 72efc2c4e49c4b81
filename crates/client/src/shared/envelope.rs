//! Response-envelope normalization.
//!
//! The backend's endpoints were built at different times and wrap their
//! payloads differently: bare arrays, `{data: [...]}`, `{data: {data:
//! [...]}}` and `{success, data}` all exist in the wild. Every service
//! wrapper funnels raw bodies through this module so callers see exactly
//! one shape. HTTP status alone decides success; a body-level `success`
//! field only helps locate the payload.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::error::ApiError;

/// Payload extracted from a raw response body
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<T> {
    List(Vec<T>),
    Record(T),
    Empty,
}

/// Apply the unwrapping rule to a raw body.
///
/// In order: the body itself is an array; `data` is an array; `data.data`
/// is an array (double-wrapped era); `data` is an object or scalar; a bare
/// object with neither `data` nor `success` keys is taken as the record
/// itself. Anything else is `Empty`: an odd envelope
/// degrades to an empty screen instead of a crash.
pub fn normalize<T: DeserializeOwned>(body: Value) -> Result<Normalized<T>, ApiError> {
    match extract(body) {
        Extracted::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode(item)?);
            }
            Ok(Normalized::List(out))
        }
        Extracted::Record(value) => Ok(Normalized::Record(decode(value)?)),
        Extracted::BareRecord(value) => {
            // Legacy endpoints return the record with no wrapper at all.
            // A bare object that fails to decode is an unrecognized
            // envelope, not an error.
            match serde_json::from_value::<T>(value) {
                Ok(record) => Ok(Normalized::Record(record)),
                Err(_) => Ok(Normalized::Empty),
            }
        }
        Extracted::Empty => Ok(Normalized::Empty),
    }
}

/// Normalize a list response: `Empty` becomes `[]`, a single record becomes
/// a one-element list. Never returns "null".
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    Ok(match normalize(body)? {
        Normalized::List(items) => items,
        Normalized::Record(record) => vec![record],
        Normalized::Empty => Vec::new(),
    })
}

/// Normalize a single-record response: `Empty` becomes `None`, a list
/// yields its first element.
pub fn normalize_record<T: DeserializeOwned>(body: Value) -> Result<Option<T>, ApiError> {
    Ok(match normalize(body)? {
        Normalized::List(items) => items.into_iter().next(),
        Normalized::Record(record) => Some(record),
        Normalized::Empty => None,
    })
}

enum Extracted {
    List(Vec<Value>),
    Record(Value),
    /// Object that may be the record itself (no envelope keys present)
    BareRecord(Value),
    Empty,
}

fn extract(body: Value) -> Extracted {
    match body {
        Value::Array(items) => Extracted::List(items),
        Value::Object(mut map) => {
            let has_success = map.contains_key("success");
            match map.remove("data") {
                Some(Value::Array(items)) => Extracted::List(items),
                Some(Value::Object(mut inner)) => {
                    // {data: {data: [...]}}, the double-wrapped era
                    match inner.remove("data") {
                        Some(Value::Array(items)) => Extracted::List(items),
                        Some(other) => {
                            inner.insert("data".to_string(), other);
                            Extracted::Record(Value::Object(inner))
                        }
                        None => Extracted::Record(Value::Object(inner)),
                    }
                }
                Some(Value::Null) | None => {
                    if has_success || map.is_empty() {
                        Extracted::Empty
                    } else {
                        Extracted::BareRecord(Value::Object(map))
                    }
                }
                // {success: true, data: "..."}, scalar payloads (created ids)
                Some(other) => Extracted::Record(other),
            }
        }
        _ => Extracted::Empty,
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_three_envelope_shapes_normalize_the_same() {
        let bodies = [
            json!({"data": [1, 2, 3]}),
            json!({"data": {"data": [1, 2, 3]}}),
            json!({"success": true, "data": [1, 2, 3]}),
        ];
        for body in bodies {
            let items: Vec<i64> = normalize_list(body).unwrap();
            assert_eq!(items, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_bare_array_body() {
        let items: Vec<i64> = normalize_list(json!([4, 5])).unwrap();
        assert_eq!(items, vec![4, 5]);
    }

    #[test]
    fn test_unrecognized_envelopes_are_empty_lists() {
        let empty: Vec<i64> = normalize_list(json!({})).unwrap();
        assert!(empty.is_empty());
        let null_data: Vec<i64> = normalize_list(json!({"data": null})).unwrap();
        assert!(null_data.is_empty());
        let success_only: Vec<i64> = normalize_list(json!({"success": false})).unwrap();
        assert!(success_only.is_empty());
    }

    #[test]
    fn test_record_under_data() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Rec {
            id: i64,
        }
        let rec: Option<Rec> = normalize_record(json!({"data": {"id": 7}})).unwrap();
        assert_eq!(rec, Some(Rec { id: 7 }));
    }

    #[test]
    fn test_bare_record_body() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Rec {
            id: i64,
        }
        let rec: Option<Rec> = normalize_record(json!({"id": 9})).unwrap();
        assert_eq!(rec, Some(Rec { id: 9 }));
    }

    #[test]
    fn test_bare_object_that_is_not_the_record_is_empty() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Rec {
            id: i64,
        }
        let rec: Option<Rec> = normalize_record(json!({"unrelated": true})).unwrap();
        assert_eq!(rec, None);
    }

    #[test]
    fn test_scalar_data_payload() {
        let id: Option<String> =
            normalize_record(json!({"success": true, "data": "new-id-1"})).unwrap();
        assert_eq!(id, Some("new-id-1".to_string()));
    }

    #[test]
    fn test_record_normalizes_from_list_takes_first() {
        let first: Option<i64> = normalize_record(json!({"data": [10, 11]})).unwrap();
        assert_eq!(first, Some(10));
    }

    #[test]
    fn test_decode_failure_inside_recognized_envelope_is_an_error() {
        let result: Result<Vec<i64>, _> = normalize_list(json!({"data": ["not a number"]}));
        let err = result.unwrap_err();
        assert_eq!(err.message, "Failed to parse server response");
    }
}
