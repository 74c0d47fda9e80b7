// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raw catalog response, kept opaque until categorization.

use serde_json::Value;

/// Errors produced while decoding a catalog response body.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The body is not valid JSON.
    #[error("catalog response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The body is JSON but neither an array nor an object of records.
    #[error("catalog response must be a JSON array or object, found {found}")]
    Shape {
        /// JSON type name that was found instead.
        found: &'static str,
    },
}

/// One record of the raw response.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    /// Source identifier: the object key for keyed responses, or the array
    /// index for list responses.
    pub id: String,
    /// The untouched record.
    pub value: Value,
}

/// A decoded catalog response: records in source order.
///
/// Both `[record, ...]` and `{ "slug": record, ... }` bodies are accepted.
/// Object order is preserved, so categorization sees records in the order the
/// catalog sent them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawProjectsResponse {
    records: Vec<RawRecord>,
}

impl RawProjectsResponse {
    /// Decode a response body.
    pub fn from_json_str(body: &str) -> Result<Self, ResponseError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Decode a response body from bytes.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, ResponseError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Wrap an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ResponseError> {
        let records = match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, value)| RawRecord {
                    id: i.to_string(),
                    value,
                })
                .collect(),
            Value::Object(map) => map
                .into_iter()
                .map(|(id, value)| RawRecord { id, value })
                .collect(),
            other => {
                return Err(ResponseError::Shape {
                    found: json_type_name(&other),
                });
            }
        };
        Ok(Self { records })
    }

    /// Build a response from records directly.
    #[must_use]
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// The records in source order.
    #[must_use]
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the response holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_object_keeps_source_order() {
        let raw = RawProjectsResponse::from_json_str(r#"{"zeta": {}, "alpha": {}, "mid": {}}"#)
            .unwrap();
        let ids: Vec<_> = raw.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn arrays_use_index_ids() {
        let raw = RawProjectsResponse::from_json_str(r#"[{"a": 1}, {"b": 2}]"#).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.records()[1].id, "1");
    }

    #[test]
    fn scalars_are_rejected() {
        let err = RawProjectsResponse::from_json_str("42").unwrap_err();
        assert!(matches!(err, ResponseError::Shape { found: "number" }));
        assert!(matches!(
            RawProjectsResponse::from_json_str("{not json"),
            Err(ResponseError::Json(_))
        ));
    }
}
