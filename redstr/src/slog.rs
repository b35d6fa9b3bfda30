//! Emits redaction results through `slog`.
//!
//! A [`RedactionResult`] logs as a nested JSON object of per-rule counts, via
//! `slog`'s nested-value support. The redacted text is not part of the logged
//! value; log it explicitly if the host wants it.
//!
//! Serialization never fails from `slog`'s point of view: if the counts cannot
//! be converted to JSON, a placeholder string is logged instead.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::engine::RedactionResult;

impl RedactionResult {
    /// The per-rule counts as a JSON object.
    pub fn counts_json(&self) -> JsonValue {
        serde_json::to_value(self.counts())
            .unwrap_or_else(|_| JsonValue::String("Failed to serialize redaction counts".into()))
    }
}

impl SlogValue for RedactionResult {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.counts_json());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::engine::RedactionResult;

    #[test]
    fn counts_json_is_an_object_keyed_by_rule() {
        let result = RedactionResult::new(
            "[REDACTED] and [REDACTED]".into(),
            BTreeMap::from([("password".to_string(), 2)]),
        );
        assert_eq!(result.counts_json(), json!({ "password": 2 }));
    }

    #[test]
    fn unchanged_result_logs_empty_object() {
        assert_eq!(RedactionResult::unchanged("plain").counts_json(), json!({}));
    }
}
