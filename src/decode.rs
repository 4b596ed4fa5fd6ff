//! Tolerant JSON decoding for backend response bodies.
//!
//! The notification service occasionally emits JSON with a trailing comma
//! before a closing `]` or `}`. Standard parsing is tried first; on failure
//! the trailing commas are stripped in a single repair pass and parsing is
//! retried exactly once. Anything still unparseable is an error — this is a
//! targeted workaround, not a general JSON-repair layer.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors from tolerant decoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("La respuesta no es un JSON válido: {0}")]
    Malformed(String),
    #[error("La respuesta no tiene la forma esperada: {0}")]
    Shape(String),
}

fn trailing_comma_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*([\]}])").expect("valid regex"))
}

/// Strip trailing commas immediately before a closing `]` or `}`.
fn repair(text: &str) -> String {
    trailing_comma_re().replace_all(text, "$1").into_owned()
}

/// Parse `text` as JSON, repairing trailing commas once on failure.
pub fn parse_tolerant(text: &str) -> Result<Value, DecodeError> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(first) => serde_json::from_str(&repair(text))
            .map_err(|_| DecodeError::Malformed(first.to_string())),
    }
}

/// Parse `text` tolerantly, then deserialize into `T`.
pub fn from_tolerant_str<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    let value = parse_tolerant(text)?;
    serde_json::from_value(value).map_err(|e| DecodeError::Shape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_json_parses_as_standard() {
        let text = r#"{"a":1,"b":[1,2,3]}"#;
        let tolerant = parse_tolerant(text).unwrap();
        let standard: Value = serde_json::from_str(text).unwrap();
        assert_eq!(tolerant, standard);
    }

    #[test]
    fn trailing_comma_in_object_is_repaired() {
        let parsed = parse_tolerant(r#"{"a":1,}"#).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn trailing_comma_in_array_is_repaired() {
        let parsed = parse_tolerant(r#"[1,2,3,]"#).unwrap();
        assert_eq!(parsed, json!([1, 2, 3]));
    }

    #[test]
    fn trailing_comma_with_whitespace_is_repaired() {
        let parsed = parse_tolerant("{\"valor\": [1, 2,  \n ] ,\n}").unwrap();
        assert_eq!(parsed, json!({"valor": [1, 2]}));
    }

    #[test]
    fn repaired_text_equals_well_formed_equivalent() {
        let malformed = r#"{"esCorrecto":true,"valor":[{"id":1,},{"id":2,},],}"#;
        let well_formed = r#"{"esCorrecto":true,"valor":[{"id":1},{"id":2}]}"#;
        assert_eq!(
            parse_tolerant(malformed).unwrap(),
            serde_json::from_str::<Value>(well_formed).unwrap()
        );
    }

    #[test]
    fn garbage_is_still_an_error() {
        let err = parse_tolerant("not json at all").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn repair_is_single_pass_only() {
        // A missing brace is not a trailing-comma problem; no second repair
        // strategy is attempted.
        assert!(parse_tolerant(r#"{"a": [1,2"#).is_err());
    }

    #[test]
    fn typed_decoding_through_repair() {
        #[derive(serde::Deserialize)]
        struct Row {
            id: i64,
        }
        let rows: Vec<Row> = from_tolerant_str(r#"[{"id":7,},]"#).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 7);
    }

    #[test]
    fn typed_decoding_shape_mismatch_is_shape_error() {
        let err = from_tolerant_str::<Vec<i64>>(r#"{"a":1}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));
    }
}
