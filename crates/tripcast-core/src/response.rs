use crate::error::{ClientError, Result};
use serde_json::{Map, Value};

/// Parses a service body into its top-level object, turning an `error` key
/// into [`ClientError::Application`]. Status codes are never consulted; the
/// body alone decides the outcome.
pub fn decode_object(body: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Object(mut object) = value else {
        return Err(ClientError::Transport(format!(
            "Expected a JSON object but got: {}",
            truncate(body, 200)
        )));
    };

    if let Some(error) = object.remove("error") {
        let message = match error {
            Value::String(s) => s,
            other => other.to_string(),
        };
        return Err(ClientError::Application(message));
    }

    Ok(object)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_key_wins() {
        let err = decode_object(r#"{"knn": 12.0, "error": "Invalid datetime format"}"#).unwrap_err();
        assert_eq!(err, ClientError::Application("Invalid datetime format".to_string()));
    }

    #[test]
    fn test_non_string_error_uses_json_text() {
        let err = decode_object(r#"{"error": {"code": 7}}"#).unwrap_err();
        assert_eq!(err, ClientError::Application(r#"{"code":7}"#.to_string()));
    }

    #[test]
    fn test_malformed_body_is_transport() {
        assert!(matches!(
            decode_object("<html>500</html>"),
            Err(ClientError::Transport(_))
        ));
        assert!(matches!(decode_object("[1, 2]"), Err(ClientError::Transport(_))));
    }

    #[test]
    fn test_keeps_response_order() {
        let obj = decode_object(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
