use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::transport::RawResponse;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Turns a raw response into parsed JSON or a classified failure.
///
/// A JSON error body wins over the transport status: a non-2xx JSON response
/// fails with the body's `msg` (else `error`, else "Request failed"). A body that
/// claims to be JSON but does not parse is `InvalidResponse`. Anything that is
/// not JSON is a `ServerError`, whatever its status.
pub fn normalize(response: RawResponse) -> Result<Value> {
    if !declares_json(response.content_type.as_deref()) {
        let status_text = if response.status_text.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            response.status_text
        };
        return Err(ApiError::ServerError {
            status: response.status,
            status_text,
        });
    }

    let json: Value =
        serde_json::from_str(&response.body).map_err(|_| ApiError::InvalidResponse)?;

    if !response.is_success() {
        return Err(ApiError::RequestFailed {
            status: response.status,
            message: error_message(&json),
        });
    }

    Ok(json)
}

/// Decodes a normalized value into its typed shape.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

fn declares_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
}

fn error_message(body: &Value) -> String {
    ["msg", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str).filter(|m| !m.is_empty()))
        .unwrap_or("Request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: String::new(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_success_returns_parsed_body() {
        let value = normalize(response(
            200,
            Some("application/json; charset=utf-8"),
            r#"{"success":true}"#,
        ))
        .unwrap();
        assert_eq!(value, json!({ "success": true }));
    }

    #[rstest]
    #[case::msg(r#"{"msg":"X"}"#, "X")]
    #[case::error(r#"{"error":"Y"}"#, "Y")]
    #[case::msg_wins(r#"{"msg":"X","error":"Y"}"#, "X")]
    #[case::empty_msg_falls_through(r#"{"msg":"","error":"Y"}"#, "Y")]
    #[case::neither(r#"{"detail":"Z"}"#, "Request failed")]
    #[case::non_object(r#"[1,2]"#, "Request failed")]
    fn test_json_error_body_message(#[case] body: &str, #[case] expected: &str) {
        let err = normalize(response(400, Some("application/json"), body)).unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 400, .. }));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_malformed_json_is_invalid_response() {
        for status in [200, 500] {
            let err = normalize(response(status, Some("application/json"), "{oops")).unwrap_err();
            assert!(matches!(err, ApiError::InvalidResponse));
            assert_eq!(err.to_string(), "Invalid JSON from server");
        }
    }

    #[test]
    fn test_non_json_without_status_text() {
        let err = normalize(response(500, Some("text/html"), "<h1>boom</h1>")).unwrap_err();
        assert!(err.to_string().contains("500 Unknown error"));
    }

    #[test]
    fn test_non_json_keeps_status_text() {
        let mut raw = response(502, None, "");
        raw.status_text = "Bad Gateway".to_string();
        let err = normalize(raw).unwrap_err();
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");
    }

    #[test]
    fn test_non_json_success_is_still_an_error() {
        let err = normalize(response(200, Some("text/plain"), "ok")).unwrap_err();
        assert!(matches!(err, ApiError::ServerError { status: 200, .. }));
    }

    #[test]
    fn test_decode_wrong_shape() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Envelope {
            hackathon: String,
        }

        let err = decode::<Envelope>(json!({ "other": 1 })).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
