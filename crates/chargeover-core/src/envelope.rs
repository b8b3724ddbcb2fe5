//! The response envelope shared by every ChargeOver v3 endpoint.

use serde::{Deserialize, Deserializer};

/// `{ "status": ..., "code": ..., "message": ..., "response": ... }`
///
/// `status` is `"OK"` on success and `"Error"` on failure; ChargeOver is not
/// consistent about its casing, so comparisons ignore case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    /// Outcome marker.
    pub status: String,
    /// Remote error or status code.
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: Option<u16>,
    /// Remote error message.
    #[serde(default)]
    pub message: Option<String>,
    /// The payload (an object for writes, an array for listings).
    #[serde(default)]
    pub response: serde_json::Value,
}

impl ApiEnvelope {
    /// Whether the remote reported a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status.eq_ignore_ascii_case("error")
    }
}

// The API sends `code` as a number, but some error paths render it as a string.
fn lenient_code<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_is_case_insensitive() {
        for status in ["error", "Error", "ERROR"] {
            let env: ApiEnvelope = serde_json::from_value(serde_json::json!({
                "status": status,
                "code": 409,
                "message": "dup"
            }))
            .unwrap();
            assert!(env.is_error());
            assert_eq!(env.code, Some(409));
            assert_eq!(env.message.as_deref(), Some("dup"));
        }
    }

    #[test]
    fn ok_envelope_carries_response() {
        let env: ApiEnvelope =
            serde_json::from_str(r#"{"status":"OK","code":200,"response":{"item_id":9}}"#)
                .unwrap();
        assert!(!env.is_error());
        assert_eq!(env.response["item_id"], 9);
    }

    #[test]
    fn string_code_is_accepted() {
        let env: ApiEnvelope =
            serde_json::from_str(r#"{"status":"Error","code":"400","message":"bad"}"#).unwrap();
        assert_eq!(env.code, Some(400));
    }

    #[test]
    fn missing_fields_default() {
        let env: ApiEnvelope = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(env.code, None);
        assert_eq!(env.message, None);
        assert!(env.response.is_null());
    }
}
