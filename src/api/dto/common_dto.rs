//! Shared response envelope used by every route.

use serde::Serialize;

/// Uniform success envelope: `{success: true, data, message?}`.
///
/// Error responses use the same shape with `success: false` and an
/// `error` string; see [`crate::error::ErrorEnvelope`].
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Always `true` for success responses.
    pub success: bool,
    /// Operation result payload.
    pub data: T,
    /// Optional human-readable status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Wraps `data` in a success envelope with no message.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Wraps `data` in a success envelope with a status message.
    #[must_use]
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape() {
        let env = Envelope::with_message(vec![1, 2], "listed");
        let json = serde_json::to_value(&env).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(true)));
        assert!(json.get("data").is_some());
        assert_eq!(
            json.get("message").and_then(|m| m.as_str()),
            Some("listed")
        );
    }

    #[test]
    fn message_omitted_when_absent() {
        let env = Envelope::ok(42);
        let json = serde_json::to_value(&env).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.get("message").is_none());
    }
}
