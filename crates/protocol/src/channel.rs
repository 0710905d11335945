//! Method channel messages exchanged with the application.
//!
//! A method channel carries named calls with a JSON argument payload and
//! answers each one with a [`MethodResponse`]. Channels are identified by
//! name; the names used by ghostty live in [`channels`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProtocolError, Result};

/// Names of the method channels registered by the native side.
pub mod channels {
    /// Screenshot and screen-recording protection.
    pub const SECURE: &str = "ghostty/secure";
    /// Media store scanning and deletion notices.
    pub const MEDIA: &str = "ghostty/media";
    /// Navigation requests from native UI into the application.
    pub const NAVIGATION: &str = "ghostty/navigation";
}

/// A method invocation on a channel.
///
/// # Examples
///
/// ```
/// use ghostty_protocol::MethodCall;
/// use serde_json::json;
///
/// let call = MethodCall::with_arguments("scanFile", json!({ "path": "/sdcard/a.png" }));
/// let path: Option<String> = call.argument("path").unwrap();
/// assert_eq!(path.as_deref(), Some("/sdcard/a.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// The method name.
    pub method: String,
    /// The argument payload; `null` when the method takes none.
    #[serde(default, rename = "args")]
    pub arguments: Value,
}

impl MethodCall {
    /// Creates a call without arguments.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    /// Creates a call with the given argument payload.
    #[must_use]
    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Returns the named argument, decoded as `T`.
    ///
    /// Returns `Ok(None)` when the payload is not a map, when the key is
    /// absent, or when its value is `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidArgument`] if the value exists but
    /// cannot be decoded as `T`.
    pub fn argument<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.arguments.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| ProtocolError::InvalidArgument {
                    method: self.method.clone(),
                    name: name.to_string(),
                    source,
                }),
        }
    }

    /// Returns the named argument, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingArgument`] if the argument is absent
    /// and [`ProtocolError::InvalidArgument`] if it cannot be decoded.
    pub fn require_argument<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.argument(name)?
            .ok_or_else(|| ProtocolError::MissingArgument {
                method: self.method.clone(),
                name: name.to_string(),
            })
    }

    /// Encodes this call as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Decodes a call from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid method call.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
    }
}

/// The answer to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    /// The call succeeded with the given result.
    Success {
        /// The result payload.
        result: Value,
    },
    /// The call failed.
    Error {
        /// A short machine-readable error code.
        code: String,
        /// A human-readable description.
        message: String,
    },
    /// No handler implements the method.
    NotImplemented,
}

impl MethodResponse {
    /// A successful response without a result.
    #[must_use]
    pub const fn success_null() -> Self {
        Self::Success {
            result: Value::Null,
        }
    }

    /// A successful response carrying `result`.
    #[must_use]
    pub fn success(result: impl Into<Value>) -> Self {
        Self::Success {
            result: result.into(),
        }
    }

    /// An error response.
    #[must_use]
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for [`MethodResponse::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the success payload, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match self {
            Self::Success { result } => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn argument_missing_is_none() {
        let call = MethodCall::new("scanFile");
        let path: Option<String> = call.argument("path").unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn argument_null_is_none() {
        let call = MethodCall::with_arguments("scanFile", json!({ "path": null }));
        let path: Option<String> = call.argument("path").unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn argument_wrong_type_is_error() {
        let call = MethodCall::with_arguments("scanFile", json!({ "path": 42 }));
        let result: Result<Option<String>> = call.argument("path");
        assert!(matches!(
            result,
            Err(ProtocolError::InvalidArgument { ref name, .. }) if name == "path"
        ));
    }

    #[test]
    fn require_argument_reports_missing() {
        let call = MethodCall::new("notifyMediaDeleted");
        let result: Result<String> = call.require_argument("path");
        assert!(matches!(result, Err(ProtocolError::MissingArgument { .. })));
    }

    #[test]
    fn call_json_format() {
        let call = MethodCall::with_arguments("scanFile", json!({ "path": "/a.png" }));
        assert_eq!(
            call.to_json().unwrap(),
            r#"{"method":"scanFile","args":{"path":"/a.png"}}"#
        );
    }

    #[test]
    fn call_without_args_decodes() {
        let call = MethodCall::from_json(r#"{"method":"enableSecureMode"}"#).unwrap();
        assert_eq!(call, MethodCall::new("enableSecureMode"));
    }

    #[test]
    fn response_json_format() {
        let json = serde_json::to_string(&MethodResponse::success(true)).unwrap();
        assert_eq!(json, r#"{"status":"success","result":true}"#);

        let json = serde_json::to_string(&MethodResponse::NotImplemented).unwrap();
        assert_eq!(json, r#"{"status":"not_implemented"}"#);
    }

    #[test]
    fn response_accessors() {
        assert!(MethodResponse::success_null().is_success());
        assert_eq!(MethodResponse::success(false).result(), Some(&json!(false)));
        assert!(MethodResponse::NotImplemented.result().is_none());
        assert!(!MethodResponse::error("E", "boom").is_success());
    }
}
