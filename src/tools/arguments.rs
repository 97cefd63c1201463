//! Typed access to tool call arguments.

use crate::error::AgentError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, AgentError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_str_extracts_present_key() {
        let args = ToolArguments::new(serde_json::json!({"device_id": "dev-1"}));
        assert_eq!(args.get_str("device_id").unwrap(), "dev-1");
    }

    #[test]
    fn get_str_missing_key_is_invalid_argument() {
        let args = ToolArguments::new(serde_json::json!({}));
        let err = args.get_str("token").unwrap_err();
        assert!(matches!(err, AgentError::InvalidArgument(_)));
        assert!(err.to_string().contains("token"));
    }
}
