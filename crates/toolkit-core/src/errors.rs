use thiserror::Error;

/// Errors shared by every toolkit helper - no I/O variants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolkitError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_equality() {
        let not_found = ToolkitError::NotFound;
        let invalid = ToolkitError::InvalidValue("test".to_string());

        assert_eq!(not_found, ToolkitError::NotFound);
        assert_eq!(invalid, ToolkitError::InvalidValue("test".to_string()));
        assert_ne!(invalid, ToolkitError::InvalidValue("other".to_string()));
        assert_ne!(not_found, invalid);

        // Same payload, different variant
        assert_ne!(
            ToolkitError::InvalidValue("x".to_string()),
            ToolkitError::OperationFailed("x".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ToolkitError::InvalidValue("bad input".to_string()).to_string(),
            "Invalid value: bad input"
        );
        assert_eq!(
            ToolkitError::OperationFailed("timeout".to_string()).to_string(),
            "Operation failed: timeout"
        );
        assert_eq!(ToolkitError::NotFound.to_string(), "Not found");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serde() {
        let error = ToolkitError::OperationFailed("disk full".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"OperationFailed":"disk full"}"#);

        let decoded: ToolkitError = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, error);

        let decoded: ToolkitError = serde_json::from_str(r#""NotFound""#).unwrap();
        assert_eq!(decoded, ToolkitError::NotFound);
    }
}
