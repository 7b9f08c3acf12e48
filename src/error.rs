use thiserror::Error;

/// Main error type for the episode matcher
#[derive(Error, Debug)]
pub enum MatcherError {
    /// Caller passed something the matcher cannot score (blank show name, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem errors from episode sources
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration errors
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration values that parse but make no sense
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Collaborator errors (catalog providers, episode sources)
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for MatcherError {
    fn from(s: String) -> Self {
        MatcherError::Other(s)
    }
}

impl From<&str> for MatcherError {
    fn from(s: &str) -> Self {
        MatcherError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = MatcherError::Provider {
            provider: "anilist".to_string(),
            message: "HTTP 503".to_string(),
        };
        assert_eq!(err.to_string(), "Provider 'anilist' error: HTTP 503");
    }

    #[test]
    fn test_from_str() {
        let err: MatcherError = "boom".into();
        assert!(matches!(err, MatcherError::Other(ref m) if m == "boom"));
    }
}
