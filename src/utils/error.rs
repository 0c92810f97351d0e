use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerakiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Meraki API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by the Meraki API after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    #[error("Unknown resource: {0}")]
    ResourceNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Configuration,
    Input,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MerakiError {
    pub fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        MerakiError::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MerakiError::Http(_) | MerakiError::RateLimited { .. } => ErrorCategory::Network,
            MerakiError::Api { .. } => ErrorCategory::Api,
            MerakiError::Config { .. }
            | MerakiError::InvalidConfigValue { .. }
            | MerakiError::MissingConfig { .. } => ErrorCategory::Configuration,
            MerakiError::InvalidArgument { .. }
            | MerakiError::ToolNotFound(_)
            | MerakiError::ResourceNotFound(_) => ErrorCategory::Input,
            MerakiError::Io(_) | MerakiError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MerakiError::InvalidArgument { .. }
            | MerakiError::ToolNotFound(_)
            | MerakiError::ResourceNotFound(_) => ErrorSeverity::Low,
            MerakiError::RateLimited { .. } | MerakiError::Http(_) => ErrorSeverity::Medium,
            MerakiError::Api { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            MerakiError::Api { .. } | MerakiError::Serialization(_) => ErrorSeverity::High,
            MerakiError::Config { .. }
            | MerakiError::InvalidConfigValue { .. }
            | MerakiError::MissingConfig { .. }
            | MerakiError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            MerakiError::Http(e) => e.is_timeout() || e.is_connect(),
            MerakiError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MerakiError::Api { status: 401, .. } => {
                "The Meraki API rejected the API key".to_string()
            }
            MerakiError::Api { status: 403, .. } => {
                "The API key has no access to this resource".to_string()
            }
            MerakiError::Api { status: 404, .. } => {
                "The requested Meraki resource does not exist".to_string()
            }
            MerakiError::MissingConfig { field } => {
                format!("Missing required setting: {}", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MerakiError::Http(_) => "Check network connectivity to the Meraki API base URL",
            MerakiError::Api { status: 401, .. } | MerakiError::Api { status: 403, .. } => {
                "Verify MERAKI_API_KEY and the organization access of its owner"
            }
            MerakiError::Api { status: 404, .. } => "Double check the IDs passed to the tool",
            MerakiError::Api { .. } => "Inspect the API message and the request parameters",
            MerakiError::RateLimited { .. } => "Wait a moment or raise --max-retries",
            MerakiError::MissingConfig { .. }
            | MerakiError::Config { .. }
            | MerakiError::InvalidConfigValue { .. } => {
                "Fix the configuration (flags, environment or TOML file) and restart"
            }
            MerakiError::InvalidArgument { .. } => "Check the tool's input schema via tools/list",
            MerakiError::ToolNotFound(_) => "Run `meraki-mcp list-tools` to see loaded tools",
            MerakiError::ResourceNotFound(_) => "Use resources/templates/list for valid URIs",
            MerakiError::Io(_) | MerakiError::Serialization(_) => "Retry; report it if it persists",
        }
    }
}

pub type Result<T> = std::result::Result<T, MerakiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_classification() {
        let err = MerakiError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Api);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(!err.is_retryable());
        assert!(err.user_friendly_message().contains("does not exist"));
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let err = MerakiError::Api {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = MerakiError::MissingConfig {
            field: "api_key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.user_friendly_message(), "Missing required setting: api_key");
    }
}
