use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InvoflowError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Connection-level failures (no response received)
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    // The server responded with a non-success status
    ApiError {
        operation: String,
        status: u16,
        body: String,
    },

    // Response body could not be decoded
    ParseError {
        content_type: String,
        reason: String,
    },

    // Client-side validation failures (block submission before any call)
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl InvoflowError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            reason: reason.to_string(),
        }
    }

    pub fn api_error(operation: &str, status: u16, body: &str) -> Self {
        Self::ApiError {
            operation: operation.to_string(),
            status,
            body: body.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::ApiError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::ParseError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::NetworkError { operation, url, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg.push_str("\n💡 Check that the approval backend is reachable and try again");
                msg
            }
            Self::ApiError { operation, status, body } => {
                let mut msg = format!("Server rejected {} with HTTP {}", operation, status);
                if !body.trim().is_empty() {
                    msg.push_str(&format!(": {}", body.trim()));
                }
                msg
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}\n💡 The server response did not match the expected shape", content_type, reason)
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for InvoflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for InvoflowError {}

/// Result type alias for invoflow operations
pub type InvoflowResult<T> = Result<T, InvoflowError>;

/// Error handler for consistent error processing at the top level
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &InvoflowError) {
        log::error!("{}", error.technical_details());
        eprintln!("❌ {}", error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for InvoflowError {
    fn from(error: std::io::Error) -> Self {
        InvoflowError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for InvoflowError {
    fn from(error: serde_json::Error) -> Self {
        InvoflowError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for InvoflowError {
    fn from(error: toml::de::Error) -> Self {
        InvoflowError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for InvoflowError {
    fn from(error: toml::ser::Error) -> Self {
        InvoflowError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for InvoflowError {
    fn from(error: reqwest::Error) -> Self {
        InvoflowError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}
