use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogStatsError {
    // Network/API errors
    #[error("Transport error during {operation}: {reason}")]
    Transport {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Response body errors
    #[error("Decode error in {content_type}: {reason}")]
    Decode {
        content_type: String,
        url: Option<String>,
        reason: String,
    },

    // Statistics errors
    #[error("Division error while computing {metric}: {reason}")]
    Division {
        metric: String,
        reason: String,
    },

    // File operation errors
    #[error("I/O error during {operation} of '{path}': {reason}")]
    Io {
        path: String,
        operation: String,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
}

impl CatalogStatsError {
    pub fn transport_error(operation: &str, url: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::Transport {
            operation: operation.to_string(),
            url: Some(url.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn decode_error(url: &str, error: &serde_json::Error) -> Self {
        Self::Decode {
            content_type: "JSON".to_string(),
            url: Some(url.to_string()),
            reason: error.to_string(),
        }
    }

    pub fn division_error(metric: &str, reason: &str) -> Self {
        Self::Division {
            metric: metric.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io_error(path: &Path, operation: &str, error: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io { .. } => ErrorSeverity::High,
            Self::Transport { .. } | Self::Decode { .. } | Self::Division { .. } => ErrorSeverity::Medium,
            Self::Configuration { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { url, status_code, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check your internet connection and the catalog endpoints in the config");
                msg
            }
            Self::Decode { url, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                msg.push_str("\n💡 The catalog API returned a body that is not the expected JSON");
                msg
            }
            Self::Division { .. } => {
                format!("{self}\n💡 A category without products cannot have a country ratio")
            }
            Self::Io { .. } => {
                format!("{self}\n💡 Check that the output directory exists and is writable")
            }
            Self::Configuration { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Result type alias for catalog-stats operations
pub type CatalogStatsResult<T> = Result<T, CatalogStatsError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Logs the technical details and prints a user-facing message to stderr.
    pub fn handle_error(error: &CatalogStatsError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<reqwest::Error> for CatalogStatsError {
    fn from(error: reqwest::Error) -> Self {
        CatalogStatsError::Transport {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogStatsError {
    fn from(error: serde_json::Error) -> Self {
        CatalogStatsError::Decode {
            content_type: "JSON".to_string(),
            url: None,
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for CatalogStatsError {
    fn from(error: toml::de::Error) -> Self {
        CatalogStatsError::Configuration {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Check the TOML syntax of the config file".to_string()),
        }
    }
}
