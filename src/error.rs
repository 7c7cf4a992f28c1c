//! Error handling for dnsgen

use thiserror::Error;

/// Main error type for dnsgen
#[derive(Error, Debug, Clone)]
pub enum DnsgenError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Wordlist unavailable: {message}")]
    Resource {
        message: String,
        path: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DnsgenError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a resource error (wordlist missing or unreadable)
    pub fn resource(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Resource {
            message: message.into(),
            path,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("Configuration problem: {}\nhint: check your flags or DNSGEN_* environment variables", message)
            }
            Self::Resource { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("Wordlist error{}: {}\nhint: pass an existing file with --wordlist or omit it to use the bundled list", path_info, message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("File error{}: {}\nhint: check file permissions and paths", path_info, message)
            }
            Self::Serialization { message } => {
                format!("Serialization error: {}", message)
            }
        }
    }
}

impl From<serde_json::Error> for DnsgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for DnsgenError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DnsgenError>;

/// Helper macro for configuration errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DnsgenError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DnsgenError::config(format!($fmt, $($arg)*))
    };
}
