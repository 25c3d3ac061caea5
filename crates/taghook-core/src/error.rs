//! Error types for taghook

use thiserror::Error;

/// Result type alias for taghook operations
pub type TaghookResult<T> = Result<T, TaghookError>;

/// Main error type for taghook
///
/// Resolution and ordering are total and never produce one of these; errors
/// only surface while decoding descriptors, registering hooks, or loading a
/// hook manifest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaghookError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// A hook could not be added to the registry
    #[error("Registration error: {identity}: {message}")]
    Registration { identity: String, message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Manifest deserialization errors
    #[error("{format} parse error: {message}")]
    Parse { format: String, message: String },
}

impl TaghookError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with additional context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an invalid input error for a named field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new registration error
    pub fn registration(identity: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Registration {
            identity: identity.into(),
            message: message.into(),
        }
    }

    /// Create an IO error tied to a path
    pub fn io_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a parse error for the given manifest format
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Additional context attached to the error, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::InvalidInput { field, .. } => field.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// Whether this error stems from bad configuration rather than the environment
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::InvalidInput { .. }
                | Self::Registration { .. }
                | Self::Parse { .. }
        )
    }
}

impl From<std::io::Error> for TaghookError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for TaghookError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse("JSON", error.to_string())
    }
}

impl From<toml::de::Error> for TaghookError {
    fn from(error: toml::de::Error) -> Self {
        Self::parse("TOML", error.to_string())
    }
}

impl From<serde_yaml::Error> for TaghookError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::parse("YAML", error.to_string())
    }
}
