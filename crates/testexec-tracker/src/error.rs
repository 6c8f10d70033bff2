//! Error types for the tracker client.

/// Tracker errors.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Missing or invalid configuration.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Token rejected (401/403).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Issue or endpoint not found.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Request understood but refused (400), e.g. unknown field or issue type.
    #[error("rejected by tracker: {message}")]
    Rejected { message: String },

    /// Server unreachable, timeout, or unexpected status.
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body did not match the expected shape.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// No workflow transition matches the requested name.
    #[error("no transition '{requested}' for {key} (available: {})", .available.join(", "))]
    TransitionNotFound {
        key: String,
        requested: String,
        available: Vec<String>,
    },
}

impl TrackerError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Unauthorized { .. }
            | Self::NotFound { .. }
            | Self::Rejected { .. }
            | Self::Network { .. }
            | Self::InvalidResponse { .. }
            | Self::TransitionNotFound { .. } => 4,
        }
    }

    /// Whether the failure happened before the tracker accepted the session.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::Network { .. })
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
