use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The storage medium does not exist or refused access (private mode,
    /// disabled cookies, no document).
    StorageUnavailable,
    StorageRead,
    StorageWrite,
    InvalidConfig,
    Internal,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::StorageUnavailable => write!(f, "StorageUnavailable"),
            AppErrorKind::StorageRead => write!(f, "StorageRead"),
            AppErrorKind::StorageWrite => write!(f, "StorageWrite"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::Internal => write!(f, "Internal"),
        }
    }
}

/// Structured application error.
///
/// Nothing in the sidebar shell surfaces these to the user; callers log
/// them and fall back to in-memory defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::StorageUnavailable, message)
    }

    pub fn storage_read(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::StorageRead, message)
    }

    pub fn storage_write(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::StorageWrite, message)
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InvalidConfig, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Internal, message)
    }

    /// Whether the error came from the preference storage medium.
    pub fn is_storage(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::StorageUnavailable
                | AppErrorKind::StorageRead
                | AppErrorKind::StorageWrite
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.to_string())
    }
}
