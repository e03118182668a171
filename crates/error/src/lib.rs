//! # League Error Infrastructure
//!
//! Error type shared by the migration runner and the CLI.

pub mod traits;

pub use traits::ResultExt;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("Migration: {message}")]
    Migration {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Create an IO error.
    #[inline]
    pub fn io(message: impl ToString) -> Self {
        Self::Io {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::Config {
                ..
            } => "CONFIG_ERROR",
            AppError::Database {
                ..
            } => "DATABASE_ERROR",
            AppError::Migration {
                ..
            } => "MIGRATION_ERROR",
            AppError::Io {
                ..
            } => "IO_ERROR",
            AppError::Internal {
                ..
            } => "INTERNAL_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound {
                message,
            } |
            AppError::Validation {
                message,
            } |
            AppError::Config {
                message,
            } |
            AppError::Database {
                message,
            } |
            AppError::Migration {
                message,
            } |
            AppError::Io {
                message,
            } |
            AppError::Internal {
                message,
            } => message.clone(),
        }
    }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        let wrap = |message: String| format!("{}: {}", context_msg, message);
        match self {
            AppError::NotFound {
                message,
            } => {
                Self::NotFound {
                    message: wrap(message),
                }
            },
            AppError::Validation {
                message,
            } => {
                Self::Validation {
                    message: wrap(message),
                }
            },
            AppError::Config {
                message,
            } => {
                Self::Config {
                    message: wrap(message),
                }
            },
            AppError::Database {
                message,
            } => {
                Self::Database {
                    message: wrap(message),
                }
            },
            AppError::Migration {
                message,
            } => {
                Self::Migration {
                    message: wrap(message),
                }
            },
            AppError::Io {
                message,
            } => {
                Self::Io {
                    message: wrap(message),
                }
            },
            AppError::Internal {
                message,
            } => {
                Self::Internal {
                    message: wrap(message),
                }
            },
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM database errors to AppError.
///
/// Failures raised while running migrations keep their own category.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Migration(message) => {
                Self::Migration {
                    message,
                }
            },
            sea_orm::DbErr::RecordNotFound(message) => {
                Self::NotFound {
                    message,
                }
            },
            other => {
                Self::Database {
                    message: other.to_string(),
                }
            },
        }
    }
}
