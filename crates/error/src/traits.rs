//! # Error Traits
//!
//! Adds context to fallible calls and reclassifies database failures raised
//! while running migrations.

use std::fmt::Display;

use crate::{AppError, Result};

/// Extension methods for `Result` values whose error converts into [`AppError`].
pub trait ResultExt<T> {
    /// Converts the error and prefixes `context` to its message.
    fn context(self, context: impl Display) -> Result<T>;

    /// Like [`ResultExt::context`], but the context is only built on failure.
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C;

    /// Reports any failure as a migration error.
    ///
    /// The migrator surfaces connection and statement failures as plain database
    /// errors; callers driving it want them grouped under `MIGRATION_ERROR`.
    fn migration_context(self, context: impl Display) -> Result<T>;

    /// Logs the error at `error` level and passes it on.
    fn log_error(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn context(self, context: impl Display) -> Result<T> { self.map_err(|e| Into::<AppError>::into(e).context(context)) }

    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Into::<AppError>::into(e).context(context()))
    }

    fn migration_context(self, context: impl Display) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            AppError::migration(err.context(context).message())
        })
    }

    fn log_error(self) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            tracing::error!(error = %err, code = err.code(), "Command failed");
            err
        })
    }
}
