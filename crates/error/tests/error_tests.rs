//! # Error Crate Tests
//!
//! Conversions and formatting of the shared error type.

#[cfg(test)]
mod app_error_tests {
    use error::{AppError, Result, ResultExt};

    #[test]
    fn test_error_creation() {
        let error = AppError::validation("home and away team are the same");
        assert!(matches!(error, AppError::Validation { .. }));
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            AppError::not_found("x"),
            AppError::validation("x"),
            AppError::config("x"),
            AppError::database("x"),
            AppError::migration("x"),
            AppError::io("x"),
            AppError::internal("x"),
        ];

        let mut codes: Vec<&str> = errors.iter().map(AppError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_question_mark_converts_io_errors() {
        fn read_missing() -> Result<String> {
            let text = std::fs::read_to_string("/definitely/not/here/schema.sql")?;
            Ok(text)
        }

        let err = read_missing().unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_nested_context() {
        let result: Result<()> = Err(AppError::database("timeout"));
        let err = result
            .context("Applying migration")
            .context("migrate")
            .unwrap_err();
        assert_eq!(err.message(), "migrate: Applying migration: timeout");
    }
}
