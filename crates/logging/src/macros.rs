//! # Logging Macros
//!
//! Convenience macros for structured logging with fixed targets and fields.

/// Log a migration step for a table.
///
/// # Example
///
/// ```rust
/// logging::log_migration!("up", "REGISTRANT");
/// ```
#[macro_export]
macro_rules! log_migration {
    ($direction:expr, $table:expr) => {
        $crate::tracing::info!(
            target: "migration",
            direction = %$direction,
            table = %$table,
            "Migration step applied"
        )
    };
}

/// Log a database query with duration and table name.
#[macro_export]
macro_rules! log_db_query {
    ($query:expr, $table:expr, $duration:expr) => {
        $crate::tracing::debug!(
            target: "database",
            query = %$query,
            table = %$table,
            duration_ms = %$duration,
            "Database query"
        )
    };
}

/// Measure and log the duration of a block of code.
///
/// # Example
///
/// ```rust
/// let total = logging::measure_duration!("migrate", "up", { 1 + 1 });
/// assert_eq!(total, 2);
/// ```
#[macro_export]
macro_rules! measure_duration {
    ($target:expr, $context:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        $crate::tracing::debug!(
            target: $target,
            context = %$context,
            duration_ms = duration.as_secs_f64() * 1000.0,
            "Operation completed"
        );
        result
    }};
}
