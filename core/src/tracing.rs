//! Tracing utilities for statement generation.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event with the operation, SQL text and parameter count.
///
/// ```ignore
/// sleet_trace_statement!("select", &statement);
/// ```
#[macro_export]
macro_rules! sleet_trace_statement {
    ($operation:literal, $statement:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            operation = $operation,
            dialect = %$statement.dialect(),
            sql = %$statement.sql(),
            params = $statement.params().len(),
            "sleet.statement"
        );
    };
}

/// Emit a trace-level event when a predicate folds to a constant.
///
/// ```ignore
/// sleet_trace_fold!("and", false);
/// ```
#[macro_export]
macro_rules! sleet_trace_fold {
    ($node:literal, $value:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(node = $node, value = $value, "sleet.fold");
    };
}
