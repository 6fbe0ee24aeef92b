//! Operation boundary macros.
//!
//! `annotate_history`, `parse_history_bytes` and the CLI commands bracket
//! their work with a start event and exactly one of an end or error event.
//! All three carry `component`, `op` and `event`; trailing `key = value`
//! pairs are passed through to `tracing` unchanged.

/// Log that an operation is starting.
///
/// ```
/// # use roster_core::log_op_start;
/// log_op_start!("annotate_history");
/// log_op_start!("annotate_history", versions = 12);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = roster_core_types::schema::EVENT_START,
            $($($field)+)?
        )
    };
}

/// Log that an operation finished, with its elapsed time.
///
/// ```
/// # use roster_core::log_op_end;
/// log_op_end!("annotate_history", duration_ms = 3, retained = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = roster_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)+)?
        )
    };
}

/// Log that an operation failed.
///
/// Anything convertible into [`ExError`](crate::errors::ExError) is
/// accepted; the event carries its stable `err_code`.
///
/// ```
/// # use roster_core::{log_op_error, errors::RosterError};
/// log_op_error!("parse_history_bytes", RosterError::NotAnObject, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = roster_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
        )
    }};
}
