//! Logging macros routed through the process-wide logger
//!
//! Each macro takes `format!` arguments. Sink failures are discarded.

/// Log an informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let _ = $crate::output::logger().log(format_args!($($arg)*));
    }};
}

/// Log a warning
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {{
        let _ = $crate::output::logger().log_warning(format_args!($($arg)*));
    }};
}

/// Log an error
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let _ = $crate::output::logger().log_error(format_args!($($arg)*));
    }};
}

/// Log a failed assertion
#[macro_export]
macro_rules! log_assertion {
    ($($arg:tt)*) => {{
        let _ = $crate::output::logger().log_assertion(format_args!($($arg)*));
    }};
}

/// Log a success message
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {{
        let _ = $crate::output::logger().log_success(format_args!($($arg)*));
    }};
}

/// Log an error value with its report attached
#[macro_export]
macro_rules! log_exception {
    ($err:expr) => {{
        let _ = $crate::output::logger().log_exception(Some(&$err));
    }};
}

/// Log an `anyhow::Error` with its context chain attached
#[macro_export]
macro_rules! log_error_report {
    ($err:expr) => {{
        let _ = $crate::output::logger().log_error_report(&$err);
    }};
}
