//! Convenience macros for error handling and propagation.

/// Equivalent to `anyhow::bail!` but for [`PlotError`](crate::PlotError).
///
/// Allows early returns with custom error messages.
///
/// # Examples
///
/// ```rust
/// use plotkit_common::bail;
/// use plotkit_common::Result;
///
/// fn check_value(value: i32) -> Result<()> {
///     if value < 0 {
///         bail!("Value cannot be negative: {}", value);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::PlotError::new($msg))
    };
    ($err:expr $(,)?) => {
        return Err($crate::PlotError::new($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::PlotError::new(format!($fmt, $($arg)*)))
    };
}

/// Equivalent to `anyhow::ensure!` but for [`PlotError`](crate::PlotError).
///
/// Checks a condition and returns an error if it is false.
///
/// # Examples
///
/// ```rust
/// use plotkit_common::ensure;
/// use plotkit_common::Result;
///
/// fn validate_positive(value: i32) -> Result<()> {
///     ensure!(value > 0, "Value must be positive, got: {}", value);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::PlotError::new($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($crate::PlotError::new($err));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::PlotError::new(format!($fmt, $($arg)*)));
        }
    };
}

/// Add context to an error while preserving the error chain.
///
/// # Examples
///
/// ```rust
/// use plotkit_common::{with_context, Result};
///
/// fn read_manifest() -> Result<String> {
///     std::fs::read_to_string("graph.yaml")
///         .map_err(|e| with_context!(e, "Failed to read manifest file"))
/// }
/// ```
#[macro_export]
macro_rules! with_context {
    ($err:expr, $msg:literal $(,)?) => {
        $crate::PlotError::with_source($msg, $err)
    };
    ($err:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::PlotError::with_source(format!($fmt, $($arg)*), $err)
    };
}
