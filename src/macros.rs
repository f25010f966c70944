//! Macros.

/// Emits a `tracing` event at `TRACE` level if the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so arguments must not have side effects.
macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}

/// Emits a `tracing` event at `DEBUG` level if the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so arguments must not have side effects.
macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}
