//! Leveled logging macros for any `LogSink` and for `Logger` / `LoggerHandle`.
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================
// These remain available so the enabled macros below can use them.
// We generally don't call these directly if we want feature-gating.

#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        use $crate::log::LogSink as _;
        let __msg = format!($($arg)*);
        $sink.log($lvl, &__msg);
    }};
}

#[macro_export]
macro_rules! stream_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        $logger.stream($lvl).text(format_args!($($arg)*));
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! sink_trace   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::LogLevel::TRACE, $($arg)*) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! stream_trace { ($logger:expr, $($arg:tt)*) => { $crate::stream_log!($logger, $crate::log::LogLevel::TRACE, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! sink_trace {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! stream_trace {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! sink_debug   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::LogLevel::DEBUG, $($arg)*) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! stream_debug { ($logger:expr, $($arg:tt)*) => { $crate::stream_log!($logger, $crate::log::LogLevel::DEBUG, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! sink_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! stream_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! sink_info   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::LogLevel::INFO, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! stream_info { ($logger:expr, $($arg:tt)*) => { $crate::stream_log!($logger, $crate::log::LogLevel::INFO, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! sink_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! stream_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! sink_warn   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::LogLevel::WARN, $($arg)*) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! stream_warn { ($logger:expr, $($arg:tt)*) => { $crate::stream_log!($logger, $crate::log::LogLevel::WARN, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! sink_warn {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! stream_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::LogLevel::ERROR, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! stream_error { ($logger:expr, $($arg:tt)*) => { $crate::stream_log!($logger, $crate::log::LogLevel::ERROR, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! stream_error {
    ($($arg:tt)*) => {
        ()
    };
}
