//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// An unrecognised `PARTSCOPE_LOG_FORMAT` falls back to JSON and is reported
/// as a warning once the subscriber is up.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    match tracing::LogFormat::from_env() {
        Ok(format) => tracing::init(format),
        Err(err) => {
            tracing::init(tracing::LogFormat::default());
            ::tracing::warn!(
                env = tracing::LOG_FORMAT_ENV,
                error = %err,
                "ignoring log format; using json"
            );
        }
    }
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;
