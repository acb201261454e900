//! Logging and tracing setup.
//!
//! The engine only emits `tracing` events; embedding applications decide
//! whether and how they are rendered. These helpers install a subscriber
//! for the common cases. `RUST_LOG` overrides the default `info` filter.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static SUBSCRIBER: Once = Once::new();

/// Output flavour of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event, with the current span attached
    Json,
}

/// Install the global subscriber once. Later calls, and calls made after
/// the host application installed its own subscriber, are no-ops.
pub fn install(format: LogFormat) {
    SUBSCRIBER.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let layer = tracing_subscriber::fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match format {
            LogFormat::Pretty => registry.with(layer).try_init(),
            LogFormat::Json => registry
                .with(layer.json().with_current_span(true))
                .try_init(),
        };
        if installed.is_ok() {
            info!(?format, "entroscan tracing initialized");
        }
    });
}

/// Human-readable logs on stderr-style output.
pub fn init_tracing() {
    install(LogFormat::Pretty);
}

/// Structured JSON logs.
pub fn init_tracing_json() {
    install(LogFormat::Json);
}

/// Initialize logging from Python
#[cfg(feature = "python-ext")]
#[pyo3::prelude::pyfunction]
#[pyo3(signature = (json=false))]
pub fn init_logging(json: bool) -> pyo3::PyResult<()> {
    install(if json { LogFormat::Json } else { LogFormat::Pretty });
    Ok(())
}

/// Open an info-level span for one check, with optional fields.
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Log an error at error level and hand it back, for use in `map_err`.
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let err = $err;
        tracing::error!(error = %err, "check failed");
        err
    }};
    ($err:expr, $context:expr) => {{
        let err = $err;
        tracing::error!(error = %err, context = $context, "check failed");
        err
    }};
}
