//! Entropy-based triage of files and URLs.
//!
//! The engine is a set of pure functions over caller-supplied bytes and
//! strings: entropy estimators, a content verdict policy, a PDF
//! active-content sniffer and a URL heuristic classifier. File reading and
//! directory scanning live in [`triage::scan`] and only feed the engine.

/// Core result types
pub mod core;
pub mod entropy;
pub mod error;
pub mod logging;
pub mod triage;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use crate::core::verdict::{
    FileAssessment, FileReason, FileReport, PdfAssessment, UrlAssessment, UrlRule, Verdict,
};
pub use crate::error::{EntroscanError, Result};
pub use crate::triage::config::DetectorConfig;
pub use crate::triage::extension::is_suspicious_extension;
pub use crate::triage::pdf::classify_pdf;
pub use crate::triage::policy::classify_file;
pub use crate::triage::url::classify_url;

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn entroscan(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register(m)
}
