//! Python bindings for the triage engine.
//!
//! Functions mirror the Rust API one to one. Errors surface as
//! `ValueError` (bad input or configuration) or `IOError`.

use crate::core::verdict::Verdict;
use crate::triage;
use pyo3::prelude::*;
use std::path::PathBuf;

#[pyfunction]
#[pyo3(name = "shannon_entropy")]
fn shannon_entropy_py(data: &[u8]) -> f64 {
    crate::entropy::shannon_entropy(data)
}

#[pyfunction]
#[pyo3(name = "renyi_entropy")]
#[pyo3(signature = (data, alpha=2.0))]
fn renyi_entropy_py(data: &[u8], alpha: f64) -> f64 {
    crate::entropy::renyi_entropy(data, alpha)
}

#[pyfunction]
#[pyo3(name = "tsallis_entropy")]
#[pyo3(signature = (data, q=2.0))]
fn tsallis_entropy_py(data: &[u8], q: f64) -> f64 {
    crate::entropy::tsallis_entropy(data, q)
}

#[pyfunction]
#[pyo3(name = "is_suspicious_extension")]
fn is_suspicious_extension_py(filename: &str) -> bool {
    triage::is_suspicious_extension(filename)
}

#[pyfunction]
#[pyo3(name = "classify_file")]
fn classify_file_py(header: &[u8], full: &[u8], filename: &str) -> PyResult<Verdict> {
    Ok(triage::classify_file(header, full, filename)?)
}

#[pyfunction]
#[pyo3(name = "classify_pdf")]
fn classify_pdf_py(data: &[u8]) -> Verdict {
    triage::classify_pdf(data)
}

#[pyfunction]
#[pyo3(name = "classify_url")]
fn classify_url_py(url: &str) -> bool {
    triage::classify_url(url)
}

/// Returns `(verdict, detail)` for one file.
#[pyfunction]
#[pyo3(name = "check_path")]
fn check_path_py(path: PathBuf) -> (Verdict, Option<String>) {
    let report = triage::check_path(path);
    (report.verdict, report.detail)
}

/// Returns `(path, verdict, detail)` for every regular file in `dir`.
#[pyfunction]
#[pyo3(name = "scan_directory")]
fn scan_directory_py(dir: PathBuf) -> PyResult<Vec<(String, Verdict, Option<String>)>> {
    let summary = triage::scan_directory(dir)?;
    Ok(summary
        .reports
        .into_iter()
        .map(|r| (r.path.display().to_string(), r.verdict, r.detail))
        .collect())
}

/// Register all Python bindings with the module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Verdict>()?;

    m.add_function(wrap_pyfunction!(shannon_entropy_py, m)?)?;
    m.add_function(wrap_pyfunction!(renyi_entropy_py, m)?)?;
    m.add_function(wrap_pyfunction!(tsallis_entropy_py, m)?)?;

    m.add_function(wrap_pyfunction!(is_suspicious_extension_py, m)?)?;
    m.add_function(wrap_pyfunction!(classify_file_py, m)?)?;
    m.add_function(wrap_pyfunction!(classify_pdf_py, m)?)?;
    m.add_function(wrap_pyfunction!(classify_url_py, m)?)?;
    m.add_function(wrap_pyfunction!(check_path_py, m)?)?;
    m.add_function(wrap_pyfunction!(scan_directory_py, m)?)?;

    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    Ok(())
}
