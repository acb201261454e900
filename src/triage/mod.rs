//! Triage engine: content policy, PDF sniffer and URL classifier.
//!
//! The classifiers are pure functions over caller-supplied data. [`scan`]
//! is the only part that touches the filesystem.

pub mod config;
pub mod extension;
pub mod io;
pub mod pdf;
pub mod policy;
pub mod scan;
pub mod url;

pub use config::{DetectorConfig, DEFAULT_CONFIG};
pub use extension::{is_suspicious_extension, ExtensionClassifier};
pub use pdf::{assess_pdf, classify_pdf, PdfSniffer};
pub use policy::{assess_file, classify_file, ContentPolicy};
pub use scan::{check_path, scan_directory, ScanSummary, Scanner};
pub use url::{assess_url, classify_url, UrlClassifier};
