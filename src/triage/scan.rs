//! Path-level checks that feed the engine from disk.
//!
//! A file is routed by its name: `.pdf` goes to the PDF sniffer, anything
//! else with an extension goes to the content policy. Files that cannot be
//! evaluated are reported as `InvalidInput` (no extension) or `Unreadable`
//! (open/read failure, size cap), never as safe.

use crate::core::verdict::{FileReport, PdfAssessment, Verdict};
use crate::entropy::Histogram;
use crate::error::{EntroscanError, Result};
use crate::triage::config::{DetectorConfig, DEFAULT_CONFIG};
use crate::triage::extension::ExtensionClassifier;
use crate::triage::io::{IOLimits, SafeFileReader};
use crate::triage::pdf::PdfSniffer;
use crate::triage::policy::{validate_filename, ContentPolicy};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

static DEFAULT_SCANNER: Lazy<Scanner<'static>> =
    Lazy::new(|| Scanner::new(&DEFAULT_CONFIG).expect("valid default configuration"));

/// Check one file with the stock configuration.
pub fn check_path<P: AsRef<Path>>(path: P) -> FileReport {
    DEFAULT_SCANNER.check_path(path)
}

/// Check every regular file directly inside `dir` with the stock configuration.
pub fn scan_directory<P: AsRef<Path>>(dir: P) -> Result<ScanSummary> {
    DEFAULT_SCANNER.scan_directory(dir)
}

/// Reports for a directory scan, sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub reports: Vec<FileReport>,
}

impl ScanSummary {
    pub fn count(&self, verdict: Verdict) -> usize {
        self.reports.iter().filter(|r| r.verdict == verdict).count()
    }

    pub fn suspicious(&self) -> impl Iterator<Item = &FileReport> {
        self.reports.iter().filter(|r| r.verdict.is_suspicious())
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Engine components prepared once and shared across checks.
#[derive(Debug)]
pub struct Scanner<'a> {
    config: &'a DetectorConfig,
    pdf: PdfSniffer,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pdf: PdfSniffer::new(config)?,
        })
    }

    /// Check a single file. Never fails; problems become the report's verdict.
    pub fn check_path<P: AsRef<Path>>(&self, path: P) -> FileReport {
        let path = path.as_ref();
        let _span = crate::span_trace!("check_path", path = %path.display()).entered();

        let report = match self.evaluate(path) {
            Ok((verdict, detail)) => FileReport::new(path.to_path_buf(), verdict, detail),
            Err(err) => {
                let verdict = verdict_for_error(&err);
                warn!(path = %path.display(), error = %err, %verdict, "file not evaluated");
                FileReport::new(path.to_path_buf(), verdict, Some(err.to_string()))
            }
        };
        info!(path = %path.display(), verdict = %report.verdict, "file checked");
        report
    }

    fn evaluate(&self, path: &Path) -> Result<(Verdict, Option<String>)> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                EntroscanError::InvalidInput(format!(
                    "no usable file name: {}",
                    path.display()
                ))
            })?;
        validate_filename(name)?;

        let limits = IOLimits::with_cap(self.config.io.max_file_size);
        let mut reader = SafeFileReader::open(path, limits)?;

        if ExtensionClassifier::new(&self.config.extensions).is_pdf(name) {
            let assessment = self.pdf.assess_reader(reader.bounded_reader()?)?;
            let verdict = assessment.verdict();
            return Ok((verdict, pdf_detail(&assessment)));
        }

        let sample = reader.read_sample(
            self.config.entropy.header_sample_size,
            self.config.io.pdf_chunk_size,
        )?;
        let assessment = ContentPolicy::new(self.config).assess_histograms(
            &Histogram::from_bytes(&sample.header),
            &sample.full,
            name,
        )?;
        Ok((assessment.verdict(), assessment.reason.map(|r| r.to_string())))
    }

    /// Check every regular file directly inside `dir`, in parallel.
    ///
    /// Subdirectories are not descended into. Fails only when the directory
    /// itself cannot be listed.
    pub fn scan_directory<P: AsRef<Path>>(&self, dir: P) -> Result<ScanSummary> {
        let dir = dir.as_ref();
        let mut paths: Vec<PathBuf> = Vec::new();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| crate::log_error!(EntroscanError::from(e), "cannot list directory"))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-regular entry");
            }
        }
        paths.sort();

        info!(dir = %dir.display(), files = paths.len(), "scanning directory");
        let reports: Vec<FileReport> = paths.par_iter().map(|p| self.check_path(p)).collect();
        let summary = ScanSummary { reports };
        info!(
            dir = %dir.display(),
            suspicious = summary.count(Verdict::Suspicious),
            safe = summary.count(Verdict::Safe),
            "directory scan complete"
        );
        Ok(summary)
    }
}

/// Map a failure to the verdict that reports it.
pub fn verdict_for_error(err: &EntroscanError) -> Verdict {
    match err {
        EntroscanError::InvalidInput(_) => Verdict::InvalidInput,
        _ => Verdict::Unreadable,
    }
}

fn pdf_detail(a: &PdfAssessment) -> Option<String> {
    if !a.valid_header {
        return Some("not a valid PDF".to_string());
    }
    if !a.verdict().is_suspicious() {
        return None;
    }
    let mut parts = vec!["script"];
    if a.found_launch {
        parts.push("launch action");
    }
    if a.found_embed {
        parts.push("embedded file");
    }
    Some(format!("active content: {}", parts.join(", ")))
}
