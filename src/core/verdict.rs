//! Verdict and assessment types for triage results.

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Outcome of a single check.
///
/// The classifiers only ever produce `Safe` or `Suspicious`. `InvalidInput`
/// and `Unreadable` are produced by the scan layer when a file could not be
/// evaluated at all, so "cannot evaluate" never reads as a negative verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "python-ext", pyclass(eq, eq_int))]
pub enum Verdict {
    Safe,
    Suspicious,
    InvalidInput,
    Unreadable,
}

impl Verdict {
    /// Maps a boolean detection result onto a verdict.
    pub fn from_flag(suspicious: bool) -> Self {
        if suspicious {
            Verdict::Suspicious
        } else {
            Verdict::Safe
        }
    }

    pub fn is_suspicious(self) -> bool {
        self == Verdict::Suspicious
    }

    /// True for `Safe` and `Suspicious`, the outcomes of an actual evaluation.
    pub fn is_evaluated(self) -> bool {
        matches!(self, Verdict::Safe | Verdict::Suspicious)
    }
}

#[cfg(feature = "python-ext")]
#[pymethods]
impl Verdict {
    fn __str__(&self) -> String {
        self.to_string()
    }
    fn __repr__(&self) -> String {
        format!("Verdict.{:?}", self)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Safe => write!(f, "Safe"),
            Verdict::Suspicious => write!(f, "Suspicious"),
            Verdict::InvalidInput => write!(f, "InvalidInput"),
            Verdict::Unreadable => write!(f, "Unreadable"),
        }
    }
}

/// Which content-policy rule flagged a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileReason {
    /// Header and full-content entropy are both within the combined gap of their ceilings
    CombinedEntropyGap,
    /// Header and full-content average entropy both exceed the high threshold
    HighEntropy,
    /// Extension is on the denylist
    SuspiciousExtension,
}

impl fmt::Display for FileReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileReason::CombinedEntropyGap => write!(f, "combined entropy gap below cutoff"),
            FileReason::HighEntropy => write!(f, "high header and content entropy"),
            FileReason::SuspiciousExtension => write!(f, "suspicious extension"),
        }
    }
}

/// Entropy figures and the decision of the content policy for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAssessment {
    pub header_len: usize,
    pub full_len: usize,
    pub header_shannon: f64,
    pub header_renyi: f64,
    pub full_shannon: f64,
    pub full_renyi: f64,
    /// Mean of Shannon and Rényi entropy over the header sample
    pub avg_header: f64,
    /// Mean of Shannon and Rényi entropy over the full content
    pub avg_full: f64,
    /// Sum of the distances of both averages from their ceilings
    pub total_diff: f64,
    /// First rule that fired, or `None` when the file is considered safe
    pub reason: Option<FileReason>,
}

impl FileAssessment {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_flag(self.reason.is_some())
    }
}

/// Header validity and active-content markers found in a PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfAssessment {
    /// The first bytes carried the expected PDF magic
    pub valid_header: bool,
    /// `/JavaScript` or `/JS`
    pub found_js: bool,
    /// `/Launch`
    pub found_launch: bool,
    /// `/EmbeddedFile` or `/Filespec`
    pub found_embed: bool,
}

impl PdfAssessment {
    /// An input that is not a valid PDF is treated as suspicious.
    pub fn verdict(&self) -> Verdict {
        if !self.valid_header {
            return Verdict::Suspicious;
        }
        Verdict::from_flag(self.found_js && (self.found_launch || self.found_embed))
    }
}

/// A single URL heuristic that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlRule {
    /// Both keywords of a phishing pair occur
    KeywordPair(String, String),
    /// A known lookalike domain occurs
    LookalikeDomain(String),
    /// A command-style query parameter occurs
    QueryParameter(String),
    /// The host part is a dotted run of digits
    RawIpHost,
}

impl fmt::Display for UrlRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlRule::KeywordPair(a, b) => write!(f, "keywords '{}' and '{}'", a, b),
            UrlRule::LookalikeDomain(d) => write!(f, "lookalike domain '{}'", d),
            UrlRule::QueryParameter(p) => write!(f, "query parameter '{}'", p),
            UrlRule::RawIpHost => write!(f, "raw IP address as host"),
        }
    }
}

/// Every URL heuristic that matched, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAssessment {
    pub matches: Vec<UrlRule>,
}

impl UrlAssessment {
    pub fn is_suspicious(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Result of checking one file on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub verdict: Verdict,
    /// Why the verdict was reached, or why the file could not be evaluated
    pub detail: Option<String>,
}

impl FileReport {
    pub fn new(path: PathBuf, verdict: Verdict, detail: Option<String>) -> Self {
        Self {
            path,
            verdict,
            detail,
        }
    }
}
