//! Core result types shared by the classifiers and the scan layer.

pub mod verdict;

pub use verdict::{
    FileAssessment, FileReason, FileReport, PdfAssessment, UrlAssessment, UrlRule, Verdict,
};
