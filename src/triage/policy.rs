//! Content verdict policy.
//!
//! Combines the entropy of a small header sample with the entropy of the
//! whole content and the extension denylist. Each side is scored as the mean
//! of its Shannon and Rényi entropy; rules are evaluated in order and the
//! first one that fires decides:
//!
//! 1. distance of both means from their ceilings sums to less than the gap
//! 2. both means above the high threshold
//! 3. extension on the denylist
//!
//! The thresholds are empirical policy knobs taken from
//! [`EntropyThresholds`](crate::triage::config::EntropyThresholds).

use crate::core::verdict::{FileAssessment, FileReason, Verdict};
use crate::entropy::Histogram;
use crate::error::{EntroscanError, Result};
use crate::triage::config::{DetectorConfig, EntropyPolicyConfig, DEFAULT_CONFIG};
use crate::triage::extension::{extension_of, ExtensionClassifier};
use tracing::debug;

/// Classify a file from its header sample and full content using the stock configuration.
///
/// `header` should hold at most the first 256 bytes; longer slices are
/// truncated to the configured sample size. Fails with
/// [`EntroscanError::InvalidInput`] when `filename` is empty or has no extension.
pub fn classify_file(header: &[u8], full: &[u8], filename: &str) -> Result<Verdict> {
    ContentPolicy::new(&DEFAULT_CONFIG).classify(header, full, filename)
}

/// Like [`classify_file`] but returns the entropy figures and the firing rule.
pub fn assess_file(header: &[u8], full: &[u8], filename: &str) -> Result<FileAssessment> {
    ContentPolicy::new(&DEFAULT_CONFIG).assess(header, full, filename)
}

/// The content policy bound to a configuration.
#[derive(Debug, Clone, Copy)]
pub struct ContentPolicy<'a> {
    entropy: &'a EntropyPolicyConfig,
    extensions: ExtensionClassifier<'a>,
}

impl<'a> ContentPolicy<'a> {
    pub fn new(config: &'a DetectorConfig) -> Self {
        Self {
            entropy: &config.entropy,
            extensions: ExtensionClassifier::new(&config.extensions),
        }
    }

    pub fn classify(&self, header: &[u8], full: &[u8], filename: &str) -> Result<Verdict> {
        Ok(self.assess(header, full, filename)?.verdict())
    }

    pub fn assess(&self, header: &[u8], full: &[u8], filename: &str) -> Result<FileAssessment> {
        let header = &header[..header.len().min(self.entropy.header_sample_size)];
        self.assess_histograms(
            &Histogram::from_bytes(header),
            &Histogram::from_bytes(full),
            filename,
        )
    }

    /// Evaluate pre-built histograms, for callers that stream the content.
    pub fn assess_histograms(
        &self,
        header: &Histogram,
        full: &Histogram,
        filename: &str,
    ) -> Result<FileAssessment> {
        validate_filename(filename)?;

        let alpha = self.entropy.renyi_alpha;
        let t = &self.entropy.thresholds;

        let header_shannon = header.shannon();
        let header_renyi = header.renyi(alpha);
        let full_shannon = full.shannon();
        let full_renyi = full.renyi(alpha);

        let avg_header = (header_shannon + header_renyi) / 2.0;
        let avg_full = (full_shannon + full_renyi) / 2.0;

        let header_diff = t.header_ceiling - avg_header;
        let full_diff = t.full_ceiling - avg_full;
        let total_diff = header_diff + full_diff;

        let reason = if total_diff < t.combined_gap {
            Some(FileReason::CombinedEntropyGap)
        } else if avg_header > t.high && avg_full > t.high {
            Some(FileReason::HighEntropy)
        } else if self.extensions.is_suspicious(filename) {
            Some(FileReason::SuspiciousExtension)
        } else {
            None
        };

        debug!(
            filename,
            header_len = header.len(),
            full_len = full.len(),
            avg_header,
            avg_full,
            total_diff,
            ?reason,
            "content policy evaluated"
        );

        Ok(FileAssessment {
            header_len: header.len(),
            full_len: full.len(),
            header_shannon,
            header_renyi,
            full_shannon,
            full_renyi,
            avg_header,
            avg_full,
            total_diff,
            reason,
        })
    }
}

/// A file name must be non-empty and carry an extension.
pub(crate) fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(EntroscanError::InvalidInput("empty filename".into()));
    }
    if extension_of(filename).is_none() {
        return Err(EntroscanError::InvalidInput(format!(
            "file has no extension: {}",
            filename
        )));
    }
    Ok(())
}
