//! Extension-based classification.
//!
//! The extension is the substring from the last `.` to the end of the name,
//! dot included. Matching against the denylist is exact and case-sensitive,
//! so `a.EXE` is not flagged.

use crate::triage::config::{ExtensionConfig, DEFAULT_CONFIG};
use tracing::trace;

/// Extract the extension (from the last `.` onwards) of a file name.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|idx| &filename[idx..])
}

/// Check a file name against the stock denylist.
pub fn is_suspicious_extension(filename: &str) -> bool {
    ExtensionClassifier::new(&DEFAULT_CONFIG.extensions).is_suspicious(filename)
}

/// Denylist matcher over a borrowed extension configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionClassifier<'a> {
    config: &'a ExtensionConfig,
}

impl<'a> ExtensionClassifier<'a> {
    pub fn new(config: &'a ExtensionConfig) -> Self {
        Self { config }
    }

    /// True when the file name ends in a denylisted extension.
    /// A name without any `.` is never suspicious at this layer.
    pub fn is_suspicious(&self, filename: &str) -> bool {
        let Some(ext) = extension_of(filename) else {
            return false;
        };
        let hit = self.config.suspicious.iter().any(|s| s == ext);
        trace!(filename, ext, hit, "extension check");
        hit
    }

    /// True when the file name should be routed to the PDF sniffer.
    pub fn is_pdf(&self, filename: &str) -> bool {
        extension_of(filename) == Some(self.config.pdf.as_str())
    }
}
