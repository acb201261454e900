//! Configuration for the detection engine.
//!
//! Every threshold and denylist used by the classifiers lives here as plain
//! data. `Default` reproduces the stock heuristic; callers and tests can
//! override any field or load a whole tree from JSON.

use crate::error::{EntroscanError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stock configuration shared by the convenience entry points.
pub static DEFAULT_CONFIG: Lazy<DetectorConfig> = Lazy::new(DetectorConfig::default);

/// Master configuration for the detection engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// I/O configuration for the scan layer.
    pub io: IOConfig,
    /// Content verdict policy configuration.
    pub entropy: EntropyPolicyConfig,
    /// Extension denylist.
    pub extensions: ExtensionConfig,
    /// PDF sniffer configuration.
    pub pdf: PdfConfig,
    /// URL heuristic configuration.
    pub url: UrlConfig,
}

impl DetectorConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| EntroscanError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.entropy.header_sample_size == 0 {
            return Err(EntroscanError::Config(
                "entropy.header_sample_size must be non-zero".into(),
            ));
        }
        if self.io.pdf_chunk_size == 0 {
            return Err(EntroscanError::Config(
                "io.pdf_chunk_size must be non-zero".into(),
            ));
        }
        if self.pdf.header_read_len < self.pdf.magic.len() {
            return Err(EntroscanError::Config(format!(
                "pdf.header_read_len ({}) is shorter than the magic ({} bytes)",
                self.pdf.header_read_len,
                self.pdf.magic.len()
            )));
        }
        let empty_marker = self
            .pdf
            .js_markers
            .iter()
            .chain(&self.pdf.launch_markers)
            .chain(&self.pdf.embed_markers)
            .any(|m| m.is_empty());
        if empty_marker {
            return Err(EntroscanError::Config("pdf markers must not be empty".into()));
        }
        Ok(())
    }
}

/// I/O configuration for the scan layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOConfig {
    /// Files larger than this are reported unreadable (default: 104857600 = 100MB).
    pub max_file_size: u64,
    /// Chunk size for streamed reads (default: 8192).
    pub pdf_chunk_size: usize,
}

impl Default for IOConfig {
    fn default() -> Self {
        Self {
            max_file_size: 104857600, // 100MB
            pdf_chunk_size: 8192,
        }
    }
}

/// Content verdict policy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyPolicyConfig {
    /// Number of leading bytes analysed as the header sample (default: 256).
    pub header_sample_size: usize,
    /// Rényi order averaged with Shannon entropy (default: 2.0).
    pub renyi_alpha: f64,
    /// Entropy classification thresholds.
    pub thresholds: EntropyThresholds,
}

impl Default for EntropyPolicyConfig {
    fn default() -> Self {
        Self {
            header_sample_size: 256,
            renyi_alpha: 2.0,
            thresholds: EntropyThresholds::default(),
        }
    }
}

/// Empirical thresholds of the content policy, in bits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyThresholds {
    /// Reference ceiling for the header average (default: 7.0).
    pub header_ceiling: f64,
    /// Reference ceiling for the full-content average (default: 8.0).
    pub full_ceiling: f64,
    /// Files whose combined distance to both ceilings is below this are flagged (default: 0.5).
    pub combined_gap: f64,
    /// Both averages above this flag the file (default: 7.0).
    pub high: f64,
}

impl Default for EntropyThresholds {
    fn default() -> Self {
        Self {
            header_ceiling: 7.0,
            full_ceiling: 8.0,
            combined_gap: 0.5,
            high: 7.0,
        }
    }
}

/// Extension denylist. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Suspicious extensions including the leading dot.
    pub suspicious: Vec<String>,
    /// Extension routed to the PDF sniffer by the scan layer (default: ".pdf").
    pub pdf: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            suspicious: [".exe", ".apk", ".bat", ".cmd", ".msi", ".js", ".vbs", ".scr"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pdf: ".pdf".to_string(),
        }
    }
}

/// PDF sniffer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Required prefix of a valid PDF (default: "%PDF-1.").
    pub magic: String,
    /// Bytes that must be present before scanning starts (default: 8).
    pub header_read_len: usize,
    /// Script markers.
    pub js_markers: Vec<String>,
    /// Auto-launch markers.
    pub launch_markers: Vec<String>,
    /// Embedded file markers.
    pub embed_markers: Vec<String>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            magic: "%PDF-1.".to_string(),
            header_read_len: 8,
            js_markers: vec!["/JavaScript".into(), "/JS".into()],
            launch_markers: vec!["/Launch".into()],
            embed_markers: vec!["/EmbeddedFile".into(), "/Filespec".into()],
        }
    }
}

/// URL heuristic configuration. All matching is case-sensitive substring search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Keyword pairs that flag a URL when both occur.
    pub keyword_pairs: Vec<(String, String)>,
    /// Lookalike domains.
    pub lookalike_domains: Vec<String>,
    /// Command-style query parameters.
    pub query_params: Vec<String>,
    /// Whether a dotted-digit host is flagged.
    pub detect_raw_ip: bool,
}

impl Default for UrlConfig {
    fn default() -> Self {
        let pairs = [
            ("login", "redirect"),
            ("security", "verify"),
            ("account", "update"),
            ("confirm", "payment"),
            ("password", "reset"),
        ];
        Self {
            keyword_pairs: pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            lookalike_domains: ["paypa1.com", "amaz0n.com", "goog1e.com", "m1crosoft.com"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            query_params: ["?cmd=", "?exe=", "?admin=", "?root="]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            detect_raw_ip: true,
        }
    }
}
