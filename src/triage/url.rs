//! URL heuristic classifier.
//!
//! Pure string checks with no normalization: matching is case-sensitive,
//! nothing is percent-decoded and no DNS lookup is made. Any single rule
//! flags the URL.

use crate::core::verdict::{UrlAssessment, UrlRule};
use crate::triage::config::{UrlConfig, DEFAULT_CONFIG};
use memchr::memmem;
use tracing::debug;

/// Classify a URL with the stock rules.
pub fn classify_url(url: &str) -> bool {
    UrlClassifier::new(&DEFAULT_CONFIG.url).is_suspicious(url)
}

/// Like [`classify_url`] but lists every rule that matched.
pub fn assess_url(url: &str) -> UrlAssessment {
    UrlClassifier::new(&DEFAULT_CONFIG.url).assess(url)
}

#[inline]
fn contains(hay: &str, needle: &str) -> bool {
    memmem::find(hay.as_bytes(), needle.as_bytes()).is_some()
}

/// Rule set bound to a borrowed [`UrlConfig`].
#[derive(Debug, Clone, Copy)]
pub struct UrlClassifier<'a> {
    config: &'a UrlConfig,
}

impl<'a> UrlClassifier<'a> {
    pub fn new(config: &'a UrlConfig) -> Self {
        Self { config }
    }

    pub fn is_suspicious(&self, url: &str) -> bool {
        let cfg = self.config;
        cfg.keyword_pairs
            .iter()
            .any(|(a, b)| contains(url, a) && contains(url, b))
            || cfg.lookalike_domains.iter().any(|d| contains(url, d))
            || cfg.query_params.iter().any(|p| contains(url, p))
            || (cfg.detect_raw_ip && is_raw_ip_host(url))
    }

    /// Evaluate every rule and collect the ones that matched.
    pub fn assess(&self, url: &str) -> UrlAssessment {
        let cfg = self.config;
        let mut matches = Vec::new();

        for (a, b) in &cfg.keyword_pairs {
            if contains(url, a) && contains(url, b) {
                matches.push(UrlRule::KeywordPair(a.clone(), b.clone()));
            }
        }
        for domain in &cfg.lookalike_domains {
            if contains(url, domain) {
                matches.push(UrlRule::LookalikeDomain(domain.clone()));
            }
        }
        for param in &cfg.query_params {
            if contains(url, param) {
                matches.push(UrlRule::QueryParameter(param.clone()));
            }
        }
        if cfg.detect_raw_ip && is_raw_ip_host(url) {
            matches.push(UrlRule::RawIpHost);
        }

        debug!(url, matched = matches.len(), "URL assessed");
        UrlAssessment { matches }
    }
}

/// Dotted-digit host check.
///
/// Scans characters up to the first `/` (or the end) and flags the URL when
/// exactly three dots were seen and the characters after the last dot are all
/// digits. The digit flag is reset at every dot, so letters in an earlier
/// segment do not clear it, and octet ranges are not validated. A leading
/// `scheme://` is skipped so the scan starts at the host.
pub fn is_raw_ip_host(url: &str) -> bool {
    let start = match url.find("://") {
        Some(i) if !url[..i].contains('/') => i + 3,
        _ => 0,
    };

    let mut dots = 0usize;
    let mut digits = true;
    for &b in url.as_bytes()[start..]
        .iter()
        .take_while(|&&b| b != b'/' && b != 0)
    {
        if b == b'.' {
            dots += 1;
            digits = true;
        } else if !b.is_ascii_digit() {
            digits = false;
        }
    }
    dots == 3 && digits
}
