//! PDF active-content sniffer.
//!
//! Validates the PDF magic and scans the raw bytes for markers of embedded
//! scripts, launch actions and embedded files. The scan is a plain byte
//! substring search; it does not parse the object graph, so markers inside
//! benign streams still count and markers hidden behind stream filters are
//! missed.
//!
//! A file is suspicious when it is not a valid PDF, or when it carries a
//! script marker together with a launch or embedded-file marker.

use crate::core::verdict::{PdfAssessment, Verdict};
use crate::error::Result;
use crate::triage::config::{DetectorConfig, DEFAULT_CONFIG};
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::io::{self, Read};
use tracing::{debug, trace};

static DEFAULT_SNIFFER: Lazy<PdfSniffer> =
    Lazy::new(|| PdfSniffer::new(&DEFAULT_CONFIG).expect("valid default PDF markers"));

/// Classify an in-memory PDF with the stock markers.
pub fn classify_pdf(data: &[u8]) -> Verdict {
    DEFAULT_SNIFFER.assess(data).verdict()
}

/// Like [`classify_pdf`] but returns the individual marker flags.
pub fn assess_pdf(data: &[u8]) -> PdfAssessment {
    DEFAULT_SNIFFER.assess(data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Js,
    Launch,
    Embed,
}

/// Marker scanner built from a [`PdfConfig`](crate::triage::config::PdfConfig).
#[derive(Debug, Clone)]
pub struct PdfSniffer {
    magic: Vec<u8>,
    header_read_len: usize,
    chunk_size: usize,
    automaton: AhoCorasick,
    kinds: Vec<MarkerKind>,
    max_marker_len: usize,
}

impl PdfSniffer {
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        let pdf = &config.pdf;
        let mut patterns: Vec<&str> = Vec::new();
        let mut kinds = Vec::new();
        for (list, kind) in [
            (&pdf.js_markers, MarkerKind::Js),
            (&pdf.launch_markers, MarkerKind::Launch),
            (&pdf.embed_markers, MarkerKind::Embed),
        ] {
            for marker in list {
                patterns.push(marker.as_str());
                kinds.push(kind);
            }
        }
        let max_marker_len = patterns.iter().map(|p| p.len()).max().unwrap_or(0);
        let automaton = AhoCorasick::new(&patterns)?;

        Ok(Self {
            magic: pdf.magic.as_bytes().to_vec(),
            header_read_len: pdf.header_read_len.max(pdf.magic.len()),
            chunk_size: config.io.pdf_chunk_size.max(1),
            automaton,
            kinds,
            max_marker_len,
        })
    }

    /// True when `header` is long enough and starts with the PDF magic.
    pub fn check_header(&self, header: &[u8]) -> bool {
        header.len() >= self.header_read_len && header.starts_with(&self.magic)
    }

    /// Scan an in-memory document as one contiguous buffer.
    pub fn assess(&self, data: &[u8]) -> PdfAssessment {
        let mut assessment = PdfAssessment::default();
        if !self.check_header(data) {
            debug!(len = data.len(), "not a valid PDF header");
            return assessment;
        }
        assessment.valid_header = true;
        self.scan(&data[self.header_read_len..], &mut assessment);
        debug!(?assessment, "PDF scanned");
        assessment
    }

    /// Scan a document from a reader in fixed-size chunks.
    ///
    /// The last `longest marker - 1` bytes of each window are carried into the
    /// next one, so a marker split across a read boundary is still found.
    pub fn assess_reader<R: Read>(&self, mut reader: R) -> io::Result<PdfAssessment> {
        let mut assessment = PdfAssessment::default();

        let mut header = Vec::with_capacity(self.header_read_len);
        reader
            .by_ref()
            .take(self.header_read_len as u64)
            .read_to_end(&mut header)?;
        if !self.check_header(&header) {
            debug!(len = header.len(), "not a valid PDF header");
            return Ok(assessment);
        }
        assessment.valid_header = true;

        let keep = self.max_marker_len.saturating_sub(1);
        let mut window: Vec<u8> = Vec::with_capacity(keep + self.chunk_size);
        let mut chunk = vec![0u8; self.chunk_size];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            window.extend_from_slice(&chunk[..n]);
            self.scan(&window, &mut assessment);
            if Self::complete(&assessment) {
                break;
            }
            let consumed = window.len().saturating_sub(keep);
            window.drain(..consumed);
        }
        debug!(?assessment, "PDF stream scanned");
        Ok(assessment)
    }

    fn scan(&self, hay: &[u8], assessment: &mut PdfAssessment) {
        for mat in self.automaton.find_overlapping_iter(hay) {
            let kind = self.kinds[mat.pattern().as_usize()];
            trace!(?kind, offset = mat.start(), "marker found");
            match kind {
                MarkerKind::Js => assessment.found_js = true,
                MarkerKind::Launch => assessment.found_launch = true,
                MarkerKind::Embed => assessment.found_embed = true,
            }
            if Self::complete(assessment) {
                return;
            }
        }
    }

    fn complete(a: &PdfAssessment) -> bool {
        a.found_js && a.found_launch && a.found_embed
    }
}
