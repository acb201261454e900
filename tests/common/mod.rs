//! Common test utilities and helpers.

use std::fs;
use std::path::{Path, PathBuf};

/// Synthetic inputs with known entropy.
pub mod test_data {
    /// Blocks of 256 bytes, each a permutation of every byte value.
    /// Any 256-aligned slice has Shannon and Rényi entropy of exactly 8 bits.
    pub fn uniform_blocks(blocks: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(blocks * 256);
        for i in 0..blocks {
            for b in 0..256usize {
                out.push(((b * 167 + i * 13) % 256) as u8);
            }
        }
        out
    }

    /// Repetitive English text, well below 5 bits per byte.
    pub fn plain_text(repeat: usize) -> Vec<u8> {
        b"Minutes of the weekly sync: nothing to report, see you next week.\n".repeat(repeat)
    }

    /// Minimal PDF with the given body after the header line.
    pub fn pdf_with(body: &str) -> Vec<u8> {
        let mut v = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".to_vec();
        v.extend_from_slice(body.as_bytes());
        v.extend_from_slice(b"\n%%EOF\n");
        v
    }
}

/// Write `data` to `dir/name` and return the full path.
pub fn write_file<P: AsRef<Path>>(dir: P, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.as_ref().join(name);
    fs::write(&path, data).unwrap_or_else(|e| panic!("failed to write {:?}: {}", path, e));
    path
}
