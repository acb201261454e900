//! Core entropy calculation primitives.
//!
//! Every estimator in this crate works from a single [`Histogram`], so the
//! counts and probabilities seen by Shannon, Rényi and Tsallis are always
//! consistent for the same input.

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 represents no randomness (empty input or all bytes the same)
/// - 8.0 represents maximum randomness (uniform distribution)
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    Histogram::from_bytes(data).shannon()
}

/// Byte frequency histogram over the values 0..=255.
///
/// The sum of all counts always equals the number of bytes fed in, which is
/// the length used to turn counts into probabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [usize; 256],
    total: usize,
}

impl Histogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        hist.update(data);
        hist
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Adds every byte of `data`. Used to accumulate a file read in chunks.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len();
    }

    /// Count for a single byte value.
    #[inline]
    pub fn count(&self, byte: u8) -> usize {
        self.counts[byte as usize]
    }

    /// Returns the total number of bytes in the histogram.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns true if the histogram is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct byte values seen.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Probabilities of the byte values that occur at least once.
    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        let total = self.total as f64;
        self.counts
            .iter()
            .filter(|&&c| c > 0)
            .map(move |&c| (c as f64) / total)
    }

    /// Sum of p_i^exponent over the occurring byte values.
    pub(crate) fn power_sum(&self, exponent: f64) -> f64 {
        self.probabilities().map(|p| p.powf(exponent)).sum()
    }

    /// Shannon entropy in bits; 0.0 for an empty histogram.
    pub fn shannon(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let mut entropy = 0.0;
        for p in self.probabilities() {
            entropy -= p * p.log2();
        }
        entropy
    }

    /// Resets the histogram to empty state.
    #[inline]
    pub fn clear(&mut self) {
        self.counts = [0; 256];
        self.total = 0;
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<u8> for Histogram {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.add(byte);
        }
    }
}
