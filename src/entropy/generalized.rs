//! Rényi and Tsallis entropies.
//!
//! Both families reduce to Shannon entropy at order 1, where their closed
//! forms have a removable singularity; that order is delegated explicitly.

use super::core::Histogram;

/// Rényi entropy of order `alpha`, in bits.
///
/// `H_a = log2(sum p_i^a) / (1 - a)`. Order 2 is the collision entropy used
/// by the content policy. Returns 0.0 for empty input.
pub fn renyi_entropy(data: &[u8], alpha: f64) -> f64 {
    Histogram::from_bytes(data).renyi(alpha)
}

/// Tsallis entropy of order `q`.
///
/// `S_q = (1 - sum p_i^q) / (q - 1)`. Returns 0.0 for empty input.
pub fn tsallis_entropy(data: &[u8], q: f64) -> f64 {
    Histogram::from_bytes(data).tsallis(q)
}

impl Histogram {
    /// Rényi entropy of order `alpha` for this histogram.
    pub fn renyi(&self, alpha: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        if alpha == 1.0 {
            return self.shannon();
        }
        self.power_sum(alpha).log2() / (1.0 - alpha)
    }

    /// Tsallis entropy of order `q` for this histogram.
    pub fn tsallis(&self, q: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        if q == 1.0 {
            return self.shannon();
        }
        (1.0 - self.power_sum(q)) / (q - 1.0)
    }
}
