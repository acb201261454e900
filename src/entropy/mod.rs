//! Entropy estimators over byte histograms.
//!
//! This module provides the numeric primitives used by the content policy:
//!
//! - [`shannon_entropy`]: classic information entropy in bits, in `[0, 8]`
//! - [`renyi_entropy`]: Rényi entropy of order `alpha`
//! - [`tsallis_entropy`]: Tsallis entropy of order `q`
//!
//! All three are pure functions of the input bytes and return 0.0 for an
//! empty buffer. Callers that read data in chunks can accumulate a
//! [`Histogram`] and evaluate the estimators on it directly.
//!
//! # Example
//!
//! ```
//! use entroscan::entropy::{renyi_entropy, shannon_entropy};
//!
//! let data = b"Hello, World!";
//! let h = shannon_entropy(data);
//! let h2 = renyi_entropy(data, 2.0);
//! assert!(h2 <= h);
//! ```

pub mod core;
pub mod generalized;

pub use self::core::{shannon_entropy, Histogram};
pub use self::generalized::{renyi_entropy, tsallis_entropy};
