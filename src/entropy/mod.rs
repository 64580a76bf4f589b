//! Randomness for polynomial coefficients.
//!
//! This module defines the interface every randomness source implements and the
//! adapter that turns raw bytes into uniformly distributed GF(257) coefficients.
//!
//! # Design
//! - **Explicit Instances**: There is no process-wide generator. Callers own a source and
//!   pass it by `&mut` to every split, so concurrent use needs one source per thread or
//!   external locking.
//! - **Fail Closed**: A source that cannot deliver the requested bytes returns an error;
//!   splitting never falls back to weaker randomness.

pub mod coefficients;
pub mod custom;
pub mod os;

use core::fmt;

pub use coefficients::CoefficientSource;
pub use custom::CustomSource;
pub use os::{OsSource, RngSource};

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The underlying generator reported a failure.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::CollectionFailed => write!(f, "Entropy collection failed"),
            EntropyError::Exhausted => write!(f, "Entropy source exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Arguments
    /// * `dest` - Buffer to fill with entropy.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
