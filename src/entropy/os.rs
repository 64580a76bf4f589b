//! Operating-system backed entropy.
//!
//! `OsSource` reads from the platform CSPRNG through `rand_core::OsRng`. `RngSource`
//! wraps any other cryptographically secure `rand_core` generator.

use rand_core::{CryptoRng, OsRng, RngCore};
use super::{EntropyError, EntropySource};

/// Adapter from a `rand_core` CSPRNG to [`EntropySource`].
///
/// The `CryptoRng` bound keeps non-cryptographic generators out of coefficient sampling.
pub struct RngSource<R: RngCore + CryptoRng> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngSource<R> {
    /// Wraps an already seeded generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngSource<R> {
    fn name(&self) -> &'static str {
        "RngCore"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng.try_fill_bytes(dest).map_err(|e| {
            log::warn!("RNG fill of {} bytes failed: {}", dest.len(), e);
            EntropyError::CollectionFailed
        })
    }
}

/// The platform CSPRNG (`getrandom` under the hood).
///
/// The OS generator is seeded by the kernel, so there is no explicit seeding step.
pub struct OsSource {
    inner: RngSource<OsRng>,
}

impl OsSource {
    /// Creates a handle to the OS generator.
    pub fn new() -> Self {
        Self {
            inner: RngSource::new(OsRng),
        }
    }
}

impl Default for OsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for OsSource {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.inner.fill(dest)
    }
}
