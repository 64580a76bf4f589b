//! Custom User-Provided Entropy Source.
//!
//! Replays bytes injected by the caller. Useful for reproducible share-sets in tests
//! and for feeding entropy gathered outside this crate.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use super::{EntropyError, EntropySource};

/// Source that buffers user-injected entropy.
pub struct CustomSource {
    buffer: Zeroizing<Vec<u8>>,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self {
            buffer: Zeroizing::new(Vec::new()),
        }
    }

    /// Creates a source preloaded with `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut source = Self::new();
        source.add_bytes(bytes);
        source
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes still available.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }

        dest.copy_from_slice(&self.buffer[..dest.len()]);
        self.buffer.drain(..dest.len());
        Ok(())
    }
}
