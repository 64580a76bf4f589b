//! Uniform GF(257) coefficient sampling.
//!
//! Raw entropy arrives as bytes, but coefficients live in a field with 257 elements, so a
//! single byte can never reach 256 and `byte % 257` would be biased. Instead each draw reads
//! a big-endian 16-bit word `w` and keeps `w % 257` unless `w == 0xFFFF`. The 65535 accepted
//! words split into exactly 255 full copies of the field, which makes the result uniform.
//!
//! # Security
//! - **Zeroization**: The staging buffer is wiped on drop.
//! - **No Bias**: Rejection sampling instead of modular folding.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::core::field::{Fp257, P};
use super::{EntropyError, EntropySource};

/// The only 16-bit word outside the largest multiple of `P`.
const REJECT: u16 = u16::MAX;

/// Draws uniformly distributed field elements from an [`EntropySource`].
pub struct CoefficientSource<'a, R: EntropySource + ?Sized> {
    rng: &'a mut R,
    staging: Zeroizing<Vec<u8>>,
}

impl<'a, R: EntropySource + ?Sized> CoefficientSource<'a, R> {
    /// Borrows `rng` for the lifetime of the sampler.
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            staging: Zeroizing::new(Vec::new()),
        }
    }

    /// Draws a single element in `[0, 256]`.
    pub fn draw(&mut self) -> Result<Fp257, EntropyError> {
        draw_one(&mut *self.rng)
    }

    /// Fills `out` with independent uniform elements.
    ///
    /// Entropy for the whole slice is requested in one call; only rejected words are redrawn.
    pub fn fill(&mut self, out: &mut [Fp257]) -> Result<(), EntropyError> {
        if out.is_empty() {
            return Ok(());
        }

        self.staging.clear();
        self.staging.resize(out.len() * 2, 0);
        self.rng.fill(&mut self.staging)?;

        for (slot, word) in out.iter_mut().zip(self.staging.chunks_exact(2)) {
            *slot = match accept(u16::from_be_bytes([word[0], word[1]])) {
                Some(element) => element,
                None => {
                    log::debug!("Rejected coefficient word, redrawing");
                    draw_one(&mut *self.rng)?
                }
            };
        }

        Ok(())
    }
}

fn draw_one<R: EntropySource + ?Sized>(rng: &mut R) -> Result<Fp257, EntropyError> {
    loop {
        let mut word = Zeroizing::new([0u8; 2]);
        rng.fill(&mut word[..])?;
        if let Some(element) = accept(u16::from_be_bytes(*word)) {
            return Ok(element);
        }
    }
}

#[inline(always)]
fn accept(word: u16) -> Option<Fp257> {
    if word == REJECT {
        None
    } else {
        Some(Fp257::new(word % P))
    }
}
