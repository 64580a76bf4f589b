//! Secret Share Definition.
//!
//! A share is the list of points $(x, y_p)$, one per secret byte position $p$, taken from
//! the polynomials used to hide the secret.
//! - $x$ (identifier): A non-zero byte unique within the share-set.
//! - $t$ (threshold): How many shares the dealer said are needed.
//! - $y_p$ (values): GF(257) evaluations, each in `[0, 256]`.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe sensitive data from memory.
//! - `Debug` implementation redacts the actual values.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};
use core::fmt;
use crate::core::field::Fp257;
use super::SharingError;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawShare"))]
pub struct Share {
    /// The x-coordinate (1..=255).
    /// Public information (who owns the share).
    #[zeroize(skip)]
    pub(crate) identifier: u8,

    /// Reconstruction threshold declared by the dealer (1..=255).
    #[zeroize(skip)]
    pub(crate) threshold: u8,

    /// The y-coordinates (one per byte of the secret).
    /// Highly sensitive information.
    pub(crate) values: Vec<Fp257>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("identifier", &self.identifier)
            .field("threshold", &self.threshold)
            .field("length", &self.values.len())
            .field("values", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a new share with validation.
    ///
    /// # Arguments
    /// * `identifier` - The x-coordinate (must be non-zero).
    /// * `threshold` - The declared threshold (must be non-zero).
    /// * `values` - One field element per secret byte. May be empty for an empty secret.
    ///
    /// # Returns
    /// * `Ok(Share)` if valid.
    /// * `Err(SharingError::InvalidParameters)` if invalid.
    pub fn new(identifier: u8, threshold: u8, values: Vec<Fp257>) -> Result<Self, SharingError> {
        if identifier == 0 || threshold == 0 {
            return Err(SharingError::InvalidParameters);
        }
        Ok(Self { identifier, threshold, values })
    }

    /// The share's identifier, 1..=255.
    pub fn identifier(&self) -> u8 {
        self.identifier
    }

    /// The threshold the dealer declared, 1..=255.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns a reference to the values.
    pub fn values(&self) -> &[Fp257] {
        &self.values
    }

    /// Number of secret byte positions this share covers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The x-coordinate as a field element.
    pub fn x(&self) -> Fp257 {
        Fp257::from(self.identifier)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawShare {
    identifier: u8,
    threshold: u8,
    values: Vec<Fp257>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawShare> for Share {
    type Error = SharingError;

    fn try_from(raw: RawShare) -> Result<Self, Self::Error> {
        Share::new(raw.identifier, raw.threshold, raw.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[u16]) -> Vec<Fp257> {
        raw.iter().map(|&v| Fp257::new(v)).collect()
    }

    #[test]
    fn test_share_creation() {
        let s = Share::new(1, 2, values(&[10, 256])).unwrap();
        assert_eq!(s.identifier(), 1);
        assert_eq!(s.threshold(), 2);
        assert_eq!(s.values(), &values(&[10, 256])[..]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.x(), Fp257::ONE);
    }

    #[test]
    fn test_share_validation() {
        assert_eq!(Share::new(0, 1, values(&[1])), Err(SharingError::InvalidParameters));
        assert_eq!(Share::new(1, 0, values(&[1])), Err(SharingError::InvalidParameters));
        assert!(Share::new(1, 1, Vec::new()).unwrap().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialized_share_is_validated() {
        let zero_id = RawShare { identifier: 0, threshold: 2, values: values(&[1]) };
        assert_eq!(Share::try_from(zero_id), Err(SharingError::InvalidParameters));

        let zero_t = RawShare { identifier: 1, threshold: 0, values: values(&[1]) };
        assert_eq!(Share::try_from(zero_t), Err(SharingError::InvalidParameters));

        let ok = RawShare { identifier: 3, threshold: 2, values: values(&[256]) };
        assert_eq!(Share::try_from(ok).unwrap().identifier(), 3);
    }

    #[test]
    fn test_debug_redaction() {
        let s = Share::new(5, 3, values(&[0xAB; 32])).unwrap();
        let debug_str = alloc::format!("{:?}", s);
        assert!(debug_str.contains("identifier: 5"));
        assert!(debug_str.contains("length: 32"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("171")); // 0xAB shouldn't appear
    }
}
