//! Threshold secret sharing over GF(257).
//!
//! This module implements Shamir's Secret Sharing with every secret byte hidden as the
//! constant term of its own random polynomial over the prime field of order 257.
//!
//! # Components
//! - `share`: Definition of a secret share.
//! - `quorum`: Parameter checks and polynomial generation (splitting).
//! - `reconstruct`: Lagrange interpolation for secret recovery.
//! - `aggregate`: Operations on shares (proactive refresh, homomorphic addition).
//!
//! # Security
//! - **Zeroization**: Shares, coefficients and recovered secrets are zeroized on drop.
//! - **No Integrity**: Shares carry no MAC. A corrupted or insufficient share-set yields a
//!   wrong secret, not an error, unless the corruption breaks a structural check.

pub mod share;
pub mod quorum;
pub mod reconstruct;
pub mod aggregate;
pub(crate) mod polynomial;

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use crate::core::field::FieldError;
use crate::entropy::{EntropyError, EntropySource};

/// Reasons a collection of shares cannot be joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareSetFault {
    /// Two shares carry the same x-coordinate.
    DuplicateIdentifier,
    /// Shares hold different numbers of byte positions.
    LengthMismatch,
    /// Shares declare different thresholds.
    ThresholdMismatch,
    /// Fewer shares than the declared threshold were supplied.
    InsufficientShares,
    /// A Lagrange denominator was zero.
    ZeroDenominator,
    /// Interpolation produced 256, which is not a byte.
    ValueOutOfRange,
}

/// Errors for sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingError {
    /// Share count or threshold outside `1 <= t <= n <= 255`, or not a number.
    InvalidParameters,
    /// The shares cannot be combined.
    InvalidShareSet(ShareSetFault),
    /// A share line could not be decoded. `line` is 1-based and counts blank lines too.
    MalformedShareLine { line: usize },
    /// No shares were supplied.
    EmptyInput,
    /// Random number generator failure.
    RngFailure,
}

impl fmt::Display for ShareSetFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareSetFault::DuplicateIdentifier => write!(f, "duplicate share identifier"),
            ShareSetFault::LengthMismatch => write!(f, "share lengths differ"),
            ShareSetFault::ThresholdMismatch => write!(f, "share thresholds differ"),
            ShareSetFault::InsufficientShares => write!(f, "fewer shares than the threshold"),
            ShareSetFault::ZeroDenominator => write!(f, "zero interpolation denominator"),
            ShareSetFault::ValueOutOfRange => write!(f, "reconstructed value is not a byte"),
        }
    }
}

impl fmt::Display for SharingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharingError::InvalidParameters => write!(f, "Invalid share count or threshold"),
            SharingError::InvalidShareSet(fault) => write!(f, "Invalid share set: {}", fault),
            SharingError::MalformedShareLine { line } => write!(f, "Malformed share on line {}", line),
            SharingError::EmptyInput => write!(f, "No shares supplied"),
            SharingError::RngFailure => write!(f, "Random number generator failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SharingError {}

impl From<FieldError> for SharingError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::DivisionByZero => SharingError::InvalidShareSet(ShareSetFault::ZeroDenominator),
            FieldError::OutOfRange => SharingError::InvalidShareSet(ShareSetFault::ValueOutOfRange),
        }
    }
}

impl From<EntropyError> for SharingError {
    fn from(_: EntropyError) -> Self {
        SharingError::RngFailure
    }
}

/// Trait for Secret Sharing Schemes.
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into n shares with threshold t.
    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &[u8],
        n: u8,
        t: u8,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}

/// Shamir's Secret Sharing over GF(257).
///
/// `reconstruct` applies the policy held by the scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shamir257 {
    pub policy: crate::config::ReconstructionPolicy,
}

impl Shamir257 {
    pub fn new(policy: crate::config::ReconstructionPolicy) -> Self {
        Self { policy }
    }
}

impl SecretSharingScheme for Shamir257 {
    type Share = share::Share;
    type Secret = Vec<u8>;
    type Error = SharingError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &[u8],
        n: u8,
        t: u8,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error> {
        quorum::split_secret(secret, n, t, rng)
    }

    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error> {
        reconstruct::reconstruct_secret(shares, &self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReconstructionPolicy;
    use crate::entropy::os::OsSource;

    #[test]
    fn test_scheme_trait_round_trip() {
        let scheme = Shamir257::default();
        let mut rng = OsSource::new();
        let shares = scheme.split(b"trait object", 4, 2, &mut rng).unwrap();
        assert_eq!(scheme.reconstruct(&shares[2..]).unwrap(), b"trait object");
    }

    #[test]
    fn test_scheme_policy_is_applied() {
        let mut rng = OsSource::new();
        let shares = Shamir257::default().split(b"x", 4, 3, &mut rng).unwrap();

        let strict = Shamir257::default();
        assert_eq!(
            strict.reconstruct(&shares[..2]),
            Err(SharingError::InvalidShareSet(ShareSetFault::InsufficientShares))
        );

        // Two points of a quadratic are joined without complaint; the result is just wrong.
        let lenient = Shamir257::new(ReconstructionPolicy::lenient());
        assert!(matches!(
            lenient.reconstruct(&shares[..2]),
            Ok(_) | Err(SharingError::InvalidShareSet(ShareSetFault::ValueOutOfRange))
        ));
    }

    #[test]
    fn test_error_conversions() {
        assert_eq!(
            SharingError::from(FieldError::DivisionByZero),
            SharingError::InvalidShareSet(ShareSetFault::ZeroDenominator)
        );
        assert_eq!(SharingError::from(EntropyError::Exhausted), SharingError::RngFailure);
    }

    #[test]
    fn test_display() {
        let msg = alloc::format!("{}", SharingError::MalformedShareLine { line: 3 });
        assert_eq!(msg, "Malformed share on line 3");
        let msg = alloc::format!("{}", SharingError::InvalidShareSet(ShareSetFault::LengthMismatch));
        assert_eq!(msg, "Invalid share set: share lengths differ");
    }
}
