//! Secret reconstruction from shares.
//!
//! This module implements Lagrange interpolation over GF(257) to reconstruct
//! the original secret from a threshold number of shares.
//!
//! # Security
//! - **Validation**: Checks for duplicate identifiers and length mismatches before any
//!   arithmetic. Whether the declared thresholds are checked is up to the
//!   [`ReconstructionPolicy`].
//! - **All Or Nothing**: Either every byte position is recovered or an error is returned.
//!
//! Interpolating with fewer points than the dealer's threshold still produces a value;
//! nothing in the arithmetic can tell it is wrong.

extern crate alloc;
use alloc::vec::Vec;
use crate::config::ReconstructionPolicy;
use crate::core::field::Fp257;
use crate::mpc::{share::Share, ShareSetFault, SharingError};

/// Computes the Lagrange basis values at x = 0 for the given x-coordinates.
///
/// lambda_i = prod_{j != i} (-x_j) / (x_i - x_j)
///
/// # Returns
/// * `Ok(Vec<Fp257>)` with one weight per coordinate.
/// * `Err(InvalidShareSet(ZeroDenominator))` if two coordinates are equal.
pub fn lagrange_weights(xs: &[Fp257]) -> Result<Vec<Fp257>, SharingError> {
    let mut weights = Vec::with_capacity(xs.len());
    for (i, &xi) in xs.iter().enumerate() {
        let mut numerator = Fp257::ONE;
        let mut denominator = Fp257::ONE;

        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= -xj;
            denominator *= xi - xj;
        }

        weights.push(numerator.div(denominator)?);
    }
    Ok(weights)
}

/// Recovers the constant term of the polynomial through `pairs`.
///
/// # Arguments
/// * `pairs` - `(x, y)` points with pairwise distinct x.
///
/// # Returns
/// * `Ok(Fp257)` - The value at x = 0, in `[0, 256]`.
/// * `Err(SharingError)` - `EmptyInput` for no points, `InvalidShareSet` for repeated x.
pub fn join(pairs: &[(Fp257, Fp257)]) -> Result<Fp257, SharingError> {
    if pairs.is_empty() {
        return Err(SharingError::EmptyInput);
    }

    let xs: Vec<Fp257> = pairs.iter().map(|&(x, _)| x).collect();
    let weights = lagrange_weights(&xs)?;

    Ok(pairs
        .iter()
        .zip(weights.iter())
        .fold(Fp257::ZERO, |acc, (&(_, y), &w)| acc + y * w))
}

/// Reconstructs the secret from the first `count` shares.
///
/// Uses Lagrange interpolation at x=0 to recover the polynomial intercept at every
/// byte position. The declared thresholds are not consulted.
///
/// # Returns
/// * `Ok(Vec<u8>)` - The reconstructed secret.
/// * `Err(SharingError)` - `EmptyInput` if nothing is joined, `InvalidParameters` if `count`
///   exceeds the slice, `InvalidShareSet` for duplicates, unequal lengths, or a position that
///   interpolates to 256.
pub fn join_secret(shares: &[Share], count: usize) -> Result<Vec<u8>, SharingError> {
    if shares.is_empty() || count == 0 {
        return Err(SharingError::EmptyInput);
    }
    if count > shares.len() {
        return Err(SharingError::InvalidParameters);
    }

    let shares = &shares[..count];
    let share_len = shares[0].len();

    // 1. Validation
    if shares.iter().any(|s| s.len() != share_len) {
        log::warn!("Refusing to join shares of unequal length");
        return Err(SharingError::InvalidShareSet(ShareSetFault::LengthMismatch));
    }

    let mut seen = [false; 256];
    for share in shares {
        if seen[share.identifier as usize] {
            log::warn!("Refusing to join: identifier {} appears twice", share.identifier);
            return Err(SharingError::InvalidShareSet(ShareSetFault::DuplicateIdentifier));
        }
        seen[share.identifier as usize] = true;
    }

    // 2. The x-coordinates are the same at every position, so the weights are computed once.
    let xs: Vec<Fp257> = shares.iter().map(Share::x).collect();
    let lambdas = lagrange_weights(&xs)?;

    // 3. Reconstruct secret byte-by-byte
    let mut secret = Vec::with_capacity(share_len);
    for p in 0..share_len {
        let value = shares
            .iter()
            .zip(lambdas.iter())
            .fold(Fp257::ZERO, |acc, (share, &lambda)| acc + share.values[p] * lambda);

        match value.to_byte() {
            Some(byte) => secret.push(byte),
            None => {
                log::warn!("Position {} interpolated to 256; shares are inconsistent", p);
                return Err(SharingError::InvalidShareSet(ShareSetFault::ValueOutOfRange));
            }
        }
    }

    log::debug!("Joined {} shares into {} byte secret", count, secret.len());
    Ok(secret)
}

/// Reconstructs the secret from every supplied share after applying `policy`.
///
/// With [`ReconstructionPolicy::strict`] all shares must declare the same threshold and at
/// least that many must be present. With [`ReconstructionPolicy::lenient`] this is
/// `join_secret(shares, shares.len())`.
pub fn reconstruct_secret(
    shares: &[Share],
    policy: &ReconstructionPolicy,
) -> Result<Vec<u8>, SharingError> {
    if shares.is_empty() {
        return Err(SharingError::EmptyInput);
    }

    if policy.check_header {
        let threshold = shares[0].threshold;
        if shares.iter().any(|s| s.threshold != threshold) {
            log::warn!("Refusing to join shares with differing thresholds");
            return Err(SharingError::InvalidShareSet(ShareSetFault::ThresholdMismatch));
        }
    }

    if policy.enforce_threshold {
        let required = shares.iter().map(|s| s.threshold).max().unwrap_or(1);
        if shares.len() < required as usize {
            log::warn!("Only {} of {} required shares supplied", shares.len(), required);
            return Err(SharingError::InvalidShareSet(ShareSetFault::InsufficientShares));
        }
    }

    join_secret(shares, shares.len())
}
