//! Operations on shares.
//!
//! This module implements operations on existing shares, such as proactive refresh
//! and homomorphic addition.
//!
//! # Features
//! - **Proactive Refresh**: Updates shares without changing the secret.
//! - **Homomorphic Addition**: Adds two secrets by adding their shares.
//!
//! # Security
//! - **Zeroization**: Temporary polynomials are zeroized.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::core::field::Fp257;
use crate::entropy::{CoefficientSource, EntropySource};
use crate::mpc::{polynomial::evaluate_polynomial, share::Share, ShareSetFault, SharingError};

/// Refreshes a set of shares by adding a random polynomial with zero constant term.
///
/// This changes the shares but keeps the underlying secret constant. Shares from before
/// and after a refresh no longer combine.
///
/// The degree of the update is taken from the threshold the shares declare, so it
/// always matches the dealer's polynomial.
///
/// # Arguments
/// * `shares` - Mutable slice of shares to refresh. Normally the whole share-set.
/// * `rng` - Entropy source.
///
/// # Returns
/// * `Ok(())` on success.
/// * `Err(SharingError)` on failure. The shares are untouched unless this returns `Ok`.
///
/// # Failure Modes
/// - `EmptyInput` for no shares.
/// - `InvalidShareSet` for unequal lengths, differing thresholds, or a repeated identifier.
/// - `RngFailure` if the source runs dry.
pub fn refresh_shares<R: EntropySource + ?Sized>(
    shares: &mut [Share],
    rng: &mut R,
) -> Result<(), SharingError> {
    if shares.is_empty() {
        return Err(SharingError::EmptyInput);
    }

    let share_len = shares[0].len();
    let t = shares[0].threshold;
    if shares.iter().any(|s| s.len() != share_len) {
        return Err(SharingError::InvalidShareSet(ShareSetFault::LengthMismatch));
    }
    if shares.iter().any(|s| s.threshold != t) {
        log::warn!("Refusing to refresh shares with differing thresholds");
        return Err(SharingError::InvalidShareSet(ShareSetFault::ThresholdMismatch));
    }

    let mut seen = [false; 256];
    for share in shares.iter() {
        if seen[share.identifier as usize] {
            log::warn!("Refusing to refresh: identifier {} appears twice", share.identifier);
            return Err(SharingError::InvalidShareSet(ShareSetFault::DuplicateIdentifier));
        }
        seen[share.identifier as usize] = true;
    }

    // Draw every update before touching the shares so an RNG failure leaves them intact.
    // updates[i][p] is g_p(x_i).
    let mut updates: Vec<Zeroizing<Vec<Fp257>>> = shares
        .iter()
        .map(|_| Zeroizing::new(Vec::with_capacity(share_len)))
        .collect();

    // Coeffs: c0 = 0, c1..c(t-1) random. Share::new guarantees t >= 1.
    let mut coeffs = Zeroizing::new(alloc::vec![Fp257::ZERO; t as usize]);
    let mut sampler = CoefficientSource::new(rng);

    for _ in 0..share_len {
        sampler.fill(&mut coeffs[1..])?;
        for (share, update) in shares.iter().zip(updates.iter_mut()) {
            update.push(evaluate_polynomial(&coeffs, share.x()));
        }
    }

    for (share, update) in shares.iter_mut().zip(updates.iter()) {
        for (value, delta) in share.values.iter_mut().zip(update.iter()) {
            *value += *delta;
        }
    }

    log::debug!("Refreshed {} shares of length {}", shares.len(), share_len);
    Ok(())
}

/// Adds two shares homomorphically.
///
/// If share1 is a share of S1 and share2 is a share of S2 (with same identifier),
/// the result is a share of S1 + S2, computed position-wise in GF(257).
pub fn add_shares(share1: &Share, share2: &Share) -> Result<Share, SharingError> {
    if share1.identifier != share2.identifier {
        return Err(SharingError::InvalidParameters);
    }
    if share1.len() != share2.len() {
        return Err(SharingError::InvalidShareSet(ShareSetFault::LengthMismatch));
    }

    let values = share1
        .values()
        .iter()
        .zip(share2.values().iter())
        .map(|(&a, &b)| a + b)
        .collect();

    Share::new(share1.identifier, share1.threshold.max(share2.threshold), values)
}
