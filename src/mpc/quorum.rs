//! Quorum logic for Shamir's Secret Sharing over GF(257).
//!
//! This module implements the threshold checks and polynomial generation required
//! to split secrets into shares.
//!
//! # Security
//! - **Fresh Polynomials**: Every byte position gets its own coefficient draw.
//! - **Zeroization**: Polynomial coefficients are zeroized after use.
//! - **Validation**: Checks threshold parameters ($1 \le t \le n \le 255$).

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::config::SplitParams;
use crate::core::field::Fp257;
use crate::entropy::{CoefficientSource, EntropySource};
use crate::mpc::{polynomial::evaluate_polynomial, share::Share, SharingError};

/// Splits one field element into `n` points on a random degree-`(t-1)` polynomial.
///
/// # Arguments
/// * `value` - The hidden constant term.
/// * `n` - Number of points; x-coordinates are `1..=n`.
/// * `t` - Threshold; the polynomial has `t` coefficients.
/// * `coefficients` - Exactly `t - 1` random coefficients for degrees `1..t`.
///
/// # Returns
/// * `Ok(Vec<(x, y)>)` with `n` points.
/// * `Err(SharingError::InvalidParameters)` if the parameters or coefficient count are wrong.
pub fn split_byte(
    value: Fp257,
    n: u8,
    t: u8,
    coefficients: &[Fp257],
) -> Result<Vec<(Fp257, Fp257)>, SharingError> {
    let params = SplitParams::new(n, t)?;
    if coefficients.len() != params.threshold() as usize - 1 {
        return Err(SharingError::InvalidParameters);
    }

    let mut coeffs: Zeroizing<Vec<Fp257>> = Zeroizing::new(Vec::with_capacity(t as usize));
    coeffs.push(value);
    coeffs.extend_from_slice(coefficients);

    Ok((1..=params.shares())
        .map(|i| {
            let x = Fp257::from(i);
            (x, evaluate_polynomial(&coeffs, x))
        })
        .collect())
}

/// Splits a secret into `n` shares, requiring `t` shares to reconstruct.
///
/// # Arguments
/// * `secret` - The secret data to split. May be empty.
/// * `n` - The total number of shares to generate.
/// * `t` - The threshold number of shares required for reconstruction.
/// * `rng` - A mutable reference to an entropy source.
///
/// # Returns
/// * `Ok(Vec<Share>)` containing `n` shares with identifiers `1..=n`.
/// * `Err(SharingError)` on failure (invalid params, rng failure).
pub fn split_secret<R: EntropySource + ?Sized>(
    secret: &[u8],
    n: u8,
    t: u8,
    rng: &mut R,
) -> Result<Vec<Share>, SharingError> {
    split_with_params(secret, SplitParams::new(n, t)?, rng)
}

/// Same as [`split_secret`] with pre-validated parameters.
pub fn split_with_params<R: EntropySource + ?Sized>(
    secret: &[u8],
    params: SplitParams,
    rng: &mut R,
) -> Result<Vec<Share>, SharingError> {
    let n = params.shares();
    let t = params.threshold();
    log::debug!(
        "Splitting {} byte secret into {} shares (threshold {}) using {}",
        secret.len(),
        n,
        t,
        rng.name()
    );

    // share_values[i] holds the values for the share with identifier i + 1.
    let mut share_values: Vec<Vec<Fp257>> = (0..n)
        .map(|_| Vec::with_capacity(secret.len()))
        .collect();

    // coeffs[0] is the secret byte, coeffs[1..] are redrawn for every position.
    let mut coeffs = Zeroizing::new(alloc::vec![Fp257::ZERO; t as usize]);
    let mut sampler = CoefficientSource::new(rng);

    for &byte in secret {
        coeffs[0] = Fp257::from(byte);
        sampler.fill(&mut coeffs[1..])?;

        for (i, values) in share_values.iter_mut().enumerate() {
            let x = Fp257::from((i + 1) as u8);
            values.push(evaluate_polynomial(&coeffs, x));
        }
    }

    share_values
        .into_iter()
        .enumerate()
        .map(|(i, values)| Share::new((i + 1) as u8, t, values))
        .collect()
}
