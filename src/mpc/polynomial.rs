//! Polynomial operations for secret sharing.
//!
//! Shared by quorum and aggregate so both evaluate polynomials identically.

use crate::core::field::Fp257;

/// Evaluates a polynomial at a given point x using Horner's method.
///
/// f(x) = c[0] + c[1]*x + ... + c[t-1]*x^(t-1)
///
/// # Arguments
/// * `coeffs` - Coefficients [c0, c1, ..., ct-1]
/// * `x` - The point to evaluate at
///
/// # Returns
/// * The value f(x), or 0 for an empty coefficient list
#[inline]
pub(crate) fn evaluate_polynomial(coeffs: &[Fp257], x: Fp257) -> Fp257 {
    coeffs
        .iter()
        .rev()
        .fold(Fp257::ZERO, |acc, &coeff| acc * x + coeff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_eval() {
        // f(x) = 1 + 2x
        let coeffs = [Fp257::new(1), Fp257::new(2)];
        assert_eq!(evaluate_polynomial(&coeffs, Fp257::new(1)), Fp257::new(3));
        assert_eq!(evaluate_polynomial(&coeffs, Fp257::new(3)), Fp257::new(7));
        // f(128) = 257 = 0
        assert_eq!(evaluate_polynomial(&coeffs, Fp257::new(128)), Fp257::ZERO);
    }

    #[test]
    fn test_matches_power_sum() {
        // f(x) = 5 + 7x + 11x^2 + 200x^3
        let coeffs = [Fp257::new(5), Fp257::new(7), Fp257::new(11), Fp257::new(200)];
        for xv in 1..=255u16 {
            let x = Fp257::new(xv);
            let expected = coeffs
                .iter()
                .enumerate()
                .fold(Fp257::ZERO, |acc, (i, &c)| acc + c * x.pow(i as u32));
            assert_eq!(evaluate_polynomial(&coeffs, x), expected);
        }
    }

    #[test]
    fn test_constant_and_empty() {
        assert_eq!(evaluate_polynomial(&[Fp257::new(42)], Fp257::new(9)), Fp257::new(42));
        assert_eq!(evaluate_polynomial(&[], Fp257::new(9)), Fp257::ZERO);
    }
}
