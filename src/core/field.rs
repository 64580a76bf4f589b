//! GF(257) arithmetic module.
//!
//! This module implements arithmetic over the prime field of order 257. The field is one
//! element larger than a byte, so every byte value 0..=255 embeds directly as a field element
//! and the extra element 256 only ever appears as an intermediate or share value.
//!
//! # Design Choices
//! - **Fixed Modulus**: `P` is a compile-time constant; every share of a share-set depends on it
//!   never changing.
//! - **Normalized Representation**: `Fp257` always holds a value in `[0, P-1]`. Signed inputs are
//!   reduced with `rem_euclid`, never with the sign-preserving `%`.
//! - **Iterative Algorithms**: exponentiation by squaring and the extended Euclidean algorithm
//!   are loops, so stack depth does not depend on the input.
//!
//! # Usage
//! ```
//! use shamir257::core::field::Fp257;
//! let a = Fp257::new(200);
//! let b = Fp257::new(100);
//! assert_eq!((a + b).value(), 43);
//! assert_eq!((a * a.inv().unwrap()).value(), 1);
//! ```

use core::fmt;
use core::num::NonZeroU32;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use zeroize::DefaultIsZeroes;

/// The field modulus.
pub const P: u16 = 257;

const MODULUS: NonZeroU32 = match NonZeroU32::new(P as u32) {
    Some(m) => m,
    None => panic!("field modulus must be non-zero"),
};

/// Errors raised by field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Attempted to invert an element congruent to zero.
    DivisionByZero,
    /// A raw value was not below `P`.
    OutOfRange,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::DivisionByZero => write!(f, "Division by zero in GF(257)"),
            FieldError::OutOfRange => write!(f, "Value out of range for GF(257)"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

/// A GF(257) element.
///
/// The wrapped value is always in `[0, 256]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
#[repr(transparent)]
pub struct Fp257(u16);

impl DefaultIsZeroes for Fp257 {}

impl Fp257 {
    /// The additive identity.
    pub const ZERO: Self = Fp257(0);

    /// The multiplicative identity.
    pub const ONE: Self = Fp257(1);

    /// The element that has no byte representation.
    pub const MAX: Self = Fp257(P - 1);

    /// Creates an element, reducing `value` modulo `P`.
    #[inline(always)]
    pub const fn new(value: u16) -> Self {
        Fp257(value % P)
    }

    /// Creates an element from any signed integer, reducing into `[0, P-1]`.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Fp257(value.rem_euclid(P as i64) as u16)
    }

    /// Returns the canonical representative in `[0, 256]`.
    #[inline(always)]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the element as a byte, or `None` for 256.
    #[inline]
    pub fn to_byte(self) -> Option<u8> {
        u8::try_from(self.0).ok()
    }

    /// Raises `self` to `exponent`.
    pub fn pow(self, exponent: u32) -> Self {
        Fp257(mod_pow(self.0 as u32, exponent, MODULUS) as u16)
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Failure Modes
    /// - `self == 0`: Returns `FieldError::DivisionByZero`.
    pub fn inv(self) -> Result<Self, FieldError> {
        mod_inverse(self.0 as i64)
    }

    /// Computes `self / rhs`.
    pub fn div(self, rhs: Self) -> Result<Self, FieldError> {
        Ok(self * rhs.inv()?)
    }
}

impl From<u8> for Fp257 {
    /// Embeds a byte. Every byte value is already a canonical element.
    #[inline(always)]
    fn from(value: u8) -> Self {
        Fp257(value as u16)
    }
}

impl TryFrom<u16> for Fp257 {
    type Error = FieldError;

    /// Accepts only canonical values; unlike [`Fp257::new`] this does not reduce.
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value < P {
            Ok(Fp257(value))
        } else {
            Err(FieldError::OutOfRange)
        }
    }
}

impl From<Fp257> for u16 {
    #[inline(always)]
    fn from(element: Fp257) -> u16 {
        element.0
    }
}

impl fmt::Display for Fp257 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Fp257 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Fp257((self.0 + rhs.0) % P)
    }
}

impl AddAssign for Fp257 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp257 {
    type Output = Self;

    /// Both operands are below `P`, so adding `P` first keeps the sum non-negative.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Fp257((self.0 + P - rhs.0) % P)
    }
}

impl SubAssign for Fp257 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fp257 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Fp257::ZERO - self
    }
}

impl Mul for Fp257 {
    type Output = Self;

    /// The widest product is 256 * 256 = 65536, so the multiply is done in `u32`.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Fp257(((self.0 as u32 * rhs.0 as u32) % P as u32) as u16)
    }
}

impl MulAssign for Fp257 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Modular exponentiation by squaring.
///
/// Every intermediate product is reduced, so the widest value held is
/// `(modulus - 1)^2`, which fits in `u64`.
///
/// # Failure Modes
/// - None. `mod_pow(_, 0, _)` is 1 by convention.
pub fn mod_pow(base: u32, exponent: u32, modulus: NonZeroU32) -> u32 {
    if exponent == 0 {
        return 1;
    }

    let m = modulus.get() as u64;
    let mut result = 1u64 % m;
    let mut base = base as u64 % m;
    let mut exp = exponent;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    result as u32
}

/// Computes the inverse of `value mod P` with the extended Euclidean algorithm.
///
/// `value` may be negative or larger than `P`; it is reduced first.
///
/// # Failure Modes
/// - `value ≡ 0 (mod P)`: Returns `FieldError::DivisionByZero`.
pub fn mod_inverse(value: i64) -> Result<Fp257, FieldError> {
    let k = value.rem_euclid(P as i64);
    if k == 0 {
        return Err(FieldError::DivisionByZero);
    }

    // Invariant: old_r = old_s * k (mod P), r = s * k (mod P).
    let (mut old_r, mut r) = (k, P as i64);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    // P is prime and k is non-zero, so gcd(k, P) = 1.
    debug_assert_eq!(old_r, 1);
    Ok(Fp257::from_i64(old_s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modulus(m: u32) -> NonZeroU32 {
        NonZeroU32::new(m).unwrap()
    }

    #[test]
    fn test_add_sub_wrap() {
        assert_eq!(Fp257::new(256) + Fp257::new(1), Fp257::ZERO);
        assert_eq!(Fp257::new(3) - Fp257::new(5), Fp257::new(255));
        assert_eq!(-Fp257::ONE, Fp257::MAX);
        assert_eq!(-Fp257::ZERO, Fp257::ZERO);
    }

    #[test]
    fn test_mul() {
        assert_eq!(Fp257::new(256) * Fp257::new(256), Fp257::ONE);
        assert_eq!(Fp257::new(16) * Fp257::new(16), Fp257::new(256));
        assert_eq!(Fp257::new(2) * Fp257::new(200), Fp257::new(143));
    }

    #[test]
    fn test_from_i64_normalizes_negative() {
        assert_eq!(Fp257::from_i64(-1), Fp257::MAX);
        assert_eq!(Fp257::from_i64(-257), Fp257::ZERO);
        assert_eq!(Fp257::from_i64(-258), Fp257::MAX);
        assert_eq!(Fp257::from_i64(514 + 7), Fp257::new(7));
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, modulus(1000)), 24);
        assert_eq!(mod_pow(3, 0, modulus(257)), 1);
        assert_eq!(mod_pow(0, 5, modulus(257)), 0);
        assert_eq!(mod_pow(5, 3, modulus(1)), 0);
        // Fermat: a^(p-1) = 1 for a != 0.
        for a in 1..257 {
            assert_eq!(mod_pow(a, 256, modulus(257)), 1);
        }
    }

    #[test]
    fn test_mod_pow_large_operands() {
        let m = modulus(u32::MAX);
        assert_eq!(mod_pow(u32::MAX - 1, 2, m), 1);
    }

    #[test]
    fn test_mod_inverse_exhaustive() {
        for k in 1..257i64 {
            let inv = mod_inverse(k).unwrap();
            assert_eq!(Fp257::from_i64(k) * inv, Fp257::ONE, "k = {}", k);
            assert_eq!(mod_inverse(inv.value() as i64).unwrap(), Fp257::from_i64(k));
        }
    }

    #[test]
    fn test_mod_inverse_negative_and_zero() {
        assert_eq!(mod_inverse(-1).unwrap(), Fp257::MAX);
        assert_eq!(mod_inverse(-2).unwrap() * Fp257::from_i64(-2), Fp257::ONE);
        assert_eq!(mod_inverse(0), Err(FieldError::DivisionByZero));
        assert_eq!(mod_inverse(257), Err(FieldError::DivisionByZero));
        assert_eq!(mod_inverse(-514), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_pow_matches_repeated_mul() {
        let a = Fp257::new(3);
        let mut acc = Fp257::ONE;
        for e in 0..20 {
            assert_eq!(a.pow(e), acc);
            acc *= a;
        }
    }

    #[test]
    fn test_div() {
        let a = Fp257::new(100);
        let b = Fp257::new(7);
        assert_eq!(a.div(b).unwrap() * b, a);
        assert_eq!(a.div(Fp257::ZERO), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_try_from_is_strict() {
        assert_eq!(Fp257::try_from(256u16), Ok(Fp257::MAX));
        assert_eq!(Fp257::try_from(257u16), Err(FieldError::OutOfRange));
        assert_eq!(u16::from(Fp257::new(300)), 43);
    }

    #[test]
    fn test_to_byte() {
        assert_eq!(Fp257::new(255).to_byte(), Some(255));
        assert_eq!(Fp257::MAX.to_byte(), None);
    }
}
