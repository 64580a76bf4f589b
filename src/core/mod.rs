//! Field arithmetic underlying the sharing scheme.

pub mod field;

pub use field::{mod_inverse, mod_pow, FieldError, Fp257, P};
