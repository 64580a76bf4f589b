//! Shamir secret sharing over GF(257) with a plain-text share format.
//!
//! A secret byte string is split into `n` shares so that any `t` of them rebuild it and
//! fewer reveal nothing. Each share is a single line of hex that can be copied, printed
//! or mailed:
//!
//! ```
//! use shamir257::config::{ShamirConfig, SplitParams};
//! use shamir257::entropy::OsSource;
//! use shamir257::recovery::{extract_secret_from_share_strings, generate_share_strings};
//!
//! let mut rng = OsSource::new();
//! let blob = generate_share_strings(b"secret", SplitParams::new(5, 3).unwrap(), &mut rng).unwrap();
//! let three: Vec<&str> = blob.lines().skip(2).collect();
//! let secret = extract_secret_from_share_strings(&three.join("\n"), &ShamirConfig::default()).unwrap();
//! assert_eq!(secret.as_slice(), b"secret");
//! ```
//!
//! Shares carry no integrity protection.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod codec;
pub mod config;
pub mod core;
pub mod entropy;
pub mod mpc;
pub mod recovery;

pub use config::{ReconstructionPolicy, ShamirConfig, SplitParams};
pub use mpc::{share::Share, ShareSetFault, SharingError};
