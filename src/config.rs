//! Configuration for splitting and reconstruction.
//!
//! Defines the validated split parameters and the reconstruction policy the host
//! application (CLI, service) passes into the library.

use core::str::FromStr;
use crate::mpc::SharingError;

/// Validated `(n, t)` pair.
///
/// Invariant: `1 <= threshold <= shares <= 255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSplitParams"))]
pub struct SplitParams {
    shares: u8,
    threshold: u8,
}

impl SplitParams {
    /// Checks `1 <= t <= n`. `n <= 255` holds by type.
    pub fn new(shares: u8, threshold: u8) -> Result<Self, SharingError> {
        if threshold == 0 || threshold > shares {
            log::warn!("Rejected split parameters n={} t={}", shares, threshold);
            return Err(SharingError::InvalidParameters);
        }
        Ok(Self { shares, threshold })
    }

    /// Parses decimal `n` and `t` as typed by a user. Surrounding whitespace is ignored.
    pub fn parse(shares: &str, threshold: &str) -> Result<Self, SharingError> {
        Self::new(parse_count(shares)?, parse_count(threshold)?)
    }

    pub fn shares(&self) -> u8 {
        self.shares
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

fn parse_count(text: &str) -> Result<u8, SharingError> {
    u8::from_str(text.trim()).map_err(|_| {
        log::warn!("Share count or threshold is not a number in 0..=255");
        SharingError::InvalidParameters
    })
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSplitParams {
    shares: u8,
    threshold: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSplitParams> for SplitParams {
    type Error = SharingError;

    fn try_from(raw: RawSplitParams) -> Result<Self, Self::Error> {
        SplitParams::new(raw.shares, raw.threshold)
    }
}

/// How strictly a share-set is checked before joining.
///
/// The header's `AA` tag and threshold field are not needed by the interpolation itself,
/// so checking them is policy rather than correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReconstructionPolicy {
    /// Require the `AA` tag and identical thresholds on every decoded line.
    pub check_header: bool,
    /// Refuse to join fewer shares than their declared threshold.
    pub enforce_threshold: bool,
}

impl ReconstructionPolicy {
    /// Legacy behavior: header suffix ignored, every supplied share joined.
    pub const fn lenient() -> Self {
        Self {
            check_header: false,
            enforce_threshold: false,
        }
    }

    /// Every check enabled.
    pub const fn strict() -> Self {
        Self {
            check_header: true,
            enforce_threshold: true,
        }
    }
}

impl Default for ReconstructionPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Main configuration structure for the library.
///
/// This struct should be populated by the host application and passed
/// to the recovery functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShamirConfig {
    /// Checks applied when decoding and joining shares.
    pub reconstruction: ReconstructionPolicy,
}
