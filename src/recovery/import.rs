extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::codec::decode_share_set;
use crate::config::ShamirConfig;
use crate::mpc::{reconstruct::reconstruct_secret, SharingError};

/// Decodes every share line in `blob` and joins them into the secret.
///
/// All shares present are used; choosing a subset is up to the caller. The checks applied
/// come from `config.reconstruction`.
pub fn extract_secret_from_share_strings(
    blob: &str,
    config: &ShamirConfig,
) -> Result<Zeroizing<Vec<u8>>, SharingError> {
    let shares = decode_share_set(blob, &config.reconstruction)?;
    reconstruct_secret(&shares, &config.reconstruction).map(Zeroizing::new)
}
