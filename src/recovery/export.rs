extern crate alloc;
use alloc::string::String;
use crate::codec::encode_share_set;
use crate::config::SplitParams;
use crate::entropy::EntropySource;
use crate::mpc::{quorum::split_with_params, SharingError};

/// Splits `secret` and returns the encoded share-set, one share per line.
///
/// The secret is arbitrary binary data; nothing requires it to be UTF-8.
pub fn generate_share_strings<R: EntropySource + ?Sized>(
    secret: &[u8],
    params: SplitParams,
    rng: &mut R,
) -> Result<String, SharingError> {
    let shares = split_with_params(secret, params, rng)?;
    Ok(encode_share_set(&shares))
}
