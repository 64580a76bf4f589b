//! Single share line encoding and decoding.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use crate::config::ReconstructionPolicy;
use crate::core::field::Fp257;
use crate::mpc::{share::Share, SharingError};
use super::{HEADER_LEN, HEADER_TAG, SENTINEL, UNIT_LEN};

/// Whitespace stripped from the end of every line before parsing.
const TRAILING_WS: [char; 4] = [' ', '\r', '\n', '\t'];

/// Encodes one share as a line without a trailing newline.
pub fn encode_share(share: &Share) -> String {
    let mut line = String::with_capacity(HEADER_LEN + UNIT_LEN * share.len());
    line.push_str(&hex::encode_upper([share.identifier(), share.threshold()]));
    line.push_str(HEADER_TAG);

    for value in share.values() {
        match value.to_byte() {
            Some(byte) => line.push_str(&hex::encode_upper([byte])),
            None => line.push_str(SENTINEL),
        }
    }
    line
}

/// Decodes one share line.
///
/// Trailing spaces, tabs, CR and LF are ignored. `line_no` is only used in the error.
///
/// # Failure Modes
/// - Shorter than the header, odd body length, non-hex id or threshold, id or threshold
///   of zero, or a body unit that is neither hex nor `G0`: `MalformedShareLine`.
/// - `policy.check_header` and the tag is not `AA`: `MalformedShareLine`.
pub fn decode_share(
    line: &str,
    line_no: usize,
    policy: &ReconstructionPolicy,
) -> Result<Share, SharingError> {
    let malformed = |reason: &str| {
        log::warn!("Share line {} rejected: {}", line_no, reason);
        SharingError::MalformedShareLine { line: line_no }
    };

    let bytes = line.trim_end_matches(TRAILING_WS).as_bytes();
    if bytes.len() < HEADER_LEN {
        return Err(malformed("shorter than header"));
    }

    let identifier = decode_hex_byte(&bytes[0..2]).ok_or_else(|| malformed("bad identifier"))?;
    let threshold = decode_hex_byte(&bytes[2..4]).ok_or_else(|| malformed("bad threshold"))?;
    if policy.check_header && &bytes[4..HEADER_LEN] != HEADER_TAG.as_bytes() {
        return Err(malformed("bad header tag"));
    }

    let body = &bytes[HEADER_LEN..];
    if body.len() % UNIT_LEN != 0 {
        return Err(malformed("odd body length"));
    }

    let values = body
        .chunks_exact(UNIT_LEN)
        .map(|unit| {
            if unit == SENTINEL.as_bytes() {
                Some(Fp257::MAX)
            } else {
                decode_hex_byte(unit).map(Fp257::from)
            }
        })
        .collect::<Option<Vec<Fp257>>>()
        .ok_or_else(|| malformed("bad body unit"))?;

    Share::new(identifier, threshold, values).map_err(|_| malformed("zero identifier or threshold"))
}

fn decode_hex_byte(pair: &[u8]) -> Option<u8> {
    let mut out = [0u8; 1];
    hex::decode_to_slice(pair, &mut out).ok()?;
    Some(out[0])
}
