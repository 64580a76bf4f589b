//! Share-set encoding: one share per line.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use crate::config::ReconstructionPolicy;
use crate::mpc::{share::Share, ShareSetFault, SharingError};
use super::line::{decode_share, encode_share};

/// Encodes shares as newline-terminated lines, in slice order.
pub fn encode_share_set(shares: &[Share]) -> String {
    let mut blob = String::new();
    for share in shares {
        blob.push_str(&encode_share(share));
        blob.push('\n');
    }
    blob
}

/// Decodes every non-blank line of `blob`.
///
/// Lines are split on `\n`, trailing whitespace is dropped and lines left empty are skipped.
/// Line numbers in errors are 1-based positions in `blob`.
///
/// # Returns
/// * `Ok(Vec<Share>)` in blob order.
/// * `Err(EmptyInput)` if no share lines are present.
/// * `Err(MalformedShareLine)` for the first line that fails to parse.
/// * `Err(InvalidShareSet(LengthMismatch))` if bodies differ in length.
/// * `Err(InvalidShareSet(ThresholdMismatch))` if `policy.check_header` and thresholds differ.
pub fn decode_share_set(
    blob: &str,
    policy: &ReconstructionPolicy,
) -> Result<Vec<Share>, SharingError> {
    let shares = blob
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim_end_matches([' ', '\r', '\t']).is_empty())
        .map(|(i, line)| decode_share(line, i + 1, policy))
        .collect::<Result<Vec<Share>, SharingError>>()?;

    let first = shares.first().ok_or(SharingError::EmptyInput)?;

    if shares.iter().any(|s| s.len() != first.len()) {
        log::warn!("Share-set rejected: body lengths differ");
        return Err(SharingError::InvalidShareSet(ShareSetFault::LengthMismatch));
    }

    if policy.check_header && shares.iter().any(|s| s.threshold() != first.threshold()) {
        log::warn!("Share-set rejected: thresholds differ");
        return Err(SharingError::InvalidShareSet(ShareSetFault::ThresholdMismatch));
    }

    log::debug!("Decoded {} shares of length {}", shares.len(), first.len());
    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::Fp257;
    use crate::entropy::os::OsSource;
    use crate::mpc::quorum::split_secret;
    use crate::mpc::reconstruct::join_secret;

    const REFERENCE: &str = "0103AAFEBDB7A3F114\n0203AA1F407C51B784\n0303AAD9F0B37DB8C3\n\
        0403AA29CB5B26F4D1\n0503AA11D2754D6AAE\n0603AA910400F21B5A\n0703AAA863FE1307D6\n\
        0803AA56EE6CB32E20\n0903AA9CA44CD0903A\n0A03AA79869E6A2C23\n";

    #[test]
    fn test_reference_vector_all_shares() {
        let shares = decode_share_set(REFERENCE, &ReconstructionPolicy::strict()).unwrap();
        assert_eq!(shares.len(), 10);
        assert_eq!(join_secret(&shares, 10).unwrap(), b"secret");
    }

    #[test]
    fn test_reference_vector_any_three() {
        let shares = decode_share_set(REFERENCE, &ReconstructionPolicy::strict()).unwrap();
        for a in 0..10 {
            for b in (a + 1)..10 {
                for c in (b + 1)..10 {
                    let subset = [shares[a].clone(), shares[b].clone(), shares[c].clone()];
                    assert_eq!(join_secret(&subset, 3).unwrap(), b"secret");
                }
            }
        }
    }

    #[test]
    fn test_codec_idempotent() {
        let mut rng = OsSource::new();
        let shares = split_secret(b"\x00\xFFcodec\x80", 7, 4, &mut rng).unwrap();
        let blob = encode_share_set(&shares);
        assert_eq!(blob.lines().count(), 7);
        assert!(blob.ends_with('\n'));
        assert_eq!(decode_share_set(&blob, &ReconstructionPolicy::strict()).unwrap(), shares);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let blob = "\n0103AAFEBDB7A3F114\r\n  \n\t\n0503AA11D2754D6AAE \n0A03AA79869E6A2C23";
        let shares = decode_share_set(blob, &ReconstructionPolicy::strict()).unwrap();
        let ids: Vec<u8> = shares.iter().map(|s| s.identifier()).collect();
        assert_eq!(ids, [1, 5, 10]);
        assert_eq!(join_secret(&shares, 3).unwrap(), b"secret");
    }

    #[test]
    fn test_sentinel_share_set() {
        let shares = [
            Share::new(1, 2, alloc::vec![Fp257::MAX]).unwrap(),
            Share::new(2, 2, alloc::vec![Fp257::ZERO]).unwrap(),
        ];
        let blob = encode_share_set(&shares);
        assert_eq!(blob, "0102AAG0\n0202AA00\n");
        let decoded = decode_share_set(&blob, &ReconstructionPolicy::strict()).unwrap();
        // f(x) = 255 + x
        assert_eq!(join_secret(&decoded, 2).unwrap(), [0xFF]);
    }

    #[test]
    fn test_empty_secret_share_set() {
        let blob = "0102AA\n0202AA\n";
        let shares = decode_share_set(blob, &ReconstructionPolicy::strict()).unwrap();
        assert_eq!(join_secret(&shares, 2).unwrap(), b"");
    }

    #[test]
    fn test_errors() {
        let strict = ReconstructionPolicy::strict();
        assert_eq!(decode_share_set("", &strict), Err(SharingError::EmptyInput));
        assert_eq!(decode_share_set(" \n\r\n", &strict), Err(SharingError::EmptyInput));
        assert_eq!(
            decode_share_set("0103AA00\n\n0203AA", &strict),
            Err(SharingError::InvalidShareSet(ShareSetFault::LengthMismatch))
        );
        assert_eq!(
            decode_share_set("0103AA00\nxx\n", &strict),
            Err(SharingError::MalformedShareLine { line: 2 })
        );
        assert_eq!(
            decode_share_set("0103AA00\n0204AA00", &strict),
            Err(SharingError::InvalidShareSet(ShareSetFault::ThresholdMismatch))
        );
        assert!(decode_share_set("0103AA00\n0204AA00", &ReconstructionPolicy::lenient()).is_ok());
    }
}
