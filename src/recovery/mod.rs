//! Secret-to-text and text-to-secret entry points.
//!
//! These are the calls a command-line front end or service makes: it hands over an
//! already materialized secret plus `n` and `t` and prints the returned blob, or hands
//! over a blob and receives the secret. Argument parsing and I/O stay with the caller.

pub mod export;
pub mod import;

pub use export::generate_share_strings;
pub use import::extract_secret_from_share_strings;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ShamirConfig, SplitParams};
    use crate::entropy::os::OsSource;

    #[test]
    fn test_secret_n10_t3_any_three_lines() {
        let mut rng = OsSource::new();
        let params = SplitParams::parse("10", "3").unwrap();
        let blob = generate_share_strings(b"secret", params, &mut rng).unwrap();
        let lines: Vec<&str> = blob.lines().collect();
        assert_eq!(lines.len(), 10);

        let config = ShamirConfig::default();
        for a in 0..10 {
            for b in (a + 1)..10 {
                for c in (b + 1)..10 {
                    let subset = [lines[a], lines[b], lines[c]].join("\n");
                    let secret = extract_secret_from_share_strings(&subset, &config).unwrap();
                    assert_eq!(secret.as_slice(), b"secret");
                }
            }
        }
    }

    #[test]
    fn test_binary_secret_round_trip() {
        let mut rng = OsSource::new();
        let secret: Vec<u8> = (0..=255u8).rev().collect();
        let params = SplitParams::new(5, 5).unwrap();
        let blob = generate_share_strings(&secret, params, &mut rng).unwrap();
        let recovered = extract_secret_from_share_strings(&blob, &ShamirConfig::default()).unwrap();
        assert_eq!(recovered.as_slice(), secret.as_slice());
    }
}
