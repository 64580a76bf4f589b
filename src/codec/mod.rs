//! Textual share encoding.
//!
//! A share travels as one line of upper-case hex:
//!
//! ```text
//! <id:2 hex><threshold:2 hex>AA<value:2 hex | G0>*
//! ```
//!
//! Field values 0..=255 are written as two hex digits. The value 256 cannot be, so it is
//! written as the sentinel `G0`, which is deliberately not valid hex. The `AA` tag after
//! the threshold carries no information; it keeps lines interchangeable with older tools
//! that emit it.
//!
//! A share-set is its lines joined with `\n`, with a final newline.

pub mod blob;
pub mod line;

pub use blob::{decode_share_set, encode_share_set};
pub use line::{decode_share, encode_share};

/// Characters before the first body unit: id, threshold, tag.
pub const HEADER_LEN: usize = 6;

/// Fixed header suffix.
pub const HEADER_TAG: &str = "AA";

/// Encoding of the field value 256.
pub const SENTINEL: &str = "G0";

/// Characters per secret byte position.
pub const UNIT_LEN: usize = 2;
