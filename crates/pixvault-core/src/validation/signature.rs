//! Binary signature sniffing
//!
//! The declared content type is only a claim. For types with a known magic
//! number the leading bytes must match it. Only PNG has an entry; every other
//! `image/*` type passes unconditionally.

use crate::models::ValidationVerdict;

use super::mime::normalize_mime_type;

/// PNG magic number at offset 0.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Number of leading bytes the sniffer needs to see.
pub const SIGNATURE_SNIFF_LEN: usize = PNG_SIGNATURE.len();

pub const INVALID_PNG_SIGNATURE: &str = "Invalid PNG signature";

/// Judge `head` (the first bytes of the file, possibly fewer than
/// `SIGNATURE_SNIFF_LEN` for short files) against the declared type.
pub fn sniff(declared_type: &str, head: &[u8]) -> ValidationVerdict {
    match normalize_mime_type(declared_type).as_str() {
        "image/png" => {
            if head.len() >= PNG_SIGNATURE.len() && head[..PNG_SIGNATURE.len()] == PNG_SIGNATURE {
                ValidationVerdict::accepted()
            } else {
                ValidationVerdict::rejected(INVALID_PNG_SIGNATURE)
            }
        }
        _ => ValidationVerdict::accepted(),
    }
}
