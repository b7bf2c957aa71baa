//! Content validation
//!
//! Pure checks with no I/O: MIME normalisation for the ingress filter and
//! binary signature sniffing for the signature validator.

pub mod mime;
pub mod signature;

pub use mime::{is_image, normalize_mime_type};
pub use signature::{sniff, INVALID_PNG_SIGNATURE, PNG_SIGNATURE, SIGNATURE_SNIFF_LEN};
