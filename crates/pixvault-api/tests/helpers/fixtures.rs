//! Test fixtures: image blobs with good and bad signatures.

use pixvault_core::validation::PNG_SIGNATURE;

/// Minimal valid 1x1 PNG bytes.
pub fn create_minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// PNG with its first byte flipped.
pub fn create_corrupt_png() -> Vec<u8> {
    let mut png = create_minimal_png();
    png[0] ^= 0xFF;
    png
}

/// Eight zero bytes declared as a PNG.
pub fn zeroed_signature() -> Vec<u8> {
    vec![0u8; PNG_SIGNATURE.len()]
}

/// Arbitrary bytes that are not a JPEG.
pub fn fake_jpeg() -> Vec<u8> {
    b"definitely not a jpeg".to_vec()
}

/// A blob of `len` bytes starting with the PNG signature.
pub fn png_of_len(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    data[..PNG_SIGNATURE.len()].copy_from_slice(&PNG_SIGNATURE);
    data
}
