/// Normalize MIME type by stripping parameters and lowercasing
/// (e.g. "Image/JPEG; charset=utf-8" -> "image/jpeg").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}

/// Whether the declared type falls under `image/*`.
pub fn is_image(content_type: &str) -> bool {
    let normalized = normalize_mime_type(content_type);
    matches!(normalized.split_once('/'), Some(("image", sub)) if !sub.is_empty())
}
