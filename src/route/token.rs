//! Naming token extraction.

/// Token used when a file name has no letters at all.
pub const UNDEFINED_TOKEN: &str = "undefined";

/// Extract the naming token from a sample file name.
///
/// The token is the first maximal run of ASCII letters in the file stem.
/// Digits, underscores, punctuation and non-ASCII characters all end a run.
/// The extension is never searched, so `123.wav` has no token.
pub fn extract_token(file_name: &str) -> &str {
    let stem = file_stem(file_name);

    let Some(start) = stem.find(|c: char| c.is_ascii_alphabetic()) else {
        return UNDEFINED_TOKEN;
    };

    let rest = &stem[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());

    &rest[..end]
}

/// File name without its last extension. Dotfiles keep their full name.
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(dot) => &file_name[..dot],
    }
}
