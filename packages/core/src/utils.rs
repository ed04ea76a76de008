// ABOUTME: Shared utility functions for PartnerDesk
// ABOUTME: ID generation and optional-text helpers

use std::collections::HashSet;

const ID_LENGTH: usize = 8;

/// Generate an 8-character alphanumeric identifier
pub fn generate_id() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate an identifier that does not collide with any of `existing`
pub fn generate_unique_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let taken: HashSet<&str> = existing.into_iter().collect();
    loop {
        let id = generate_id();
        if !taken.contains(id.as_str()) {
            return id;
        }
    }
}

/// Returns the text when it is present and not blank
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Trims optional form text, mapping blank input to `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
