//! Formatting of the random byte buffers that stand in for certificate serial numbers,
//! fingerprints and public keys.

/// Lowercase hex, no separators.  16 bytes produce 32 characters.
pub fn hex_lower(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Lowercase hex, one 2-character group per byte, groups joined by ':'.
pub fn hex_lower_colon_separated(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| hex::encode([*byte]))
        .collect::<Vec<_>>()
        .join(":")
}

/// Returns true iff s consists of exactly `byte_count` bytes rendered by [`hex_lower`].
pub fn is_hex_lower(s: &str, byte_count: usize) -> bool {
    s.len() == 2 * byte_count && s.bytes().all(is_lower_hex_digit)
}

/// Returns true iff s consists of exactly `byte_count` bytes rendered by
/// [`hex_lower_colon_separated`].
pub fn is_hex_lower_colon_separated(s: &str, byte_count: usize) -> bool {
    let group_v: Vec<&str> = s.split(':').collect();
    group_v.len() == byte_count
        && group_v
            .iter()
            .all(|group| group.len() == 2 && group.bytes().all(is_lower_hex_digit))
}

fn is_lower_hex_digit(b: u8) -> bool {
    b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
}
