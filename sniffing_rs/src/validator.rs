//! Structural UTF-8 check.

/// Checks that every byte of `src` belongs to a well-formed UTF-8 sequence.
///
/// Only the lead byte ranges and the continuation bytes are checked.
/// Overlong three and four byte forms and encoded surrogates (e.g. `ED A0 80`) pass.
///
/// # Example
/// ```
/// assert!(sniffing_rs::is_valid_utf8(b"\xE4\xB8\xAD")); // 中
/// assert!(!sniffing_rs::is_valid_utf8(b"\xC2"));
/// ```
pub fn is_valid_utf8(src: &[u8]) -> bool {
    let mut i = 0;
    while i < src.len() {
        let num_trail = match src[i] {
            0x00..=0x7F => 0,
            0xC2..=0xDF => 1,
            0xE0..=0xEF => 2,
            0xF0..=0xF4 => 3,
            _ => return false,
        };
        let end = i + 1 + num_trail;
        if end > src.len() { // truncated by the end of the input
            return false;
        }
        if !src[i + 1..end].iter().all(|b| is_trail(*b)) {
            return false;
        }
        i = end;
    }
    return true;
}

fn is_trail(b: u8) -> bool {
    return (0x80..=0xBF).contains(&b);
}
