use encoding_rs as enc;

use crate::EncodingLabel;

/// Returned when the input is malformed in the requested encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the input is not valid {label}")]
pub struct DecodeError {
    pub label: EncodingLabel,
}

/// Decodes `src` as `label` without replacing malformed sequences.
///
/// A byte order mark of the requested encoding at the head of `src` is removed.
/// A byte order mark of another encoding is decoded as ordinary data.
///
/// # Example
/// ```
/// use sniffing_rs::EncodingLabel;
///
/// let src = b"\x83\x6E\x83\x8D\x81\x5B"; // ハロー in Shift_JIS
/// assert_eq!("ハロー", sniffing_rs::decode(src, EncodingLabel::ShiftJis).unwrap());
/// assert!(sniffing_rs::decode(src, EncodingLabel::Utf8).is_err());
/// ```
pub fn decode(src: &[u8], label: EncodingLabel) -> Result<String, DecodeError> {
    let encoding = label.encoding();
    let body = match enc::Encoding::for_bom(src) {
        Some((found, bom_length)) if found == encoding => &src[bom_length..],
        _ => src,
    };
    return encoding.decode_without_bom_handling_and_without_replacement(body)
        .map(|decoded| decoded.into_owned())
        .ok_or(DecodeError { label });
}
