use crate::constants;
use crate::decoder;
use crate::validator;
use crate::EncodingLabel;

/// Guesses the encoding of `src`.
///
/// A byte order mark decides the encoding outright. Without one, the encodings in
/// [`CANDIDATES`](crate::CANDIDATES) are tried in order and the first accepted one is returned:
///  - UTF-8 is accepted if it decodes and [`is_valid_utf8`](crate::is_valid_utf8) agrees.
///  - GBK and GB2312 are accepted if the decoded text contains a CJK ideograph.
///  - The rest are accepted as soon as they decode.
///
/// UTF-8 is returned when nothing is accepted.
///
/// # Example
/// ```
/// use sniffing_rs::EncodingLabel;
///
/// assert_eq!(EncodingLabel::Utf16Le, sniffing_rs::detect(b"\xFF\xFEH\x00i\x00"));
/// assert_eq!(EncodingLabel::Utf8, sniffing_rs::detect(b"Hello"));
/// assert_eq!(EncodingLabel::Iso8859_1, sniffing_rs::detect(b"Caf\xE9"));
/// ```
pub fn detect(src: &[u8]) -> EncodingLabel {
    if let Some(label) = sniff_bom(src) {
        log::debug!("found the {} byte order mark", label);
        return label;
    }
    for candidate in constants::CANDIDATES.iter() {
        let decoded = match decoder::decode(src, *candidate) {
            Ok(decoded) => decoded,
            Err(err) => {
                log::trace!("{}", err);
                continue;
            },
        };
        if accepts(*candidate, src, &decoded) {
            log::debug!("guessed {}", candidate);
            return *candidate;
        }
        log::trace!("{} decoded but was not accepted", candidate);
    }
    log::debug!("no candidate was accepted, falling back to {}", EncodingLabel::Utf8);
    return EncodingLabel::Utf8;
}

/// Checks if `text` contains a character in the CJK Unified Ideographs range U+4E00..=U+9FA5.
pub fn has_cjk(text: &str) -> bool {
    return text.chars().any(|c| (constants::CJK_FIRST..=constants::CJK_LAST).contains(&c));
}

fn sniff_bom(src: &[u8]) -> Option<EncodingLabel> {
    if src.starts_with(constants::BOM_UTF8) {
        return Some(EncodingLabel::Utf8);
    } else if src.starts_with(constants::BOM_UTF16LE) {
        return Some(EncodingLabel::Utf16Le);
    } else if src.starts_with(constants::BOM_UTF16BE) {
        return Some(EncodingLabel::Utf16Be);
    }
    return None;
}

fn accepts(candidate: EncodingLabel, src: &[u8], decoded: &str) -> bool {
    return match candidate {
        EncodingLabel::Utf8 => validator::is_valid_utf8(src),
        EncodingLabel::Gbk | EncodingLabel::Gb2312 => has_cjk(decoded),
        _ => true,
    };
}
