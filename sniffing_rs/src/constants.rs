use crate::EncodingLabel;

/// Encodings tried in order when the input has no byte order mark.
pub const CANDIDATES: [EncodingLabel; 9] = [
    EncodingLabel::Utf8,
    EncodingLabel::Gbk,
    EncodingLabel::Gb2312,
    EncodingLabel::Big5,
    EncodingLabel::ShiftJis,
    EncodingLabel::EucJp,
    EncodingLabel::EucKr,
    EncodingLabel::Iso8859_1,
    EncodingLabel::Windows1252,
];

pub const BOM_UTF8: &[u8] = b"\xEF\xBB\xBF";
pub const BOM_UTF16LE: &[u8] = b"\xFF\xFE";
pub const BOM_UTF16BE: &[u8] = b"\xFE\xFF";

// CJK Unified Ideographs as far as GB2312/GBK text is concerned.
pub const CJK_FIRST: char = '\u{4E00}';
pub const CJK_LAST: char = '\u{9FA5}';
