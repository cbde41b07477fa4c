use encoding_rs as enc;
use std::fmt;
use std::str;

/// Encodings the guesser can answer with.
///
/// The names are the labels a web browser accepts for its text decoder,
/// and the variant order is the order `ALL` lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingLabel {
    Utf8,
    Utf16Le,
    Utf16Be,
    Gbk,
    Gb2312,
    Big5,
    ShiftJis,
    EucJp,
    EucKr,
    Iso8859_1,
    Windows1252,
}

/// Returned when a string is none of the supported labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid encoding: {0}")]
pub struct UnknownLabel(pub String);

impl EncodingLabel {
    /// Every supported label.
    pub const ALL: [EncodingLabel; 11] = [
        EncodingLabel::Utf8,
        EncodingLabel::Utf16Le,
        EncodingLabel::Utf16Be,
        EncodingLabel::Gbk,
        EncodingLabel::Gb2312,
        EncodingLabel::Big5,
        EncodingLabel::ShiftJis,
        EncodingLabel::EucJp,
        EncodingLabel::EucKr,
        EncodingLabel::Iso8859_1,
        EncodingLabel::Windows1252,
    ];

    /// The canonical name of the label.
    pub fn as_str(self: &Self) -> &'static str {
        return match self {
            EncodingLabel::Utf8 => "utf-8",
            EncodingLabel::Utf16Le => "utf-16le",
            EncodingLabel::Utf16Be => "utf-16be",
            EncodingLabel::Gbk => "gbk",
            EncodingLabel::Gb2312 => "gb2312",
            EncodingLabel::Big5 => "big5",
            EncodingLabel::ShiftJis => "shift_jis",
            EncodingLabel::EucJp => "euc-jp",
            EncodingLabel::EucKr => "euc-kr",
            EncodingLabel::Iso8859_1 => "iso-8859-1",
            EncodingLabel::Windows1252 => "windows-1252",
        };
    }

    /// The `encoding_rs` encoding that decodes this label.
    ///
    /// Like a browser, `gb2312` is decoded as GBK and `iso-8859-1` as windows-1252.
    pub fn encoding(self: &Self) -> &'static enc::Encoding {
        return match self {
            EncodingLabel::Utf8 => enc::UTF_8,
            EncodingLabel::Utf16Le => enc::UTF_16LE,
            EncodingLabel::Utf16Be => enc::UTF_16BE,
            EncodingLabel::Gbk | EncodingLabel::Gb2312 => enc::GBK,
            EncodingLabel::Big5 => enc::BIG5,
            EncodingLabel::ShiftJis => enc::SHIFT_JIS,
            EncodingLabel::EucJp => enc::EUC_JP,
            EncodingLabel::EucKr => enc::EUC_KR,
            EncodingLabel::Iso8859_1 | EncodingLabel::Windows1252 => enc::WINDOWS_1252,
        };
    }
}

impl fmt::Display for EncodingLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for EncodingLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        return EncodingLabel::ALL.iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| UnknownLabel(s.to_owned()));
    }
}
