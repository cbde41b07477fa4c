//! This is an encoding guessing library for small text files.
//!
//! The guess is made in three steps.
//!  1. A byte order mark at the head of the input decides the encoding outright.
//!  2. Otherwise the encodings in [`CANDIDATES`] are tried in order with a strict decoder
//!     from [`encoding_rs`](https://github.com/hsivonen/encoding_rs),
//!     and the first one that decodes cleanly and passes its acceptance rule wins.
//!  3. If nothing is accepted, UTF-8 is returned.
//!
//! The guess never fails, but the later candidates accept almost any input,
//! so callers should let the user override it.
//!
//! # Example
//! ```
//! use sniffing_rs::EncodingLabel;
//!
//! let gbk = b"\xD6\xD0\xCE\xC4"; // 中文 in GBK
//! let label = sniffing_rs::detect(gbk);
//! assert_eq!(EncodingLabel::Gbk, label);
//! assert_eq!("中文", sniffing_rs::decode(gbk, label).unwrap());
//! ```

mod constants;
mod decoder;
mod detector;
mod label;
mod validator;

pub use constants::CANDIDATES;
pub use decoder::decode;
pub use decoder::DecodeError;
pub use detector::detect;
pub use detector::has_cjk;
pub use label::EncodingLabel;
pub use label::UnknownLabel;
pub use validator::is_valid_utf8;
