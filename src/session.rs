//! State of one loaded file, from the guess to the converted texts.

use crate::error;

use sniffing_rs::{DecodeError, EncodingLabel};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path;

const EXTENSION: &str = ".txt";
const OUTPUT_SUFFIX: &str = "_utf8.txt";

/// Rules a file has to pass before it is loaded.
#[derive(Debug, Clone, Copy)]
pub struct Acceptance {
    pub max_size: u64,
}

impl Acceptance {
    pub fn check(self: &Self, path: &path::Path, size: u64) -> Result<(), error::Error> {
        if !has_txt_extension(path) {
            return Err(error::Error::Rejected{path: path.into(), reason: "not a .txt file".into()});
        }
        if size > self.max_size {
            return Err(error::Error::Rejected{path: path.into(), reason: format!("larger than {} bytes", self.max_size)});
        }
        return Ok(());
    }
}

pub fn has_txt_extension(path: &path::Path) -> bool {
    return path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(EXTENSION))
        .unwrap_or(false);
}

/// A loaded file.
///
/// The encoding is guessed once on creation and is used as the selected encoding
/// until [`Session::select`] changes it.
#[derive(Debug)]
pub struct Session {
    name: String,
    bytes: Vec<u8>,
    detected: EncodingLabel,
    selected: EncodingLabel,
    original_text: Option<String>,
    converted_text: Option<String>,
}

/// The head of a decoded file with some information on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub text: String,
    pub num_chars: usize,
    pub size: usize,
    pub label: EncodingLabel,
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "size: {} | chars: {} | encoding: {}", format_size(self.size as u64), self.num_chars, self.label)?;
        write!(f, "{}", self.text)
    }
}

impl Session {
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Self {
        let detected = sniffing_rs::detect(&bytes);
        return Session {
            name: name.into(),
            bytes,
            detected,
            selected: detected,
            original_text: None,
            converted_text: None,
        };
    }

    /// Reads a file that passes `acceptance` and guesses its encoding.
    pub fn load(path: &path::Path, acceptance: &Acceptance) -> Result<Self, error::Error> {
        let metadata = fs::metadata(path)
            .map_err(|e| map_err(e, path, "Error reading the path"))?;
        acceptance.check(path, metadata.len())?;
        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        fs::File::open(path)
            .map_err(|e| map_err(e, path, "Error opening the file"))?
            .read_to_end(&mut bytes)
            .map_err(|e| map_err(e, path, "Error reading the file"))?;
        let name = path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        return Ok(Session::from_bytes(&name, bytes));
    }

    pub fn bytes(self: &Self) -> &[u8] {
        return &self.bytes;
    }

    pub fn detected(self: &Self) -> EncodingLabel {
        return self.detected;
    }

    pub fn selected(self: &Self) -> EncodingLabel {
        return self.selected;
    }

    pub fn original_text(self: &Self) -> Option<&str> {
        return self.original_text.as_deref();
    }

    pub fn converted_text(self: &Self) -> Option<&str> {
        return self.converted_text.as_deref();
    }

    /// Changes the selected encoding and decodes the bytes again with it.
    /// The selection is kept even if the bytes are invalid in the new encoding.
    pub fn select(self: &mut Self, label: EncodingLabel) -> Result<&str, DecodeError> {
        self.selected = label;
        self.converted_text = None;
        let text = sniffing_rs::decode(&self.bytes, label)?;
        return Ok(self.original_text.insert(text).as_str());
    }

    /// Decodes the bytes with the selected encoding and returns the first `max_chars` characters.
    pub fn preview(self: &mut Self, max_chars: usize) -> Result<Preview, DecodeError> {
        let label = self.selected;
        let text = sniffing_rs::decode(&self.bytes, label)?;
        let preview = Preview {
            text: text.chars().take(max_chars).collect(),
            num_chars: text.chars().count(),
            size: self.bytes.len(),
            label,
        };
        self.original_text = Some(text);
        return Ok(preview);
    }

    /// Decodes the bytes with the selected encoding and returns them encoded in UTF-8.
    pub fn convert(self: &mut Self) -> Result<&[u8], DecodeError> {
        let text = sniffing_rs::decode(&self.bytes, self.selected)?;
        let utf8 = text.clone().into_bytes();
        let converted = sniffing_rs::decode(&utf8, EncodingLabel::Utf8)?;
        self.original_text = Some(text);
        return Ok(self.converted_text.insert(converted).as_bytes());
    }

    /// The file name for the converted texts, `<stem>_utf8.txt`.
    pub fn output_name(self: &Self) -> String {
        return output_name(&self.name);
    }
}

pub fn output_name(name: &str) -> String {
    let stem = if name.to_ascii_lowercase().ends_with(EXTENSION) {
        &name[..name.len() - EXTENSION.len()]
    } else {
        name
    };
    return String::new() + stem + OUTPUT_SUFFIX;
}

/// Formats a byte count with binary units, e.g. `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".into();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    return format!("{} {}", trimmed, UNITS[unit]);
}

fn map_err(e: std::io::Error, path: &path::Path, msg: &str) -> error::Error {
    return error::Error::Io { source: e, path: path.into(), message: msg.into()};
}
