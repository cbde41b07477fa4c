use std::io;
use std::path;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io{source: io::Error, path: path::PathBuf, message: String},
    Usage(String),
    Rejected{path: path::PathBuf, reason: String},
    Decode{source: sniffing_rs::DecodeError, path: path::PathBuf},
}

impl Error {
    /// Errors that concern a single file. Processing the other files can go on.
    pub fn is_recoverable(self: &Self) -> bool {
        return match self {
            Error::Rejected{..} | Error::Decode{..} => true,
            _ => false,
        };
    }

    pub fn error_code(self: &Self) -> exitcode::ExitCode {
        return match self {
            Error::Io{..} => exitcode::IOERR,
            Error::Usage(_) => exitcode::USAGE,
            Error::Rejected{..} => exitcode::DATAERR,
            Error::Decode{..} => exitcode::DATAERR,
        };
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        return match self {
            Error::Io{source, ..} => Some(source),
            Error::Decode{source, ..} => Some(source),
            _ => None,
        };
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io{source, path, message}
                => write!(f, "{}. {}\nCaused By: {}", message, path.to_string_lossy(), source),
            Error::Usage(message) => write!(f, "{}", message),
            Error::Rejected{path, reason}
                => write!(f, "Skipped {}: {}", path.to_string_lossy(), reason),
            Error::Decode{source, path}
                => write!(f, "Error decoding {}: {}", path.to_string_lossy(), source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sniffing_rs::EncodingLabel;

    #[test]
    fn codes() {
        let io = Error::Io{source: io::ErrorKind::NotFound.into(), path: "a.txt".into(), message: "Error opening the file".into()};
        assert_eq!(exitcode::IOERR, io.error_code());
        assert!(!io.is_recoverable());
        assert_eq!(exitcode::USAGE, Error::Usage("bad".into()).error_code());
        let decode = Error::Decode{source: sniffing_rs::DecodeError{label: EncodingLabel::Big5}, path: "a.txt".into()};
        assert_eq!(exitcode::DATAERR, decode.error_code());
        assert!(decode.is_recoverable());
    }

    #[test]
    fn messages() {
        let decode = Error::Decode{source: sniffing_rs::DecodeError{label: EncodingLabel::Big5}, path: "a.txt".into()};
        assert_eq!("Error decoding a.txt: the input is not valid big5", decode.to_string());
        let rejected = Error::Rejected{path: "a.csv".into(), reason: "not a .txt file".into()};
        assert_eq!("Skipped a.csv: not a .txt file", rejected.to_string());
    }
}
