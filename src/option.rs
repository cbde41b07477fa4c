use structopt::StructOpt;
use sniffing_rs::EncodingLabel;
use std::path::PathBuf;

pub const DEFAULT_MAX_SIZE: u64 = 50 * 1024 * 1024;
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Guesses the encoding of text files and converts them to UTF-8.
/// The guess can be overridden with --encoding.
/// If the texts cannot be decoded with the chosen encoding, nothing is written for that file
/// and an error message is emitted.
#[derive(StructOpt, Debug, Default)]
#[structopt(verbatim_doc_comment)]
pub struct Opt {
    /// The encoding of the input. Overrides the auto-detected one.
    #[structopt(name = "ENCODING", short = "e", long = "encoding")]
    pub encoding: Option<EncodingLabel>,

    /// Output directory.
    /// Converted files are written as <name>_utf8.txt.
    /// If input arguments contain directories, the directory hierarchies are preserved under DIRECTORY.
    #[structopt(name = "DIRECTORY", short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Prints supported encodings.
    #[structopt(short, long)]
    pub list: bool,

    /// Only shows auto-detected encodings without decoded texts.
    #[structopt(short, long)]
    pub show: bool,

    /// Shows the file information and the head of the decoded texts instead of converting them.
    #[structopt(short, long)]
    pub preview: bool,

    /// Number of characters shown by --preview.
    #[structopt(name = "NUMBER", short = "n", long = "preview-chars", default_value = "500")]
    pub preview_chars: usize,

    /// Files larger than this are rejected.
    #[structopt(name = "BYTES", short = "m", long = "max-size", default_value = "52428800")]
    pub max_size: u64,

    /// Suppresses status messages.
    #[structopt(short, long)]
    pub quiet: bool,

    /// Emits debug logs. RUST_LOG takes precedence.
    #[structopt(short, long)]
    pub verbose: bool,

    /// Files (or directories) to process. Reads stdin if none is given.
    #[structopt(name = "FILE", parse(from_os_str))]
    pub paths: Vec<PathBuf>,
}

impl Opt {
    pub fn new() -> Self {
        let mut opt = Opt::default();
        opt.preview_chars = DEFAULT_PREVIEW_CHARS;
        opt.max_size = DEFAULT_MAX_SIZE;
        return opt;
    }
}
