use crate::option;
use crate::error;
use crate::session::{self, Acceptance, Session};

use sniffing_rs::EncodingLabel;
use std::io;
use std::io::{Read, Write};
use std::fs;
use std::path;

enum Output<'a> {
    Writer(&'a mut dyn io::Write),
    Dir(path::PathBuf),
}

pub fn dispatch(opt: &option::Opt) -> Result<(), error::Error> {
    if opt.list {
        list();
        return Ok(());
    } else {
        return run(opt);
    }
}

fn run(opt: &option::Opt) -> Result<(), error::Error> {

    let in_paths = &opt.paths;
    let stdout = std::io::stdout();
    let mut stdout_lock;
    let mut out_dir_can = None;
    let mut output = match opt.output.as_ref() {
        Some(out_path) if in_paths.len() > 0 => {
            if ! out_path.is_dir() {
                fs::create_dir_all(&out_path)
                    .map_err(|e| map_err(e, out_path, "Error creating the directory"))?;
            }
            out_dir_can = Some(fs::canonicalize(out_path)
                .map_err(|e| map_err(e, out_path, "Error reading the path"))?);
            Output::Dir(out_path.to_owned())
        },
        _ => {
            stdout_lock = stdout.lock();
            Output::Writer(&mut stdout_lock)
        },
    };

    if in_paths.len() == 0 {
        let stdin_path = path::PathBuf::from("-");
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)
            .map_err(|e| map_err(e, &stdin_path, "Error reading the standard input"))?;
        let mut session = Session::from_bytes("-", bytes);
        return report(emit(&mut session, &mut output, &stdin_path, opt));
    } else {
        for i in 0..in_paths.len() {
            let in_path = &in_paths[i];
            if ! path::Path::exists(&in_paths[i]) {
                let source = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
                return Err(error::Error::Io { source, path: in_path.to_owned(), message: "Error opening the file".into() });
            }
        }
        let acceptance = Acceptance { max_size: opt.max_size };
        let mut result: Result<(), error::Error> = Ok(());
        for i in 0..in_paths.len() {
            let ret = traverse(&mut output, &acceptance, &in_paths[i], out_dir_can.as_deref(), true, opt);
            if let Err(err) = ret {
                if err.is_recoverable() {
                    result = Err(err);
                } else {
                    return Err(err);
                }
            }
        }
        return result;
    }
}

// `out_dir_can` is the canonical output directory. It is never walked into.
fn traverse(output: &mut Output, acceptance: &Acceptance, in_path: &path::PathBuf,
     out_dir_can: Option<&path::Path>, explicit: bool, opt: &option::Opt)
    -> Result<(), error::Error> {
    if in_path.is_dir() {
        if let Some(out_dir) = out_dir_can {
            let in_path_can = fs::canonicalize(in_path)
                .map_err(|e| map_err(e, in_path, "Error reading the path"))?;
            if in_path_can.as_path() == out_dir {
                log::debug!("skipping the output directory {}", in_path.to_string_lossy());
                return Ok(());
            }
        }
        let mut next_output = match output {
            Output::Dir(current_out_dir) => {
                let next_out_dir = match in_path.file_name() {
                    Some(name) => current_out_dir.join(name),
                    None => current_out_dir.to_owned(),
                };
                if ! next_out_dir.is_dir() {
                    fs::create_dir(&next_out_dir)
                        .map_err(|e| map_err(e, &next_out_dir, "Error creating the directory"))?;
                }
                Some(Output::Dir(next_out_dir))
            },
            Output::Writer(_) => None,
        };
        let mut result: Result<(), error::Error> = Ok(());
        let mut children = fs::read_dir(in_path)
            .map_err(|e| map_err(e, in_path, "Error reading the directory"))?
            .map(|child| child.map(|c| c.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_err(e, in_path, "Error reading the directory"))?;
        children.sort();
        for child_path in children.iter() {
            let child_output = match next_output.as_mut() {
                Some(o) => o,
                None => &mut *output,
            };
            let ret = traverse(child_output, acceptance, child_path, out_dir_can, false, opt);
            if let Err(err) = ret {
                if err.is_recoverable() {
                    result = Err(err);
                } else {
                    return Err(err);
                }
            }
        }
        return result;
    } else {
        if !explicit && !session::has_txt_extension(in_path) {
            log::debug!("skipping {}", in_path.to_string_lossy());
            return Ok(());
        }
        let ret = Session::load(in_path, acceptance)
            .and_then(|mut session| emit(&mut session, output, in_path, opt));
        return report(ret);
    }
}

fn emit(session: &mut Session, output: &mut Output, path: &path::PathBuf, opt: &option::Opt)
    -> Result<(), error::Error> {
    let detected = session.detected();
    log::debug!("{}: {} bytes, detected {}", path.to_string_lossy(), session.bytes().len(), detected);
    if opt.show {
        return match output {
            Output::Writer(writer) => writeln!(writer, "{}: {}", path.to_string_lossy(), detected)
                .map_err(|e| map_err(e, path, "Error writing output")),
            Output::Dir(dir_path) => Err(error::Error::Usage(format!("Cannot show encodings into {}", dir_path.to_string_lossy()))),
        };
    }
    if !opt.quiet {
        eprintln!("{}: detected {}", path.to_string_lossy(), detected);
    }
    if let Some(label) = opt.encoding {
        session.select(label).map_err(|source| error::Error::Decode { source, path: path.into() })?;
    }
    if opt.preview {
        let preview = session.preview(opt.preview_chars)
            .map_err(|source| error::Error::Decode { source, path: path.into() })?;
        return match output {
            Output::Writer(writer) => writeln!(writer, "{}", preview)
                .map_err(|e| map_err(e, path, "Error writing output")),
            Output::Dir(dir_path) => Err(error::Error::Usage(format!("Cannot preview into {}", dir_path.to_string_lossy()))),
        };
    }
    let selected = session.selected();
    let out_name = session.output_name();
    let converted = session.convert()
        .map_err(|source| error::Error::Decode { source, path: path.into() })?;
    match output {
        Output::Writer(writer) => {
            writer.write_all(converted)
                .map_err(|e| map_err(e, path, "Error writing output"))?;
        },
        Output::Dir(dir_path) => {
            let out_path = &dir_path.join(out_name);
            let mut ofile = fs::File::create(out_path)
                .map_err(|e| map_err(e, out_path, "Error creating the file"))?;
            ofile.write_all(converted)
                .map_err(|e| map_err(e, out_path, "Error writing the file"))?;
        },
    }
    if !opt.quiet {
        eprintln!("{}: converted from {} to {}", path.to_string_lossy(), selected, EncodingLabel::Utf8);
    }
    return Ok(());
}

// Errors on a single file are reported where they happen so that the others can go on.
fn report(ret: Result<(), error::Error>) -> Result<(), error::Error> {
    if let Err(err) = &ret {
        if err.is_recoverable() {
            eprintln!("{}", err);
        }
    }
    return ret;
}

fn map_err(e: io::Error, path: &path::PathBuf, msg: &str) -> error::Error {
    return error::Error::Io { source: e, path: path.into(), message: msg.into()};
}

fn list() {
    for label in EncodingLabel::ALL.iter() {
        println!("{}", label);
    }
}
