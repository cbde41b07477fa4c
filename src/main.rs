use structopt::StructOpt;
use utf8ify::option;

fn main() -> () {
    let opt: option::Opt = StructOpt::from_args();
    let level = if opt.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    log::debug!("{:?}", opt);
    match utf8ify::cli::dispatch(&opt) {
        Err(err) => {
            if ! err.is_recoverable() {
                eprintln!("{}", err);
            }
            std::process::exit(err.error_code());
        },
        Ok(_) => {
            std::process::exit(exitcode::OK);
        },
    };
}
