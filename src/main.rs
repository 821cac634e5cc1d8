use std::{io::Read, process::exit, time::Instant};

use clap::Parser as ClapParser;

use hoare_transcode::{run, Direction, Options};

/// The command line interface for the transcoder
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Args {
    /// Expect `statement; {postcondition}` instead of `{precondition} statement;`
    #[arg(long)]
    backward: bool,

    /// Print the reassembled verifier payload instead of the condition and the statement
    #[arg(long)]
    payload: bool,

    /// Transcode every non-blank line on its own.
    /// Without this flag, the whole input is one line whose statement may span several lines.
    #[arg(long)]
    each_line: bool,

    /// The input file to read. Reads from stdin if omitted.
    file: Option<String>,
}

/// Parses the command line arguments and transcodes the input.
fn main() {
    env_logger::init();
    let ts = Instant::now();
    let cli = Args::parse();
    let opts = convert_options(&cli);

    let input = match read_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            log::error!("Error: {}", err);
            eprintln!("{}", err);
            exit(1);
        }
    };

    let report = run(&input, &opts);
    print!("{}", report.stdout);
    eprint!("{}", report.stderr);

    log::info!("Done ({}ms).", ts.elapsed().as_millis());
    if report.failed {
        exit(1);
    }
}

fn read_input(file: Option<&str>) -> std::io::Result<String> {
    match file {
        Some(file) => std::fs::read_to_string(file).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", file),
            ),
            _ => err,
        }),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn convert_options(options: &Args) -> Options {
    let mut opts = Options::default();
    if options.backward {
        opts.direction = Direction::Backward;
    }
    if options.payload {
        opts.payload = true;
    }
    if options.each_line {
        opts.each_line = true;
    }
    opts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags() {
        let args = Args::parse_from(["hoare-transcode", "input.txt"]);
        let opts = convert_options(&args);
        assert_eq!(args.file.as_deref(), Some("input.txt"));
        assert_eq!(opts.direction, Direction::Forward);
        assert!(!opts.payload);
        assert!(!opts.each_line);
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from(["hoare-transcode", "--backward", "--payload", "--each-line"]);
        let opts = convert_options(&args);
        assert!(args.file.is_none());
        assert_eq!(opts.direction, Direction::Backward);
        assert!(opts.payload);
        assert!(opts.each_line);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_input(Some("does/not/exist.txt")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "File not found: does/not/exist.txt");
    }

    #[test]
    fn reads_existing_file() {
        let input = read_input(Some("res/forward/conjunction.in")).unwrap();
        assert_eq!(input.trim_end(), "{x>0 && y>0} y = 2;");
    }
}
