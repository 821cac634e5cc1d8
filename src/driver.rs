use std::fmt::Write;

use crate::{render_payload, transcode, Options, ParsedPair};

/// What a run over some input produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// The transcoded pairs or payloads, one entry per successful unit.
    pub stdout: String,
    /// The error messages, one line per failed unit.
    pub stderr: String,
    /// Whether any unit failed.
    pub failed: bool,
}

/// Transcodes every unit of `input` according to `opts`.
/// Windows line endings are normalized before the input is split into units.
pub fn run(input: &str, opts: &Options) -> Report {
    let input = input.replace("\r\n", "\n");
    let mut report = Report::default();
    for (line, unit) in opts.units(&input) {
        match transcode(unit, opts.direction) {
            Ok(pair) => write_pair(&mut report.stdout, &pair, opts),
            Err(err) => {
                report.failed = true;
                log::error!("Error: {}", err);
                if opts.each_line {
                    let _ = writeln!(report.stderr, "line {}: {}", line, err);
                } else {
                    let _ = writeln!(report.stderr, "{}", err);
                }
            }
        }
    }
    report
}

fn write_pair(out: &mut String, pair: &ParsedPair, opts: &Options) {
    if opts.payload {
        let _ = writeln!(out, "{}", render_payload(pair, opts.direction));
    } else {
        let _ = writeln!(out, "condition: {}", pair.condition);
        let _ = writeln!(out, "statement: {}", pair.statement);
    }
}
