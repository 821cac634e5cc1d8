//! Transcoding of Hoare-style condition lines for a symbolic verifier.
//!
//! A line is either `{precondition} statement;` (forward) or `statement; {postcondition}`
//! (backward). Transcoding splits it into the two fragments, checks the statement terminator,
//! and rewrites the condition from Java boolean operators into SymPy's (`&`, `|`, `~`) with
//! every atom parenthesized.

mod condition;
mod driver;
mod error;
mod layout;
mod options;
mod payload;
mod statement;

use std::fmt::Display;

pub use condition::rewrite_condition;
pub use driver::{run, Report};
pub use error::TranscodeError;
pub use options::Options;
pub use payload::render_payload;
use quickcheck::Arbitrary;

/// The layout of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// `{precondition} statement`
    #[default]
    Forward,
    /// `statement {postcondition}`
    Backward,
}

impl Direction {
    /// The layout expected for this direction, as shown to users.
    pub fn layout(&self) -> &'static str {
        match self {
            Direction::Forward => "{precondition} statement",
            Direction::Backward => "statement {postcondition}",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// The result of a successful transcoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPair {
    /// The rewritten condition, in SymPy syntax.
    pub condition: String,
    /// The statement, trimmed and without its terminating semicolon.
    pub statement: String,
}

/// Transcodes a line of the form `{precondition} statement;`.
pub fn transcode_forward(input: &str) -> Result<ParsedPair, TranscodeError> {
    transcode(input, Direction::Forward)
}

/// Transcodes a line of the form `statement; {postcondition}`.
pub fn transcode_backward(input: &str) -> Result<ParsedPair, TranscodeError> {
    transcode(input, Direction::Backward)
}

/// Transcodes a line in the layout of the given direction.
pub fn transcode(input: &str, direction: Direction) -> Result<ParsedPair, TranscodeError> {
    log::debug!("Transcoding ({}): {}", direction, input);
    let fragments = layout::split(input, direction)?;
    let statement = statement::strip_terminator(fragments.statement)?;
    let pair = ParsedPair {
        condition: rewrite_condition(fragments.condition),
        statement: statement.to_owned(),
    };
    log::debug!("Transcoded ({}): {:?}", direction, pair);
    Ok(pair)
}

/* Arbitrary */

impl Arbitrary for Direction {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}
