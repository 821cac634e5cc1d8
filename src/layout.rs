//! Splitting a raw input line into its condition and statement fragments.
//!
//! The accepted layouts form a two-rule grammar:
//!
//! ```text
//! forward  := ws* '{' condition '}' statement
//! backward := statement '{' condition '}' ws*
//! ```
//!
//! A condition never contains a closing brace: the forward scan stops at the first `}` after the
//! opening brace. A backward statement never contains an opening brace: the scan starts the
//! condition block at the first `{`, and that block must be the last thing on the line.
//! Nested braces are not supported in either direction.

use crate::{Direction, TranscodeError};

const OPEN: char = '{';
const CLOSE: char = '}';

/// The two fragments of a raw input line, borrowed from the input and trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fragments<'a> {
    pub condition: &'a str,
    pub statement: &'a str,
}

pub(crate) fn split(input: &str, direction: Direction) -> Result<Fragments<'_>, TranscodeError> {
    let fragments = match direction {
        Direction::Forward => split_forward(input),
        Direction::Backward => split_backward(input),
    };
    fragments.ok_or(TranscodeError::Format(direction))
}

/// `{condition} statement`
fn split_forward(input: &str) -> Option<Fragments<'_>> {
    let rest = input.trim_start().strip_prefix(OPEN)?;
    let close = rest.find(CLOSE)?;
    Some(Fragments {
        condition: rest[..close].trim(),
        statement: rest[close + CLOSE.len_utf8()..].trim(),
    })
}

/// `statement {condition}`
fn split_backward(input: &str) -> Option<Fragments<'_>> {
    let open = input.find(OPEN)?;
    let block = &input[open + OPEN.len_utf8()..];
    let close = block.find(CLOSE)?;
    let trailing = &block[close + CLOSE.len_utf8()..];
    if !trailing.trim().is_empty() {
        return None;
    }
    Some(Fragments {
        condition: block[..close].trim(),
        statement: input[..open].trim(),
    })
}
