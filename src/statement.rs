use crate::TranscodeError;

const TERMINATOR: char = ';';

/// Checks that the statement ends with a semicolon and strips exactly one of them.
pub(crate) fn strip_terminator(statement: &str) -> Result<&str, TranscodeError> {
    statement
        .trim()
        .strip_suffix(TERMINATOR)
        .map(str::trim)
        .ok_or(TranscodeError::StatementSyntax)
}
