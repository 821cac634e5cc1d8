use thiserror::Error;

use crate::Direction;

/// The errors that can occur while transcoding a condition line.
/// Both are fatal: no partial result is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// The input does not have the brace-delimited layout of the requested direction.
    #[error("expected '{}'", .0.layout())]
    Format(Direction),

    /// The statement fragment is not terminated by a semicolon.
    #[error("statement must end with ';'")]
    StatementSyntax,
}
