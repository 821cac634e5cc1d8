//! Rewriting of Java-style boolean conditions into SymPy boolean syntax.
//!
//! The rewrite is purely textual. `&&`, `||` and `!` become `&`, `|` and `~`, and every operand
//! between two binary operators is wrapped in parentheses. Operands are never parsed, so a
//! relational atom such as `x > 0` is treated as one opaque unit.

use std::fmt::Display;

use itertools::Itertools;

/// A binary boolean operator of the target syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '&' => Some(BoolOp::And),
            '|' => Some(BoolOp::Or),
            _ => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            BoolOp::And => '&',
            BoolOp::Or => '|',
        }
    }
}

/// A token of a condition after operator substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Op(BoolOp),
    /// The (untrimmed) text between two operators. May be empty.
    Atom(&'a str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Op(op) => write!(f, " {} ", op.symbol()),
            Token::Atom(a) => write!(f, "({})", a.trim()),
        }
    }
}

/// Rewrites a condition fragment into the target syntax.
///
/// The result is never empty: an empty condition becomes the single atom `()`.
/// Rewriting is not idempotent, every call adds one pair of parentheses around each atom.
pub fn rewrite_condition(condition: &str) -> String {
    let substituted = substitute_operators(condition.trim());
    tokenize(&substituted)
        .into_iter()
        .inspect(|t| log::trace!("Condition token: {:?}", t))
        .join("")
}

/// Replaces the Java operators by their SymPy counterparts.
/// `&&` is replaced before `||`, which is replaced before `!`.
/// Any whitespace following a `!` is dropped.
fn substitute_operators(condition: &str) -> String {
    let replaced = condition.replace("&&", "&").replace("||", "|");

    let mut result = String::with_capacity(replaced.len());
    let mut chars = replaced.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '!' {
            result.push('~');
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
        } else {
            result.push(c);
        }
    }
    result
}

/// Splits a substituted condition at every `&` and `|`, keeping the operators as tokens.
/// The sequence always starts and ends with an atom and alternates between atoms and operators.
fn tokenize(condition: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, c) in condition.char_indices() {
        if let Some(op) = BoolOp::from_char(c) {
            tokens.push(Token::Atom(&condition[start..i]));
            tokens.push(Token::Op(op));
            start = i + c.len_utf8();
        }
    }
    tokens.push(Token::Atom(&condition[start..]));
    tokens
}
