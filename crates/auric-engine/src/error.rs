//! Runtime failures, surfaced as values.

use auric_core::GroupId;

use crate::parser::StackItem;
use crate::token::Token;

/// No DFA edge matched at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no token matches the input at position {position}")]
pub struct LexError {
    pub position: usize,
}

/// One unclosed group at end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenFrame {
    pub group: GroupId,
    /// Where the group's start token began.
    pub position: usize,
}

/// Closed-mode groups were still open when the input ran out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} group(s) left open at end of input", .open_frames.len())]
pub struct GroupError {
    /// The unsettled frames, innermost first.
    pub open_frames: Vec<OpenFrame>,
}

/// The LALR table had no action for the look-ahead.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", syntax_error_message(.last_token))]
pub struct ParseError {
    /// The offending look-ahead; `None` means the input ended early.
    pub last_token: Option<Token>,
    /// The parser stack at failure, bottom (sentinel) first.
    pub stack: Vec<StackItem>,
}

fn syntax_error_message(last_token: &Option<Token>) -> String {
    match last_token {
        Some(token) => format!("unexpected '{}' at position {}", token.text, token.position),
        None => "unexpected end of input".to_string(),
    }
}

/// Either way the lexer can fail.
#[derive(Clone, Debug, thiserror::Error)]
pub enum TokenError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Group(#[from] GroupError),
}
