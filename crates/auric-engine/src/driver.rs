//! The top-level parse loop: lexer and parser interleaved.

use auric_core::{Grammar, SymbolKind};

use crate::cancel::CancelToken;
use crate::error::{GroupError, LexError, ParseError, TokenError};
use crate::lexer;
use crate::observer::{NoopObserver, ParseObserver};
use crate::parser::{Parser, Step};
use crate::source::Source;
use crate::token::Token;
use crate::tree::ParseTree;

/// Outcome of a parse: exactly one of these.
///
/// Errors are values; the first failure terminates the parse and
/// nothing is recovered or retried.
#[derive(Debug)]
pub enum ParseResult {
    /// The input conforms to the grammar.
    Accept(ParseTree),
    Lex(LexError),
    Group(GroupError),
    Syntax(ParseError),
    Cancelled,
}

impl ParseResult {
    /// True only for [`Accept`](Self::Accept).
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept(_))
    }

    pub fn into_tree(self) -> Option<ParseTree> {
        match self {
            Self::Accept(tree) => Some(tree),
            _ => None,
        }
    }
}

/// Per-parse knobs.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    cancel: Option<CancelToken>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll this token at every look-ahead acquisition.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Parse `input` with default options and no observer.
pub fn parse(input: &str, grammar: &Grammar) -> ParseResult {
    parse_with(input, grammar, &mut NoopObserver, ParseOptions::default())
}

/// Parse `input`, reporting events to `observer`.
///
/// The lexer is called lazily: a new token is pulled only when the
/// previous look-ahead was shifted. Skippable tokens never reach the
/// parser or the observer's shift/reduce events. When the input runs
/// out the grammar's EndOfFile token drives the final reductions; if
/// the tables offer no action for it, the failure reports
/// `last_token: None`.
pub fn parse_with(
    input: &str,
    grammar: &Grammar,
    observer: &mut dyn ParseObserver,
    options: ParseOptions,
) -> ParseResult {
    let source = Source::new(input);
    let mut parser = Parser::new(grammar);
    let mut position = 0usize;
    let mut look_ahead: Option<Token> = None;

    loop {
        if look_ahead.is_none() {
            let (token, next_position) = match lexer::next_token(&source, position, grammar) {
                Ok(scanned) => scanned,
                Err(TokenError::Lex(error)) => return ParseResult::Lex(error),
                Err(TokenError::Group(error)) => return ParseResult::Group(error),
            };
            if options.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return ParseResult::Cancelled;
            }
            position = next_position;
            let kind = grammar.symbol(token.symbol).kind;
            if kind == SymbolKind::Skippable {
                continue;
            }
            if kind != SymbolKind::EndOfFile {
                observer.on_token(&token);
            }
            look_ahead = Some(token);
        }

        let token = look_ahead.as_ref().expect("look-ahead was just filled");
        let pre_state = parser.state();
        match parser.step(token) {
            Ok(Step::Shifted) => {
                observer.on_shift(pre_state, token, parser.stack());
                look_ahead = None;
            }
            Ok(Step::Reduced) => observer.on_reduce(pre_state, token, parser.stack()),
            Ok(Step::Accepted(root)) => return ParseResult::Accept(ParseTree { root }),
            Err(error) => return ParseResult::Syntax(error),
        }
    }
}
