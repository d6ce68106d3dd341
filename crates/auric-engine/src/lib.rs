#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime engine for grammars compiled to table files.
//!
//! A longest-match DFA lexer (extended with nestable lexical groups)
//! interleaves with an LALR(1) stack automaton. A parse consumes the
//! whole input string and yields either a [`ParseTree`] or one of the
//! typed failures in [`ParseResult`]; nothing is recovered or retried.
//!
//! The grammar is shared read-only; all working state lives in the
//! parse call.

mod cancel;
mod driver;
mod error;
mod group;
mod lexer;
mod observer;
mod parser;
mod source;
mod token;
mod tree;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod group_tests;
#[cfg(test)]
mod source_tests;

pub use cancel::CancelToken;
pub use driver::{ParseOptions, ParseResult, parse, parse_with};
pub use error::{GroupError, LexError, OpenFrame, ParseError, TokenError};
pub use lexer::next_token;
pub use observer::{NoopObserver, ParseObserver};
pub use parser::StackItem;
pub use source::Source;
pub use token::Token;
pub use tree::{ParseNode, ParseTree};
