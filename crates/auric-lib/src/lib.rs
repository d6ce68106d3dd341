#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Auric: runtime engine for GOLD-format grammar tables.
//!
//! An external builder compiles a grammar into a binary table file;
//! this crate loads the tables and parses input strings against them.
//!
//! # Example
//!
//! ```no_run
//! use auric_lib::{load_grammar_file, parse, parse_successful};
//!
//! let grammar = load_grammar_file("expr.egt").expect("valid table file");
//! let result = parse("a == 3 + b", &grammar);
//! if parse_successful(&result) {
//!     let tree = result.into_tree().unwrap();
//!     println!("{}", tree.dump(&grammar));
//! }
//! ```

use std::path::Path;

pub use auric_core::{
    AdvanceMode, CharRange, Charset, CharsetId, DfaEdge, DfaState, DfaStateId, EndingMode, Grammar,
    GroupId, Group, LalrAction, LalrState, LalrStateId, Rule, RuleId, Symbol, SymbolId, SymbolKind,
    TableVersion,
};
pub use auric_engine::{
    CancelToken, GroupError, LexError, NoopObserver, OpenFrame, ParseError, ParseNode,
    ParseObserver, ParseOptions, ParseResult, ParseTree, Source, StackItem, Token, TokenError,
    next_token,
};
pub use auric_tables::{LoadError, LoadWarning};


/// Decode a grammar table file.
pub fn load_grammar(bytes: &[u8]) -> Result<Grammar, LoadError> {
    auric_tables::load(bytes)
}

/// [`load_grammar`], surfacing non-fatal load warnings.
pub fn load_grammar_with_warnings(bytes: &[u8]) -> Result<(Grammar, Vec<LoadWarning>), LoadError> {
    auric_tables::load_with_warnings(bytes)
}

/// Read a table file from disk and decode it.
pub fn load_grammar_file(path: impl AsRef<Path>) -> Result<Grammar, LoadError> {
    auric_tables::load_file(path)
}

/// Parse `input` against a loaded grammar.
pub fn parse(input: &str, grammar: &Grammar) -> ParseResult {
    auric_engine::parse(input, grammar)
}

/// Parse with observer hooks and per-parse options.
pub fn parse_with(
    input: &str,
    grammar: &Grammar,
    observer: &mut dyn ParseObserver,
    options: ParseOptions,
) -> ParseResult {
    auric_engine::parse_with(input, grammar, observer, options)
}

/// True when the result carries a parse tree.
pub fn parse_successful(result: &ParseResult) -> bool {
    result.is_accept()
}
