#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar data model for the Auric parse engine.
//!
//! A [`Grammar`] is the fully linked, immutable output of the table
//! loader: charsets, symbols, the lexer DFA, the LALR(1) tables, rules
//! and lexical groups, all cross-referenced by plain typed indices that
//! were bounds-checked once at load time.
//!
//! The runtime crates share a loaded grammar read-only; nothing in this
//! crate mutates after construction.

mod charset;
mod dfa;
mod grammar;
mod lalr;
mod symbol;


pub use charset::{CharRange, Charset, CharsetId};
pub use dfa::{DfaEdge, DfaState, DfaStateId};
pub use grammar::{
    AdvanceMode, EndingMode, Grammar, GrammarParts, Group, Rule, TableVersion, param,
};
pub use lalr::{LalrAction, LalrState, LalrStateId, RuleId};
pub use symbol::{GroupId, Symbol, SymbolId, SymbolKind};
