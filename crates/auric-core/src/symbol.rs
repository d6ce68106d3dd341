//! Symbols: the named elements a grammar is built from.

use serde::{Deserialize, Serialize};

/// Symbol index into the grammar's symbol table (table files use u16).
pub type SymbolId = u16;

/// Group index into the grammar's group table.
pub type GroupId = u16;

/// Classification of a symbol, as stored in `S` records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Appears on rule left-hand sides; never produced by the lexer.
    NonTerminal,
    /// Produced by the DFA and consumed by the parser.
    Terminal,
    /// Produced by the DFA, filtered out before the parser sees it.
    Skippable,
    /// Synthesized when the input is exhausted.
    EndOfFile,
    /// Opens a lexical group.
    GroupStart,
    /// Closes a lexical group.
    GroupEnd,
    /// v1 line-comment marker; reclassified to [`GroupStart`](Self::GroupStart)
    /// during load when a newline symbol exists to close the group.
    CommentLine,
    /// The builder's error symbol; never matched at runtime.
    Error,
}

impl SymbolKind {
    /// Decode the numeric kind stored in `S` records.
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            0 => Self::NonTerminal,
            1 => Self::Terminal,
            2 => Self::Skippable,
            3 => Self::EndOfFile,
            4 => Self::GroupStart,
            5 => Self::GroupEnd,
            6 => Self::CommentLine,
            7 => Self::Error,
            _ => return None,
        })
    }

    /// The numeric kind written to `S` records.
    pub fn code(self) -> u16 {
        match self {
            Self::NonTerminal => 0,
            Self::Terminal => 1,
            Self::Skippable => 2,
            Self::EndOfFile => 3,
            Self::GroupStart => 4,
            Self::GroupEnd => 5,
            Self::CommentLine => 6,
            Self::Error => 7,
        }
    }
}

/// A named grammar element.
///
/// Symbols are identified by name for lookup purposes; the id is only a
/// positional handle into the grammar's symbol table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Owning group, for `GroupStart`/`GroupEnd` symbols.
    pub group: Option<GroupId>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            group: None,
        }
    }

    /// Case-insensitive name comparison, used for the v1 newline heuristic.
    pub fn name_eq_ignore_case(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }
}
