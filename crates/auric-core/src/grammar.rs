//! The immutable grammar aggregate produced by the table loader.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::charset::{Charset, CharsetId};
use crate::dfa::{DfaState, DfaStateId};
use crate::lalr::{LalrState, LalrStateId, RuleId};
use crate::symbol::{GroupId, Symbol, SymbolId, SymbolKind};

/// Canonical parameter-map keys.
///
/// v1 `P` records write all six in fixed order; v5 `p` records carry
/// free-form names, of which these are the ones the builder emits.
pub mod param {
    pub const NAME: &str = "Name";
    pub const VERSION: &str = "Version";
    pub const AUTHOR: &str = "Author";
    pub const ABOUT: &str = "About";
    pub const CASE_SENSITIVE: &str = "Case Sensitive";
    pub const START_SYMBOL: &str = "Start Symbol";
}

/// Table file format generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableVersion {
    V1,
    V5,
}

/// A production: one non-terminal and the symbols it consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub produces: SymbolId,
    /// Right-hand side in grammar order; may be empty.
    pub consumes: Vec<SymbolId>,
}

impl Rule {
    pub fn new(produces: SymbolId, consumes: Vec<SymbolId>) -> Self {
        Self { produces, consumes }
    }
}

/// How a group consumes input between its delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceMode {
    /// Skim whole tokens; unlexable gaps still advance one character.
    Token,
    /// Swallow the interior one character at a time.
    Character,
}

/// Whether a group must see its end symbol before end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndingMode {
    /// End of input closes the group (line comments).
    Open,
    /// An unclosed group at end of input is an error (block comments).
    Closed,
}

/// A lexical group: block comment, line comment, string.
///
/// The interior is lexed but the whole span is emitted as a single
/// `container` token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    /// Symbol the whole group is emitted as.
    pub container: SymbolId,
    pub start: SymbolId,
    pub end: SymbolId,
    pub advance: AdvanceMode,
    pub ending: EndingMode,
    /// Groups allowed to open inside this one.
    pub nestable: Vec<GroupId>,
}

impl Group {
    pub fn can_nest(&self, group: GroupId) -> bool {
        self.nestable.contains(&group)
    }
}

/// Everything the loader hands over to build a [`Grammar`].
#[derive(Clone, Debug, Default)]
pub struct GrammarParts {
    pub version: Option<TableVersion>,
    pub parameters: IndexMap<String, String>,
    pub charsets: Vec<Charset>,
    pub symbols: Vec<Symbol>,
    pub dfa_states: Vec<DfaState>,
    pub lalr_states: Vec<LalrState>,
    pub rules: Vec<Rule>,
    pub groups: Vec<Group>,
    pub dfa_start: DfaStateId,
    pub lalr_start: LalrStateId,
}

/// A fully linked grammar, immutable after construction.
///
/// All cross-references are typed indices into the arrays held here;
/// the loader bounds-checks every one exactly once, so the indexing
/// accessors treat an out-of-range id as table corruption and panic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grammar {
    version: TableVersion,
    parameters: IndexMap<String, String>,
    charsets: Vec<Charset>,
    symbols: Vec<Symbol>,
    dfa_states: Vec<DfaState>,
    lalr_states: Vec<LalrState>,
    rules: Vec<Rule>,
    groups: Vec<Group>,
    dfa_start: DfaStateId,
    lalr_start: LalrStateId,
}

impl Grammar {
    pub fn from_parts(parts: GrammarParts) -> Self {
        Self {
            version: parts.version.unwrap_or(TableVersion::V5),
            parameters: parts.parameters,
            charsets: parts.charsets,
            symbols: parts.symbols,
            dfa_states: parts.dfa_states,
            lalr_states: parts.lalr_states,
            rules: parts.rules,
            groups: parts.groups,
            dfa_start: parts.dfa_start,
            lalr_start: parts.lalr_start,
        }
    }

    pub fn version(&self) -> TableVersion {
        self.version
    }

    pub fn parameters(&self) -> &IndexMap<String, String> {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Grammar name from the parameter map.
    pub fn name(&self) -> Option<&str> {
        self.parameter(param::NAME)
    }

    pub fn author(&self) -> Option<&str> {
        self.parameter(param::AUTHOR)
    }

    pub fn about(&self) -> Option<&str> {
        self.parameter(param::ABOUT)
    }

    pub fn charset(&self, id: CharsetId) -> &Charset {
        &self.charsets[id as usize]
    }

    pub fn charsets(&self) -> &[Charset] {
        &self.charsets
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id as usize]
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// First symbol with the given name (case-sensitive).
    pub fn symbol_by_name(&self, name: &str) -> Option<SymbolId> {
        self.symbols
            .iter()
            .position(|s| s.name == name)
            .map(|i| i as SymbolId)
    }

    /// The grammar's EndOfFile symbol.
    ///
    /// Builder output always contains exactly one; its absence means the
    /// table file is corrupt.
    pub fn eof_symbol(&self) -> SymbolId {
        self.symbols
            .iter()
            .position(|s| s.kind == SymbolKind::EndOfFile)
            .expect("grammar has no EndOfFile symbol") as SymbolId
    }

    pub fn dfa_state(&self, id: DfaStateId) -> &DfaState {
        &self.dfa_states[id as usize]
    }

    pub fn dfa_states(&self) -> &[DfaState] {
        &self.dfa_states
    }

    pub fn dfa_start(&self) -> DfaStateId {
        self.dfa_start
    }

    pub fn lalr_state(&self, id: LalrStateId) -> &LalrState {
        &self.lalr_states[id as usize]
    }

    pub fn lalr_states(&self) -> &[LalrState] {
        &self.lalr_states
    }

    pub fn lalr_start(&self) -> LalrStateId {
        self.lalr_start
    }

    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id as usize]
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id as usize]
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}
