//! The lexer's automaton, flattened into id-linked state rows.

use serde::{Deserialize, Serialize};

use crate::charset::CharsetId;
use crate::symbol::SymbolId;

/// DFA state index into the grammar's DFA table.
pub type DfaStateId = u16;

/// One outgoing transition.
///
/// Edges keep file order; the first edge whose charset accepts the
/// character wins, which is how the builder's priorities survive into
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaEdge {
    pub charset: CharsetId,
    pub target: DfaStateId,
}

/// One DFA state row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaState {
    /// Terminal emitted when a scan ends in this state.
    pub accept: Option<SymbolId>,
    pub edges: Vec<DfaEdge>,
}

impl DfaState {
    pub fn new(accept: Option<SymbolId>, edges: Vec<DfaEdge>) -> Self {
        Self { accept, edges }
    }
}
