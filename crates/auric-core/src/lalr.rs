//! LALR(1) action tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// LALR state index into the grammar's LALR table.
pub type LalrStateId = u16;

/// Rule index into the grammar's rule table.
pub type RuleId = u16;

/// What the parser does on a given look-ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LalrAction {
    /// Push the look-ahead and enter the target state.
    Shift(LalrStateId),
    /// Replace the rule's right-hand side on the stack with its product.
    Reduce(RuleId),
    /// State entered after a reduce, keyed by the produced non-terminal.
    Goto(LalrStateId),
    /// The parse is complete.
    Accept,
}

/// One LALR state row: symbol name to action.
///
/// Terminal actions and non-terminal gotos share the map; the two
/// namespaces are disjoint in builder output. Insertion order is file
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LalrState {
    pub actions: IndexMap<String, LalrAction>,
}

impl LalrState {
    pub fn new(actions: IndexMap<String, LalrAction>) -> Self {
        Self { actions }
    }

    /// Action for the given look-ahead symbol name, if any.
    pub fn action(&self, symbol_name: &str) -> Option<LalrAction> {
        self.actions.get(symbol_name).copied()
    }
}
