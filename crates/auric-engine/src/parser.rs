//! The LALR(1) stack automaton.

use auric_core::{Grammar, LalrAction, LalrStateId, SymbolKind};

use crate::error::ParseError;
use crate::token::Token;
use crate::tree::ParseNode;

/// One parser stack entry: the automaton state plus the tree built so
/// far for the symbol that entered it.
///
/// The bottom entry holds the initial state and no node; it is the
/// sentinel and never reaches the caller as output.
#[derive(Clone, Debug)]
pub struct StackItem {
    pub state: LalrStateId,
    pub node: Option<ParseNode>,
}

/// What one step did with the look-ahead.
#[derive(Debug)]
pub(crate) enum Step {
    /// The look-ahead was consumed.
    Shifted,
    /// A rule was applied; the look-ahead is still pending.
    Reduced,
    /// The parse is complete; the root node is handed back.
    Accepted(ParseNode),
}

pub(crate) struct Parser<'g> {
    grammar: &'g Grammar,
    stack: Vec<StackItem>,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            stack: vec![StackItem {
                state: grammar.lalr_start(),
                node: None,
            }],
        }
    }

    /// Read-only view of the stack, sentinel first.
    pub fn stack(&self) -> &[StackItem] {
        &self.stack
    }

    pub fn state(&self) -> LalrStateId {
        self.stack
            .last()
            .expect("parser stack is never empty")
            .state
    }

    /// Drive one action for the look-ahead.
    ///
    /// A missing action is a syntax error in the input. Everything else
    /// that can go wrong here (reduce deeper than the stack, missing
    /// goto, goto keyed as a terminal action) means the loaded tables
    /// are corrupt, and panics.
    pub fn step(&mut self, look_ahead: &Token) -> Result<Step, ParseError> {
        let state = self.state();
        let name = &self.grammar.symbol(look_ahead.symbol).name;
        let Some(action) = self.grammar.lalr_state(state).action(name) else {
            return Err(self.fail(look_ahead));
        };

        match action {
            LalrAction::Shift(target) => {
                self.stack.push(StackItem {
                    state: target,
                    node: Some(ParseNode::Leaf(look_ahead.clone())),
                });
                Ok(Step::Shifted)
            }
            LalrAction::Reduce(rule_id) => {
                let rule = self.grammar.rule(rule_id);
                let arity = rule.consumes.len();
                assert!(
                    self.stack.len() > arity,
                    "corrupt tables: rule for '{}' consumes more than the stack holds",
                    self.grammar.symbol(rule.produces).name,
                );

                let mut children = Vec::with_capacity(arity);
                for _ in 0..arity {
                    let item = self.stack.pop().expect("stack depth checked above");
                    children.push(item.node.expect("corrupt tables: reduce reached the sentinel"));
                }
                // Popped right-to-left; restore shift order.
                children.reverse();

                let produces = &self.grammar.symbol(rule.produces).name;
                let below = self.state();
                let Some(LalrAction::Goto(target)) =
                    self.grammar.lalr_state(below).action(produces)
                else {
                    panic!("corrupt tables: no goto for '{produces}' from state {below}");
                };
                self.stack.push(StackItem {
                    state: target,
                    node: Some(ParseNode::Branch {
                        symbol: rule.produces,
                        children,
                    }),
                });
                Ok(Step::Reduced)
            }
            LalrAction::Accept => {
                let item = self.stack.pop().expect("parser stack is never empty");
                let root = item.node.expect("corrupt tables: accepted the sentinel");
                Ok(Step::Accepted(root))
            }
            LalrAction::Goto(_) => {
                panic!("corrupt tables: goto keyed by terminal '{name}'")
            }
        }
    }

    /// Build the fatal syntax error, moving the stack into it.
    fn fail(&mut self, look_ahead: &Token) -> ParseError {
        let at_eof = self.grammar.symbol(look_ahead.symbol).kind == SymbolKind::EndOfFile;
        ParseError {
            last_token: (!at_eof).then(|| look_ahead.clone()),
            stack: std::mem::take(&mut self.stack),
        }
    }
}
