//! Parse observation hooks.
//!
//! Observers are plain callback values passed into a parse; there is no
//! global registry, and the driver never depends on what a subscriber
//! does with the events. Every method defaults to a no-op.

use auric_core::LalrStateId;

use crate::parser::StackItem;
use crate::token::Token;

/// Callbacks the driver invokes as the parse progresses.
///
/// For a single parse, `on_token` for a token happens before any
/// `on_shift`/`on_reduce` that uses it as look-ahead, and reductions
/// driven by one look-ahead are reported in grammar order. The stack
/// slice is a read-only view with the sentinel at index 0.
pub trait ParseObserver {
    /// A non-skippable token became the pending look-ahead.
    fn on_token(&mut self, _token: &Token) {}

    /// The look-ahead was pushed; `stack` is the post-shift stack.
    fn on_shift(&mut self, _pre_state: LalrStateId, _look_ahead: &Token, _stack: &[StackItem]) {}

    /// A rule was applied; `stack` is the post-reduce stack.
    fn on_reduce(&mut self, _pre_state: LalrStateId, _look_ahead: &Token, _stack: &[StackItem]) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}
