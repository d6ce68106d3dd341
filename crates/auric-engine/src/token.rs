//! Tokens produced by the lexer.

use serde::Serialize;

use auric_core::SymbolId;

/// A lexed span: the emitting symbol, its literal text and the
/// character position it starts at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    pub symbol: SymbolId,
    pub text: String,
    pub position: usize,
    /// Tokens lexed inside a group token; empty for plain tokens.
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(symbol: SymbolId, text: String, position: usize) -> Self {
        Self {
            symbol,
            text,
            position,
            children: Vec::new(),
        }
    }

    /// Char length of the literal; what the driver advances by.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
