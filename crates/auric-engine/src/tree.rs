//! Parse trees built bottom-up during reduction.

use std::fmt::Write as _;

use serde::Serialize;

use auric_core::{Grammar, SymbolId};

use crate::token::Token;

/// One node of the parse tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ParseNode {
    /// A shifted terminal.
    Leaf(Token),
    /// A reduced non-terminal with its children in shift order.
    Branch {
        symbol: SymbolId,
        children: Vec<ParseNode>,
    },
}

impl ParseNode {
    pub fn symbol(&self) -> SymbolId {
        match self {
            Self::Leaf(token) => token.symbol,
            Self::Branch { symbol, .. } => *symbol,
        }
    }

    pub fn children(&self) -> &[ParseNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch { children, .. } => children,
        }
    }

    fn dump_into(&self, grammar: &Grammar, depth: usize, out: &mut String) {
        let pad = "  ".repeat(depth);
        match self {
            Self::Leaf(token) => {
                let _ = writeln!(out, "{pad}{} '{}'", grammar.symbol(token.symbol).name, token.text);
            }
            Self::Branch { symbol, children } => {
                let _ = writeln!(out, "{pad}<{}>", grammar.symbol(*symbol).name);
                for child in children {
                    child.dump_into(grammar, depth + 1, out);
                }
            }
        }
    }
}

/// The tree handed back by an accepted parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParseTree {
    pub root: ParseNode,
}

impl ParseTree {
    /// Stable indented text rendering, one node per line.
    pub fn dump(&self, grammar: &Grammar) -> String {
        let mut out = String::new();
        self.root.dump_into(grammar, 0, &mut out);
        out
    }
}
