//! Hand-built grammars for runtime tests.
//!
//! `expr_grammar` is the equality/expression/value language used by the
//! end-to-end scenarios; `group_grammar` exercises nesting, token
//! advance and newline-ended groups.

use auric_core::{
    AdvanceMode, Charset, DfaEdge, DfaState, EndingMode, Grammar, GrammarParts, Group, LalrAction,
    LalrState, Rule, Symbol, SymbolKind, TableVersion,
};
use indexmap::IndexMap;

fn state(actions: &[(&str, LalrAction)]) -> LalrState {
    let mut map = IndexMap::new();
    for (name, action) in actions {
        map.insert(name.to_string(), *action);
    }
    LalrState::new(map)
}

fn edges(pairs: &[(u16, u16)]) -> Vec<DfaEdge> {
    pairs
        .iter()
        .map(|&(charset, target)| DfaEdge { charset, target })
        .collect()
}

/// Symbol ids of [`expr_grammar`].
pub mod expr {
    use auric_core::SymbolId;

    pub const EOF: SymbolId = 0;
    pub const WHITESPACE: SymbolId = 2;
    pub const IDENTIFIER: SymbolId = 3;
    pub const CONSTANT: SymbolId = 4;
    pub const OPERATOR: SymbolId = 5;
    pub const EQ_EQ: SymbolId = 6;
    pub const COMMENT_START: SymbolId = 7;
    pub const COMMENT_END: SymbolId = 8;
    pub const COMMENT: SymbolId = 9;
    pub const EQUALITY: SymbolId = 10;
    pub const EXPRESSION: SymbolId = 11;
    pub const VALUE: SymbolId = 12;
}

/// The scenario grammar:
///
/// ```text
/// <Equality>   ::= <Expression> '==' <Expression>
/// <Expression> ::= <Value> Operator <Value> | <Value>
/// <Value>      ::= Identifier | Constant
/// ```
///
/// with whitespace skipped and a Character/Closed `/* ... */` comment
/// group whose token is skippable.
pub fn expr_grammar() -> Grammar {
    let mut symbols = vec![
        Symbol::new("EOF", SymbolKind::EndOfFile),
        Symbol::new("Error", SymbolKind::Error),
        Symbol::new("Whitespace", SymbolKind::Skippable),
        Symbol::new("Identifier", SymbolKind::Terminal),
        Symbol::new("Constant", SymbolKind::Terminal),
        Symbol::new("Operator", SymbolKind::Terminal),
        Symbol::new("==", SymbolKind::Terminal),
        Symbol::new("CommentStart", SymbolKind::GroupStart),
        Symbol::new("CommentEnd", SymbolKind::GroupEnd),
        Symbol::new("Comment", SymbolKind::Skippable),
        Symbol::new("Equality", SymbolKind::NonTerminal),
        Symbol::new("Expression", SymbolKind::NonTerminal),
        Symbol::new("Value", SymbolKind::NonTerminal),
    ];
    symbols[expr::COMMENT_START as usize].group = Some(0);
    symbols[expr::COMMENT_END as usize].group = Some(0);

    let charsets = vec![
        Charset::from_chars("abcdefghijklmnopqrstuvwxyz"), // 0 letters
        Charset::from_chars("0123456789"),                 // 1 digits
        Charset::from_chars("+-"),                         // 2 plain operators
        Charset::from_chars("/"),                          // 3
        Charset::from_chars("*"),                          // 4
        Charset::from_chars("="),                          // 5
        Charset::from_chars(" \t\r\n"),                    // 6 blanks
    ];

    let dfa_states = vec![
        // 0: dispatch
        DfaState::new(
            None,
            edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)]),
        ),
        DfaState::new(Some(expr::IDENTIFIER), edges(&[(0, 1)])),
        DfaState::new(Some(expr::CONSTANT), edges(&[(1, 2)])),
        DfaState::new(Some(expr::OPERATOR), Vec::new()),
        // '/' is an operator unless '*' follows
        DfaState::new(Some(expr::OPERATOR), edges(&[(4, 8)])),
        // '*' is an operator unless '/' follows
        DfaState::new(Some(expr::OPERATOR), edges(&[(3, 9)])),
        // lone '=' accepts nothing
        DfaState::new(None, edges(&[(5, 10)])),
        DfaState::new(Some(expr::WHITESPACE), edges(&[(6, 7)])),
        DfaState::new(Some(expr::COMMENT_START), Vec::new()),
        DfaState::new(Some(expr::COMMENT_END), Vec::new()),
        DfaState::new(Some(expr::EQ_EQ), Vec::new()),
    ];

    let rules = vec![
        // 0: <Equality> ::= <Expression> '==' <Expression>
        Rule::new(expr::EQUALITY, vec![expr::EXPRESSION, expr::EQ_EQ, expr::EXPRESSION]),
        // 1: <Expression> ::= <Value> Operator <Value>
        Rule::new(expr::EXPRESSION, vec![expr::VALUE, expr::OPERATOR, expr::VALUE]),
        // 2: <Expression> ::= <Value>
        Rule::new(expr::EXPRESSION, vec![expr::VALUE]),
        // 3: <Value> ::= Identifier
        Rule::new(expr::VALUE, vec![expr::IDENTIFIER]),
        // 4: <Value> ::= Constant
        Rule::new(expr::VALUE, vec![expr::CONSTANT]),
    ];

    use LalrAction::{Accept, Goto, Reduce, Shift};
    let lalr_states = vec![
        state(&[
            ("Identifier", Shift(1)),
            ("Constant", Shift(2)),
            ("Equality", Goto(3)),
            ("Expression", Goto(4)),
            ("Value", Goto(5)),
        ]),
        state(&[("Operator", Reduce(3)), ("==", Reduce(3)), ("EOF", Reduce(3))]),
        state(&[("Operator", Reduce(4)), ("==", Reduce(4)), ("EOF", Reduce(4))]),
        state(&[("EOF", Accept)]),
        state(&[("==", Shift(6))]),
        state(&[("Operator", Shift(7)), ("==", Reduce(2)), ("EOF", Reduce(2))]),
        state(&[
            ("Identifier", Shift(1)),
            ("Constant", Shift(2)),
            ("Expression", Goto(8)),
            ("Value", Goto(5)),
        ]),
        state(&[
            ("Identifier", Shift(1)),
            ("Constant", Shift(2)),
            ("Value", Goto(9)),
        ]),
        state(&[("EOF", Reduce(0))]),
        state(&[("==", Reduce(1)), ("EOF", Reduce(1))]),
    ];

    let groups = vec![Group {
        name: "Comment Block".to_string(),
        container: expr::COMMENT,
        start: expr::COMMENT_START,
        end: expr::COMMENT_END,
        advance: AdvanceMode::Character,
        ending: EndingMode::Closed,
        nestable: Vec::new(),
    }];

    Grammar::from_parts(GrammarParts {
        version: Some(TableVersion::V5),
        parameters: IndexMap::new(),
        charsets,
        symbols,
        dfa_states,
        lalr_states,
        rules,
        groups,
        dfa_start: 0,
        lalr_start: 0,
    })
}

/// Symbol ids of [`group_grammar`].
pub mod grp {
    use auric_core::SymbolId;

    pub const EOF: SymbolId = 0;
    pub const WHITESPACE: SymbolId = 1;
    pub const NEWLINE: SymbolId = 2;
    pub const IDENTIFIER: SymbolId = 3;
    pub const BLOCK_START: SymbolId = 4;
    pub const BLOCK_END: SymbolId = 5;
    pub const BLOCK: SymbolId = 6;
    pub const DASH_DASH: SymbolId = 7;
    pub const LINE: SymbolId = 8;
}

/// A lexer-only grammar with two groups:
///
/// - `{ ... }` blocks: Token advance, Closed, admitting blocks and
///   line comments inside;
/// - `-- ...` line comments: Character advance, Open, ended by the
///   NewLine terminal.
pub fn group_grammar() -> Grammar {
    let mut symbols = vec![
        Symbol::new("EOF", SymbolKind::EndOfFile),
        Symbol::new("Whitespace", SymbolKind::Skippable),
        Symbol::new("NewLine", SymbolKind::Terminal),
        Symbol::new("Identifier", SymbolKind::Terminal),
        Symbol::new("BlockStart", SymbolKind::GroupStart),
        Symbol::new("BlockEnd", SymbolKind::GroupEnd),
        Symbol::new("Block", SymbolKind::Skippable),
        Symbol::new("DashDash", SymbolKind::GroupStart),
        Symbol::new("LineComment", SymbolKind::Skippable),
    ];
    symbols[grp::BLOCK_START as usize].group = Some(0);
    symbols[grp::BLOCK_END as usize].group = Some(0);
    symbols[grp::DASH_DASH as usize].group = Some(1);

    let charsets = vec![
        Charset::from_chars(" "),                          // 0
        Charset::from_chars("\n"),                         // 1
        Charset::from_chars("abcdefghijklmnopqrstuvwxyz"), // 2
        Charset::from_chars("{"),                          // 3
        Charset::from_chars("}"),                          // 4
        Charset::from_chars("-"),                          // 5
    ];

    let dfa_states = vec![
        DfaState::new(
            None,
            edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]),
        ),
        DfaState::new(Some(grp::WHITESPACE), edges(&[(0, 1)])),
        DfaState::new(Some(grp::NEWLINE), Vec::new()),
        DfaState::new(Some(grp::IDENTIFIER), edges(&[(2, 3)])),
        DfaState::new(Some(grp::BLOCK_START), Vec::new()),
        DfaState::new(Some(grp::BLOCK_END), Vec::new()),
        DfaState::new(None, edges(&[(5, 7)])),
        DfaState::new(Some(grp::DASH_DASH), Vec::new()),
    ];

    let groups = vec![
        Group {
            name: "Block".to_string(),
            container: grp::BLOCK,
            start: grp::BLOCK_START,
            end: grp::BLOCK_END,
            advance: AdvanceMode::Token,
            ending: EndingMode::Closed,
            nestable: vec![0, 1],
        },
        Group {
            name: "Line Comment".to_string(),
            container: grp::LINE,
            start: grp::DASH_DASH,
            end: grp::NEWLINE,
            advance: AdvanceMode::Character,
            ending: EndingMode::Open,
            nestable: Vec::new(),
        },
    ];

    Grammar::from_parts(GrammarParts {
        version: Some(TableVersion::V5),
        parameters: IndexMap::new(),
        charsets,
        symbols,
        dfa_states,
        lalr_states: vec![LalrState::default()],
        rules: Vec::new(),
        groups,
        dfa_start: 0,
        lalr_start: 0,
    })
}
