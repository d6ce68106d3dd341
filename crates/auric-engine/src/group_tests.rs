//! Tests for the group engine.

use super::error::TokenError;
use super::fixtures::{expr, expr_grammar, group_grammar, grp};
use super::lexer::next_token;
use super::source::Source;
use super::token::Token;

fn lex(grammar: &auric_core::Grammar, input: &str, position: usize) -> (Token, usize) {
    next_token(&Source::new(input), position, grammar).unwrap()
}

fn group_error(grammar: &auric_core::Grammar, input: &str) -> super::error::GroupError {
    match next_token(&Source::new(input), 0, grammar).unwrap_err() {
        TokenError::Group(err) => err,
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn token_advance_block_records_children() {
    let grammar = group_grammar();
    let (token, next) = lex(&grammar, "{ab cd}x", 0);

    assert_eq!(token.symbol, grp::BLOCK);
    assert_eq!(token.text, "{ab cd}");
    assert_eq!(token.position, 0);
    assert_eq!(next, 7);

    let kinds: Vec<_> = token.children.iter().map(|c| c.symbol).collect();
    assert_eq!(kinds, vec![grp::IDENTIFIER, grp::WHITESPACE, grp::IDENTIFIER]);
    assert_eq!(token.children[0].text, "ab");
    assert_eq!(token.children[2].text, "cd");
}

#[test]
fn blocks_nest_inside_blocks() {
    let grammar = group_grammar();
    let (token, next) = lex(&grammar, "{a{b}c}", 0);

    assert_eq!(token.text, "{a{b}c}");
    assert_eq!(next, 7);
    assert_eq!(token.children.len(), 3);

    let nested = &token.children[1];
    assert_eq!(nested.symbol, grp::BLOCK);
    assert_eq!(nested.text, "{b}");
    assert_eq!(nested.position, 2);
    assert_eq!(nested.children.len(), 1);
    assert_eq!(nested.children[0].text, "b");
}

#[test]
fn character_advance_collects_no_children() {
    let grammar = expr_grammar();
    let (token, next) = lex(&grammar, "/*a+b*/c", 0);

    assert_eq!(token.symbol, expr::COMMENT);
    assert_eq!(token.text, "/*a+b*/");
    assert_eq!(next, 7);
    assert!(token.children.is_empty());
}

#[test]
fn unlexable_content_advances_one_char() {
    let grammar = group_grammar();
    let (token, _) = lex(&grammar, "{a@@b}", 0);
    assert_eq!(token.text, "{a@@b}");
    let texts: Vec<_> = token.children.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn newline_settles_line_comment_without_being_consumed() {
    let grammar = group_grammar();
    let source = Source::new("--hi\nx");

    let (token, next) = next_token(&source, 0, &grammar).unwrap();
    assert_eq!(token.symbol, grp::LINE);
    assert_eq!(token.text, "--hi");
    assert_eq!(next, 4);

    // The newline is still there for the next lex.
    let (token, next) = next_token(&source, next, &grammar).unwrap();
    assert_eq!(token.symbol, grp::NEWLINE);
    assert_eq!(token.text, "\n");
    assert_eq!(next, 5);
}

#[test]
fn open_group_settles_at_end_of_input() {
    let grammar = group_grammar();
    let source = Source::new("--trailing");
    let (token, next) = next_token(&source, 0, &grammar).unwrap();
    assert_eq!(token.symbol, grp::LINE);
    assert_eq!(token.text, "--trailing");
    assert_eq!(next, 10);

    let (token, _) = next_token(&source, next, &grammar).unwrap();
    assert_eq!(token.symbol, grp::EOF);
}

#[test]
fn group_start_not_admitted_is_plain_content() {
    let grammar = group_grammar();
    let (token, _) = lex(&grammar, "--a{b\nx", 0);
    // Line comments admit nothing; the brace is swallowed as content.
    assert_eq!(token.symbol, grp::LINE);
    assert_eq!(token.text, "--a{b");
}

#[test]
fn line_comment_nests_inside_block() {
    let grammar = group_grammar();
    let (token, _) = lex(&grammar, "{a--x\n}", 0);

    assert_eq!(token.symbol, grp::BLOCK);
    assert_eq!(token.text, "{a--x\n}");
    let kinds: Vec<_> = token.children.iter().map(|c| c.symbol).collect();
    assert_eq!(kinds, vec![grp::IDENTIFIER, grp::LINE, grp::NEWLINE]);
    assert_eq!(token.children[1].text, "--x");
}

#[test]
fn unclosed_block_is_an_error() {
    let grammar = group_grammar();
    let err = group_error(&grammar, "{ab");
    assert_eq!(err.open_frames.len(), 1);
    assert_eq!(err.open_frames[0].group, 0);
    assert_eq!(err.open_frames[0].position, 0);
}

#[test]
fn nested_unclosed_blocks_report_innermost_first() {
    let grammar = group_grammar();
    let err = group_error(&grammar, "{a{b");
    let positions: Vec<_> = err.open_frames.iter().map(|f| f.position).collect();
    assert_eq!(positions, vec![2, 0]);
}

#[test]
fn open_frame_settles_before_closed_frame_errors() {
    let grammar = group_grammar();
    // The line comment on top is Open and settles; the block below is
    // Closed and still reports.
    let err = group_error(&grammar, "{a--x");
    assert_eq!(err.open_frames.len(), 1);
    assert_eq!(err.open_frames[0].group, 0);
    assert_eq!(err.open_frames[0].position, 0);
}

#[test]
fn unclosed_comment_in_expression_grammar() {
    let grammar = expr_grammar();
    let err = group_error(&grammar, "/* open");
    assert_eq!(err.open_frames.len(), 1);
    assert_eq!(err.open_frames[0].position, 0);
}
