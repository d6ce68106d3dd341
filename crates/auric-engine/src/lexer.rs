//! Longest-match DFA scanning.

use auric_core::{Grammar, SymbolId, SymbolKind};

use crate::error::{LexError, TokenError};
use crate::group;
use crate::source::Source;
use crate::token::Token;

/// Outcome of one raw DFA walk from a fixed position.
pub(crate) enum Scan {
    /// The longest candidate the automaton accepted.
    Token(Token),
    /// Scanning began at or past the end of input.
    EndOfInput,
    /// No accepting state was ever reached.
    NoMatch,
}

/// Walk the DFA from `position` and keep the last accepting state.
///
/// Edges are tried in declaration order and the first charset that
/// accepts the character wins. The walk continues past shorter
/// candidates until no edge matches, then backtracks to the longest.
pub(crate) fn scan(source: &Source, position: usize, grammar: &Grammar) -> Scan {
    if position >= source.len() {
        return Scan::EndOfInput;
    }

    let mut state = grammar.dfa_start();
    let mut cursor = position;
    let mut candidate: Option<(SymbolId, usize)> = None;

    loop {
        let Some(ch) = source.char_at(cursor) else {
            break;
        };
        let row = grammar.dfa_state(state);
        let Some(edge) = row
            .edges
            .iter()
            .find(|edge| grammar.charset(edge.charset).contains(ch))
        else {
            break;
        };
        state = edge.target;
        cursor += 1;
        if let Some(accept) = grammar.dfa_state(state).accept {
            candidate = Some((accept, cursor));
        }
    }

    match candidate {
        Some((symbol, end)) => {
            Scan::Token(Token::new(symbol, source.slice(position, end), position))
        }
        None => Scan::NoMatch,
    }
}

/// Produce the next token at `position`.
///
/// Pure over the input; the caller threads the returned position into
/// the next call. A token whose symbol opens a group is expanded by the
/// group engine into a single container token. At or past the end of
/// input the grammar's EndOfFile token is returned without advancing.
pub fn next_token(
    source: &Source,
    position: usize,
    grammar: &Grammar,
) -> Result<(Token, usize), TokenError> {
    match scan(source, position, grammar) {
        Scan::EndOfInput => {
            let eof = Token::new(grammar.eof_symbol(), String::new(), source.len());
            Ok((eof, position))
        }
        Scan::NoMatch => Err(LexError { position }.into()),
        Scan::Token(token) => {
            let symbol = grammar.symbol(token.symbol);
            if symbol.kind == SymbolKind::GroupStart {
                if let Some(group) = symbol.group {
                    return group::scan_group(source, token, group, grammar)
                        .map_err(TokenError::Group);
                }
            }
            let end = position + token.len();
            Ok((token, end))
        }
    }
}
