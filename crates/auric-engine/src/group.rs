//! The group engine: nestable lexical regions emitted as one token.
//!
//! Block comments, line comments and strings are lexed here. The
//! interior of a group is still scanned by the DFA, but everything
//! between the start and end tokens collapses into a single container
//! token; nested groups and (in token-advance groups) interior tokens
//! are recorded as the container's children.

use auric_core::{AdvanceMode, EndingMode, Grammar, GroupId, SymbolKind};

use crate::error::{GroupError, OpenFrame};
use crate::lexer::{Scan, scan};
use crate::source::Source;
use crate::token::Token;

/// One open group on the scanning stack.
struct GroupFrame {
    group: GroupId,
    /// Where the group's start token began.
    start: usize,
    children: Vec<Token>,
}

impl GroupFrame {
    fn close(self, grammar: &Grammar, source: &Source, end: usize) -> Token {
        Token {
            symbol: grammar.group(self.group).container,
            text: source.slice(self.start, end),
            position: self.start,
            children: self.children,
        }
    }
}

/// Scan out a whole group, starting from its already-lexed start token.
///
/// Returns the container token and the position scanning ended at. The
/// position excludes a closing newline: a "NewLine"-named end symbol
/// settles the group but is left for the next lex.
pub(crate) fn scan_group(
    source: &Source,
    opening: Token,
    group: GroupId,
    grammar: &Grammar,
) -> Result<(Token, usize), GroupError> {
    let mut position = opening.position + opening.len();
    let mut stack = vec![GroupFrame {
        group,
        start: opening.position,
        children: Vec::new(),
    }];

    while position < source.len() {
        let token = match scan(source, position, grammar) {
            Scan::Token(token) => token,
            // Groups tolerate arbitrary content; step over the gap.
            // This holds even in token-advance groups, to guarantee
            // progress.
            Scan::NoMatch => {
                position += 1;
                continue;
            }
            Scan::EndOfInput => break,
        };

        let top = stack.last().expect("group stack is never empty mid-scan");
        let top_group = grammar.group(top.group);
        let symbol = grammar.symbol(token.symbol);

        // A start token for a group the current one admits: descend.
        if symbol.kind == SymbolKind::GroupStart
            && symbol.group.is_some_and(|nested| top_group.can_nest(nested))
        {
            stack.push(GroupFrame {
                group: symbol.group.expect("group start symbol carries its group"),
                start: token.position,
                children: Vec::new(),
            });
            position = token.position + token.len();
            continue;
        }

        // The current group's end symbol: settle this frame.
        if symbol.name == grammar.symbol(top_group.end).name {
            let newline_end = symbol.name_eq_ignore_case("NewLine");
            let end = if newline_end {
                token.position
            } else {
                token.position + token.len()
            };
            let closed = stack
                .pop()
                .expect("group stack is never empty mid-scan")
                .close(grammar, source, end);
            position = end;
            match stack.last_mut() {
                Some(parent) => parent.children.push(closed),
                None => return Ok((closed, position)),
            }
            continue;
        }

        // Plain interior content.
        match top_group.advance {
            AdvanceMode::Character => position += 1,
            AdvanceMode::Token => {
                position = token.position + token.len();
                stack
                    .last_mut()
                    .expect("group stack is never empty mid-scan")
                    .children
                    .push(token);
            }
        }
    }

    // Input exhausted with frames still open: Open-mode frames settle
    // at end of input, any Closed-mode frame is an error.
    while let Some(frame) = stack.pop() {
        let ending = grammar.group(frame.group).ending;
        if ending == EndingMode::Closed {
            let mut open_frames = vec![OpenFrame {
                group: frame.group,
                position: frame.start,
            }];
            open_frames.extend(stack.iter().rev().map(|f| OpenFrame {
                group: f.group,
                position: f.start,
            }));
            return Err(GroupError { open_frames });
        }
        let closed = frame.close(grammar, source, source.len());
        match stack.last_mut() {
            Some(parent) => parent.children.push(closed),
            None => return Ok((closed, source.len())),
        }
    }

    unreachable!("group stack settled without producing a token")
}
