//! Phase two of loading: place records by index and link the grammar.
//!
//! Records may reference records not yet seen, so the loader first
//! places every raw record at its explicit index, then substitutes and
//! bounds-checks every cross-reference exactly once. The [`Grammar`]
//! that comes out is fully linked and immutable.

use std::path::Path;

use auric_core::{
    AdvanceMode, CharRange, Charset, DfaEdge, DfaState, EndingMode, Grammar, GrammarParts, Group,
    GroupId, LalrAction, LalrState, Rule, Symbol, SymbolId, SymbolKind, TableVersion,
};
use indexmap::IndexMap;

use crate::error::{LoadError, LoadWarning};
use crate::record::{self, RawCharsetBody, RawTables};
use crate::wire::TableReader;

const HEADER_PREFIX: &str = "GOLD Parser Tables/v";

/// Decode a table file into a linked grammar.
pub fn load(bytes: &[u8]) -> Result<Grammar, LoadError> {
    load_with_warnings(bytes).map(|(grammar, _)| grammar)
}

/// [`load`], surfacing non-fatal warnings alongside the grammar.
pub fn load_with_warnings(bytes: &[u8]) -> Result<(Grammar, Vec<LoadWarning>), LoadError> {
    let mut reader = TableReader::new(bytes);
    let version = parse_header(&mut reader)?;
    let raw = record::parse_records(&mut reader)?;
    link(version, raw, bytes.len())
}

/// Read a table file from disk and decode it.
pub fn load_file(path: impl AsRef<Path>) -> Result<Grammar, LoadError> {
    let bytes = std::fs::read(path)?;
    load(&bytes)
}

/// The identifier string `GOLD Parser Tables/v<N>.0` at offset 0.
fn parse_header(reader: &mut TableReader<'_>) -> Result<TableVersion, LoadError> {
    let header = reader.read_header()?;
    let Some(rest) = header.strip_prefix(HEADER_PREFIX) else {
        return Err(LoadError::BadHeader { offset: 0 });
    };
    let Some(number) = rest.strip_suffix(".0") else {
        return Err(LoadError::BadHeader { offset: 0 });
    };
    let Ok(version) = number.parse::<u16>() else {
        return Err(LoadError::BadHeader { offset: 0 });
    };
    match version {
        1 => Ok(TableVersion::V1),
        5 => Ok(TableVersion::V5),
        other => Err(LoadError::UnsupportedVersion {
            version: other,
            offset: 0,
        }),
    }
}

/// Put a raw record into its explicit slot, growing as needed.
fn place<T>(slots: &mut Vec<Option<T>>, index: u16, value: T) {
    let index = index as usize;
    if index >= slots.len() {
        slots.resize_with(index + 1, || None);
    }
    slots[index] = Some(value);
}

/// A filled slot, or the file ended without supplying the record.
fn filled<T>(slot: Option<T>, file_len: usize) -> Result<T, LoadError> {
    slot.ok_or(LoadError::Truncated { offset: file_len })
}

fn check_index(index: u16, len: usize, offset: usize) -> Result<(), LoadError> {
    if (index as usize) < len {
        Ok(())
    } else {
        Err(LoadError::IndexOutOfRange { index, offset })
    }
}

fn link(
    version: TableVersion,
    raw: RawTables,
    file_len: usize,
) -> Result<(Grammar, Vec<LoadWarning>), LoadError> {
    let mut warnings = Vec::new();

    let mut charset_slots = Vec::with_capacity(raw.counts.charsets as usize);
    for charset in raw.charsets {
        place(&mut charset_slots, charset.index, charset);
    }
    let mut symbol_slots = Vec::with_capacity(raw.counts.symbols as usize);
    for symbol in raw.symbols {
        place(&mut symbol_slots, symbol.index, symbol);
    }
    let mut dfa_slots = Vec::with_capacity(raw.counts.dfa_states as usize);
    for state in raw.dfa_states {
        place(&mut dfa_slots, state.index, state);
    }
    let mut lalr_slots = Vec::with_capacity(raw.counts.lalr_states as usize);
    for state in raw.lalr_states {
        place(&mut lalr_slots, state.index, state);
    }
    let mut rule_slots = Vec::with_capacity(raw.counts.rules as usize);
    for rule in raw.rules {
        place(&mut rule_slots, rule.index, rule);
    }
    let mut group_slots = Vec::with_capacity(raw.counts.groups as usize);
    for group in raw.groups {
        place(&mut group_slots, group.index, group);
    }

    let symbol_count = symbol_slots.len();
    let charset_count = charset_slots.len();
    let dfa_count = dfa_slots.len();
    let lalr_count = lalr_slots.len();
    let rule_count = rule_slots.len();
    let group_count = group_slots.len();

    let mut charsets = Vec::with_capacity(charset_count);
    for slot in charset_slots {
        let charset = filled(slot, file_len)?;
        charsets.push(match charset.body {
            RawCharsetBody::Chars(chars) => Charset::from_chars(&chars),
            RawCharsetBody::Ranges { codepage, ranges } => Charset::Ranges {
                codepage,
                ranges: ranges
                    .into_iter()
                    .map(|(first, last)| CharRange::new(first as u32, last as u32))
                    .collect(),
            },
        });
    }

    let mut symbols = Vec::with_capacity(symbol_count);
    for slot in symbol_slots {
        let symbol = filled(slot, file_len)?;
        let kind = SymbolKind::from_code(symbol.kind)
            .unwrap_or_else(|| panic!("corrupt table: unknown symbol kind {}", symbol.kind));
        symbols.push(Symbol::new(symbol.name, kind));
    }

    let mut dfa_states = Vec::with_capacity(dfa_count);
    for slot in dfa_slots {
        let state = filled(slot, file_len)?;
        if let Some(accept) = state.accept {
            check_index(accept, symbol_count, state.offset)?;
        }
        let mut edges = Vec::with_capacity(state.edges.len());
        for (charset, target) in state.edges {
            check_index(charset, charset_count, state.offset)?;
            check_index(target, dfa_count, state.offset)?;
            edges.push(DfaEdge { charset, target });
        }
        dfa_states.push(DfaState::new(state.accept, edges));
    }

    let mut rules = Vec::with_capacity(rule_count);
    for slot in rule_slots {
        let rule = filled(slot, file_len)?;
        check_index(rule.produces, symbol_count, rule.offset)?;
        for &consumed in &rule.consumes {
            check_index(consumed, symbol_count, rule.offset)?;
        }
        rules.push(Rule::new(rule.produces, rule.consumes));
    }

    let mut lalr_states = Vec::with_capacity(lalr_count);
    for slot in lalr_slots {
        let state = filled(slot, file_len)?;
        let mut actions = IndexMap::with_capacity(state.entries.len());
        for entry in state.entries {
            check_index(entry.symbol, symbol_count, state.offset)?;
            let action = match entry.action {
                1 => {
                    check_index(entry.value, lalr_count, state.offset)?;
                    LalrAction::Shift(entry.value)
                }
                2 => {
                    check_index(entry.value, rule_count, state.offset)?;
                    LalrAction::Reduce(entry.value)
                }
                3 => {
                    check_index(entry.value, lalr_count, state.offset)?;
                    LalrAction::Goto(entry.value)
                }
                4 => LalrAction::Accept,
                other => panic!("corrupt table: unknown LALR action type {other}"),
            };
            actions.insert(symbols[entry.symbol as usize].name.clone(), action);
        }
        lalr_states.push(LalrState::new(actions));
    }

    let mut groups = Vec::with_capacity(group_count);
    for slot in group_slots {
        let group = filled(slot, file_len)?;
        check_index(group.container, symbol_count, group.offset)?;
        check_index(group.start, symbol_count, group.offset)?;
        check_index(group.end, symbol_count, group.offset)?;
        for &nested in &group.nestable {
            check_index(nested, group_count, group.offset)?;
        }
        let gid = groups.len() as GroupId;
        symbols[group.start as usize].group = Some(gid);
        symbols[group.end as usize].group = Some(gid);
        groups.push(Group {
            name: group.name,
            container: group.container,
            start: group.start,
            end: group.end,
            advance: match group.advance {
                0 => AdvanceMode::Token,
                1 => AdvanceMode::Character,
                other => panic!("corrupt table: unknown group advance mode {other}"),
            },
            ending: match group.ending {
                0 => EndingMode::Open,
                1 => EndingMode::Closed,
                other => panic!("corrupt table: unknown group ending mode {other}"),
            },
            nestable: group.nestable,
        });
    }

    if version == TableVersion::V1 {
        promote_v1_comment_groups(&mut symbols, &mut groups, &mut warnings);
    }

    check_index(raw.dfa_start, dfa_states.len(), raw.start_offset)?;
    check_index(raw.lalr_start, lalr_states.len(), raw.start_offset)?;

    let grammar = Grammar::from_parts(GrammarParts {
        version: Some(version),
        parameters: raw.parameters,
        charsets,
        symbols,
        dfa_states,
        lalr_states,
        rules,
        groups,
        dfa_start: raw.dfa_start,
        lalr_start: raw.lalr_start,
    });
    Ok((grammar, warnings))
}

/// v1 tables predate `g` records; their comment symbols become groups.
///
/// GroupStart/GroupEnd symbols pair up into a Character/Closed block
/// comment. A CommentLine symbol becomes the start of a Character/Open
/// line comment ending at the grammar's "NewLine" symbol (matched
/// case-insensitively) and is reclassified to GroupStart. Both groups
/// emit a synthetic Skippable "Comment" symbol.
fn promote_v1_comment_groups(
    symbols: &mut Vec<Symbol>,
    groups: &mut Vec<Group>,
    warnings: &mut Vec<LoadWarning>,
) {
    let start = symbols.iter().position(|s| s.kind == SymbolKind::GroupStart);
    let end = symbols.iter().position(|s| s.kind == SymbolKind::GroupEnd);
    let line = symbols.iter().position(|s| s.kind == SymbolKind::CommentLine);
    let newline = symbols.iter().position(|s| s.name_eq_ignore_case("NewLine"));

    let block = start.zip(end);
    if line.is_some() && newline.is_none() {
        warnings.push(LoadWarning::LineCommentWithoutNewline);
    }
    let line = line.zip(newline);
    if block.is_none() && line.is_none() {
        return;
    }

    let container = symbols.len() as SymbolId;
    symbols.push(Symbol::new("Comment", SymbolKind::Skippable));

    if let Some((start, end)) = block {
        let gid = groups.len() as GroupId;
        groups.push(Group {
            name: "Block Comment".to_string(),
            container,
            start: start as SymbolId,
            end: end as SymbolId,
            advance: AdvanceMode::Character,
            ending: EndingMode::Closed,
            nestable: Vec::new(),
        });
        symbols[start].group = Some(gid);
        symbols[end].group = Some(gid);
    }

    if let Some((start, end)) = line {
        let gid = groups.len() as GroupId;
        groups.push(Group {
            name: "Line Comment".to_string(),
            container,
            start: start as SymbolId,
            end: end as SymbolId,
            advance: AdvanceMode::Character,
            ending: EndingMode::Open,
            nestable: Vec::new(),
        });
        symbols[start].kind = SymbolKind::GroupStart;
        symbols[start].group = Some(gid);
    }
}
