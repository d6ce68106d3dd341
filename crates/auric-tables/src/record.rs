//! Phase one of loading: records decoded to index form.
//!
//! Nothing is resolved here. Raw records keep the indices the file
//! spells out, plus the byte offset of their record marker so phase two
//! can report resolution failures against the right location.

use indexmap::IndexMap;

use auric_core::param;

use crate::error::LoadError;
use crate::wire::TableReader;

#[derive(Debug)]
pub struct RawSymbol {
    pub index: u16,
    pub name: String,
    pub kind: u16,
    pub offset: usize,
}

#[derive(Debug)]
pub enum RawCharsetBody {
    /// v1 `C`: the member characters.
    Chars(String),
    /// v5 `c`: codepage plus inclusive codepoint pairs.
    Ranges {
        codepage: u16,
        ranges: Vec<(u16, u16)>,
    },
}

#[derive(Debug)]
pub struct RawCharset {
    pub index: u16,
    pub body: RawCharsetBody,
    pub offset: usize,
}

#[derive(Debug)]
pub struct RawDfaState {
    pub index: u16,
    pub accept: Option<u16>,
    /// (charset index, target state index) in file order.
    pub edges: Vec<(u16, u16)>,
    pub offset: usize,
}

#[derive(Debug)]
pub struct RawLalrEntry {
    pub symbol: u16,
    pub action: u16,
    pub value: u16,
}

#[derive(Debug)]
pub struct RawLalrState {
    pub index: u16,
    pub entries: Vec<RawLalrEntry>,
    pub offset: usize,
}

#[derive(Debug)]
pub struct RawRule {
    pub index: u16,
    pub produces: u16,
    pub consumes: Vec<u16>,
    pub offset: usize,
}

#[derive(Debug)]
pub struct RawGroup {
    pub index: u16,
    pub name: String,
    pub container: u16,
    pub start: u16,
    pub end: u16,
    pub advance: u16,
    pub ending: u16,
    pub nestable: Vec<u16>,
    pub offset: usize,
}

/// Advisory pre-size hints from `T`/`t` records.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counts {
    pub symbols: u16,
    pub charsets: u16,
    pub rules: u16,
    pub dfa_states: u16,
    pub lalr_states: u16,
    pub groups: u16,
}

/// Everything phase one collects, in file order.
#[derive(Debug, Default)]
pub struct RawTables {
    pub parameters: IndexMap<String, String>,
    pub counts: Counts,
    pub dfa_start: u16,
    pub lalr_start: u16,
    /// Offset of the `I` record, for start-state bounds errors.
    pub start_offset: usize,
    pub charsets: Vec<RawCharset>,
    pub symbols: Vec<RawSymbol>,
    pub dfa_states: Vec<RawDfaState>,
    pub lalr_states: Vec<RawLalrState>,
    pub rules: Vec<RawRule>,
    pub groups: Vec<RawGroup>,
}

/// Decode every record after the header.
pub fn parse_records(reader: &mut TableReader<'_>) -> Result<RawTables, LoadError> {
    let mut raw = RawTables::default();

    while !reader.at_end() {
        let record_offset = reader.offset();
        let field_count = reader.read_record_len()?;
        if field_count == 0 {
            return Err(LoadError::Truncated {
                offset: record_offset,
            });
        }
        let type_offset = reader.offset();
        let kind = reader.expect_byte()?;
        let rest = field_count - 1;

        match kind {
            b'P' => parse_parameters(reader, rest, record_offset, &mut raw)?,
            b'p' => parse_property(reader, rest, &mut raw)?,
            b'T' | b't' => parse_counts(reader, rest, &mut raw)?,
            b'I' => {
                raw.dfa_start = reader.expect_int()?;
                raw.lalr_start = reader.expect_int()?;
                raw.start_offset = record_offset;
                skip_fields(reader, rest.saturating_sub(2))?;
            }
            b'C' => {
                let index = reader.expect_int()?;
                let chars = reader.expect_string()?;
                skip_fields(reader, rest.saturating_sub(2))?;
                raw.charsets.push(RawCharset {
                    index,
                    body: RawCharsetBody::Chars(chars),
                    offset: record_offset,
                });
            }
            b'c' => raw.charsets.push(parse_ranges(reader, rest, record_offset)?),
            b'S' => {
                let index = reader.expect_int()?;
                let name = reader.expect_string()?;
                let kind = reader.expect_int()?;
                skip_fields(reader, rest.saturating_sub(3))?;
                raw.symbols.push(RawSymbol {
                    index,
                    name,
                    kind,
                    offset: record_offset,
                });
            }
            b'D' => raw.dfa_states.push(parse_dfa_state(reader, rest, record_offset)?),
            b'L' => raw
                .lalr_states
                .push(parse_lalr_state(reader, rest, record_offset)?),
            b'R' => raw.rules.push(parse_rule(reader, rest, record_offset)?),
            b'g' => raw.groups.push(parse_group(reader, rest, record_offset)?),
            // Reserved for future use; skip the payload.
            b'n' => skip_fields(reader, rest)?,
            other => {
                return Err(LoadError::UnknownRecord {
                    tag: other as char,
                    offset: type_offset,
                });
            }
        }
    }

    Ok(raw)
}

fn skip_fields(reader: &mut TableReader<'_>, count: u16) -> Result<(), LoadError> {
    for _ in 0..count {
        reader.skip_field()?;
    }
    Ok(())
}

/// v1 `P`: six fixed fields written under canonical parameter keys.
fn parse_parameters(
    reader: &mut TableReader<'_>,
    rest: u16,
    record_offset: usize,
    raw: &mut RawTables,
) -> Result<(), LoadError> {
    if rest < 6 {
        return Err(LoadError::Truncated {
            offset: record_offset,
        });
    }
    let name = reader.expect_string()?;
    let version = reader.expect_string()?;
    let author = reader.expect_string()?;
    let about = reader.expect_string()?;
    let case_sensitive = reader.expect_bool()?;
    let start_symbol = reader.expect_int()?;
    skip_fields(reader, rest - 6)?;

    raw.parameters.insert(param::NAME.to_string(), name);
    raw.parameters.insert(param::VERSION.to_string(), version);
    raw.parameters.insert(param::AUTHOR.to_string(), author);
    raw.parameters.insert(param::ABOUT.to_string(), about);
    raw.parameters.insert(
        param::CASE_SENSITIVE.to_string(),
        if case_sensitive { "True" } else { "False" }.to_string(),
    );
    raw.parameters
        .insert(param::START_SYMBOL.to_string(), start_symbol.to_string());
    Ok(())
}

/// v5 `p`: [reserved, name, value].
fn parse_property(
    reader: &mut TableReader<'_>,
    rest: u16,
    raw: &mut RawTables,
) -> Result<(), LoadError> {
    reader.skip_field()?;
    let name = reader.expect_string()?;
    let value = reader.expect_string()?;
    skip_fields(reader, rest.saturating_sub(3))?;
    raw.parameters.insert(name, value);
    Ok(())
}

/// `T`/`t`: integer counts in fixed order, groups only present in v5.
fn parse_counts(
    reader: &mut TableReader<'_>,
    rest: u16,
    raw: &mut RawTables,
) -> Result<(), LoadError> {
    let mut values = [0u16; 6];
    for slot in values.iter_mut().take(rest as usize) {
        *slot = reader.expect_int()?;
    }
    if rest > 6 {
        skip_fields(reader, rest - 6)?;
    }
    raw.counts = Counts {
        symbols: values[0],
        charsets: values[1],
        rules: values[2],
        dfa_states: values[3],
        lalr_states: values[4],
        groups: values[5],
    };
    Ok(())
}

/// v5 `c`: index, codepage, range count, reserved, then codepoint pairs.
fn parse_ranges(
    reader: &mut TableReader<'_>,
    rest: u16,
    record_offset: usize,
) -> Result<RawCharset, LoadError> {
    let index = reader.expect_int()?;
    let codepage = reader.expect_int()?;
    let range_count = reader.expect_int()?;
    reader.skip_field()?;

    if rest as u32 != 4 + range_count as u32 * 2 {
        return Err(LoadError::Truncated {
            offset: record_offset,
        });
    }
    let mut ranges = Vec::with_capacity(range_count as usize);
    for _ in 0..range_count {
        let first = reader.expect_int()?;
        let last = reader.expect_int()?;
        ranges.push((first, last));
    }
    Ok(RawCharset {
        index,
        body: RawCharsetBody::Ranges { codepage, ranges },
        offset: record_offset,
    })
}

/// `D`: index, is-final, result symbol, reserved, then edge triples.
fn parse_dfa_state(
    reader: &mut TableReader<'_>,
    rest: u16,
    record_offset: usize,
) -> Result<RawDfaState, LoadError> {
    if rest < 4 || (rest - 4) % 3 != 0 {
        return Err(LoadError::Truncated {
            offset: record_offset,
        });
    }
    let index = reader.expect_int()?;
    let is_final = reader.expect_bool()?;
    let result = reader.expect_int()?;
    reader.skip_field()?;

    let edge_count = (rest - 4) / 3;
    let mut edges = Vec::with_capacity(edge_count as usize);
    for _ in 0..edge_count {
        let charset = reader.expect_int()?;
        let target = reader.expect_int()?;
        reader.skip_field()?;
        edges.push((charset, target));
    }
    Ok(RawDfaState {
        index,
        accept: is_final.then_some(result),
        edges,
        offset: record_offset,
    })
}

/// `L`: index, reserved, then look-ahead quadruples.
fn parse_lalr_state(
    reader: &mut TableReader<'_>,
    rest: u16,
    record_offset: usize,
) -> Result<RawLalrState, LoadError> {
    if rest < 2 || (rest - 2) % 4 != 0 {
        return Err(LoadError::Truncated {
            offset: record_offset,
        });
    }
    let index = reader.expect_int()?;
    reader.skip_field()?;

    let entry_count = (rest - 2) / 4;
    let mut entries = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        let symbol = reader.expect_int()?;
        let action = reader.expect_int()?;
        let value = reader.expect_int()?;
        reader.skip_field()?;
        entries.push(RawLalrEntry {
            symbol,
            action,
            value,
        });
    }
    Ok(RawLalrState {
        index,
        entries,
        offset: record_offset,
    })
}

/// `R`: index, produced symbol, reserved, then consumed symbols.
fn parse_rule(
    reader: &mut TableReader<'_>,
    rest: u16,
    record_offset: usize,
) -> Result<RawRule, LoadError> {
    if rest < 3 {
        return Err(LoadError::Truncated {
            offset: record_offset,
        });
    }
    let index = reader.expect_int()?;
    let produces = reader.expect_int()?;
    reader.skip_field()?;

    let mut consumes = Vec::with_capacity((rest - 3) as usize);
    for _ in 0..rest - 3 {
        consumes.push(reader.expect_int()?);
    }
    Ok(RawRule {
        index,
        produces,
        consumes,
        offset: record_offset,
    })
}

/// v5 `g`: fixed head, reserved, nesting count, then group indices.
fn parse_group(
    reader: &mut TableReader<'_>,
    rest: u16,
    record_offset: usize,
) -> Result<RawGroup, LoadError> {
    if rest < 9 {
        return Err(LoadError::Truncated {
            offset: record_offset,
        });
    }
    let index = reader.expect_int()?;
    let name = reader.expect_string()?;
    let container = reader.expect_int()?;
    let start = reader.expect_int()?;
    let end = reader.expect_int()?;
    let advance = reader.expect_int()?;
    let ending = reader.expect_int()?;
    reader.skip_field()?;
    let nesting_count = reader.expect_int()?;

    if rest as u32 != 9 + nesting_count as u32 {
        return Err(LoadError::Truncated {
            offset: record_offset,
        });
    }
    let mut nestable = Vec::with_capacity(nesting_count as usize);
    for _ in 0..nesting_count {
        nestable.push(reader.expect_int()?);
    }
    Ok(RawGroup {
        index,
        name,
        container,
        start,
        end,
        advance,
        ending,
        nestable,
        offset: record_offset,
    })
}
