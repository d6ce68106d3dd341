//! Character sets labeling DFA edges.

use serde::{Deserialize, Serialize};

/// Charset index into the grammar's charset table.
pub type CharsetId = u16;

/// An inclusive codepoint range, as stored in v5 `c` records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRange {
    pub first: u32,
    pub last: u32,
}

impl CharRange {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.first <= codepoint && codepoint <= self.last
    }
}

/// A predicate on a single input character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    /// v1: every member character, spelled out.
    Chars(Vec<char>),
    /// v5: ordered codepoint ranges tagged with a codepage.
    Ranges { codepage: u16, ranges: Vec<CharRange> },
}

impl Charset {
    /// Build an enumerated charset from a string of members.
    pub fn from_chars(chars: &str) -> Self {
        Self::Chars(chars.chars().collect())
    }

    /// Membership test for one input character.
    ///
    /// Range membership converts the character to its Unicode scalar
    /// value; builder output uses the Unicode codepage.
    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::Chars(chars) => chars.contains(&ch),
            Self::Ranges { ranges, .. } => {
                let codepoint = ch as u32;
                ranges.iter().any(|r| r.contains(codepoint))
            }
        }
    }
}
