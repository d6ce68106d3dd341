//! Table load failures and warnings.

use std::io;

/// A malformed or unreadable table file.
///
/// Every variant decoded from bytes carries the byte offset of the
/// failure: for field-level problems the offset of the offending tag,
/// for index resolution problems the offset of the record that holds
/// the bad index.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not begin with a GOLD table header string.
    #[error("not a GOLD parser table file (offset {offset})")]
    BadHeader { offset: usize },

    /// The header names a table format this engine does not speak.
    #[error("unsupported table version {version} (offset {offset})")]
    UnsupportedVersion { version: u16, offset: usize },

    /// A record opened with an unrecognized type byte.
    #[error("unknown record type '{tag}' (offset {offset})")]
    UnknownRecord { tag: char, offset: usize },

    /// A field carried a different tag than the record layout calls for.
    #[error("expected field tag '{expected}', found '{found}' (offset {offset})")]
    UnexpectedField {
        expected: char,
        found: char,
        offset: usize,
    },

    /// The file ended in the middle of a record or field.
    #[error("table file truncated (offset {offset})")]
    Truncated { offset: usize },

    /// A record referenced an entry no record defines.
    #[error("index {index} out of range (record at offset {offset})")]
    IndexOutOfRange { index: u16, offset: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Non-fatal oddities noticed while loading.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadWarning {
    /// A v1 grammar defines a line-comment symbol but no symbol named
    /// "NewLine" to close it; no line-comment group was synthesized.
    #[error("line-comment symbol has no newline symbol to close it; line comments will not lex")]
    LineCommentWithoutNewline,
}
