#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Binary grammar-table format and loader.
//!
//! Table files are produced by the external GOLD-format grammar builder
//! in two generations: v1 (`.cgt`) and v5 (`.egt`). Both are a UTF-16
//! header string followed by a flat sequence of tagged records.
//! [`load`] decodes the records in one pass, then resolves every
//! cross-reference by index into a linked [`Grammar`](auric_core::Grammar).

mod error;
mod loader;
mod record;
mod wire;


pub use error::{LoadError, LoadWarning};
pub use loader::{load, load_file, load_with_warnings};
pub use wire::{Entry, TableReader, TableWriter, tag};
