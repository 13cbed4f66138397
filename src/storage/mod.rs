//! Persistence and file exchange.
//!
//! This module holds the key-value backends the session saves into and the
//! JSON document used both for saved state and for import/export files.

mod document;
mod key_value;

pub use document::{ImportSummary, IncomingDocument, VacationDocument, export_file_name};
pub use key_value::{FileStore, KeyValueStore, MemoryStore};
