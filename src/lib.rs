//! KWIC - key-word-in-context indexing
//!
//! Builds every circular shift of every line of a document and emits them
//! alphabetized. Shifting and sorting are read-only views over an
//! [`AddressableText`]; no line content is copied after ingestion.

pub mod cli;
pub mod compare;
pub mod config;
pub mod config_paths;
pub mod emit;
pub mod error;
pub mod index;
pub mod ingest;
pub mod text;
pub mod tracing;

// Re-export commonly used types
pub use config::{KwicConfig, RunConfig};
pub use error::{KwicError, Result};
pub use text::{AddressableText, LineStore, LineStoreBuilder, ShiftView, SortedView, StructureError};
