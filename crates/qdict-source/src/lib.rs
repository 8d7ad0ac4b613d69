//! qdict-source — vocabulary source adapters for qdict.
//!
//! Each source reads dictionary data from somewhere and produces an immutable
//! [`qdict_core::Vocabulary`]. The engine never sees how entries were loaded.

pub mod error;
pub mod json;

pub use error::SourceError;
pub use json::{DictRecord, JsonSource};

use qdict_core::Vocabulary;

/// Trait implemented by each vocabulary source.
pub trait VocabularySource {
    type Record;

    /// Read the whole source and build the vocabulary.
    fn load(&self) -> Result<Vocabulary<Self::Record>, SourceError>;
}
