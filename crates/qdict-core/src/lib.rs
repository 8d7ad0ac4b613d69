//! qdict-core — matching and ranking engine for qdict.
//!
//! This crate takes a fully loaded [`Vocabulary`] and answers free-text
//! queries against it. It performs no I/O during a search; loading
//! dictionaries and presenting results live in other crates.
//!
//! # Architecture
//!
//! ```text
//! query ──► Pattern ──► search ──► SearchResults ──► ResultAssembler
//!                         │  ▲
//!                         ▼  │
//!                     Vocabulary    distance (ranks partial hits)
//! ```

pub mod assemble;
pub mod config;
pub mod distance;
pub mod pattern;
pub mod search;
pub mod vocabulary;

pub use assemble::{Collect, ResultAssembler};
pub use distance::distance;
pub use pattern::Pattern;
pub use search::{search, search_with, EmptyQueryPolicy, Hit, MatchKind, SearchOptions, SearchResults};
pub use vocabulary::{Vocabulary, VocabularyBuilder};
