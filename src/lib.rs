//! qdict — quick dictionary lookup.
//!
//! The engine lives in `qdict-core` and dictionary loading in `qdict-source`.
//! This crate adds the terminal presentation and the `qdict` binary.
//!
//! # Architecture
//!
//! ```text
//! JsonSource ──► Vocabulary ──► search ──► TableRenderer ──► stdout
//!      ▲                          ▲
//!   Config                      query (args or stdin lines)
//! ```

pub mod render;
pub mod session;

pub use render::TableRenderer;
pub use session::{interactive, lookup, Overrides};
