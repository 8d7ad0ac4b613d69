//! The seam between the engine and whatever presents its results.
//!
//! The engine hands a finished [`SearchResults`] to a [`ResultAssembler`] and
//! keeps nothing. Implementations decide what "presenting" means: writing a
//! table, filling a widget, collecting into a `Vec` for a test.

use crate::search::SearchResults;

/// Consumes ordered search results for one query.
pub trait ResultAssembler<R> {
    type Output;

    /// Called once per query with the full, already ordered result.
    fn assemble(&mut self, query: &str, results: SearchResults<'_, R>) -> Self::Output;
}

/// Collects owned `(term, record)` pairs, one `Vec` per query.
#[derive(Debug, Default)]
pub struct Collect;

impl<R: Clone> ResultAssembler<R> for Collect {
    type Output = Vec<(String, R)>;

    fn assemble(&mut self, _query: &str, results: SearchResults<'_, R>) -> Self::Output {
        results.into_owned()
    }
}
