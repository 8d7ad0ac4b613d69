//! Search — classify every vocabulary term against a query and rank the hits.
//!
//! For each term, in vocabulary order, the lowercased term is tested against
//! the query's [`Pattern`]:
//!
//! - whole-text match → **exact** hit;
//! - otherwise, match anywhere in the term → **partial** hit, ranked by the
//!   [`distance`] between the *raw* query and the *raw* term;
//! - otherwise the term is skipped.
//!
//! Exact hits come first in vocabulary order, followed by partial hits in
//! ascending distance. Ties keep vocabulary order.
//!
//! Matching ignores case but ranking does not, so `"NEW"` is further from
//! `"new"` than `"New"` is.

use serde::Deserialize;

use crate::distance::distance;
use crate::pattern::Pattern;
use crate::vocabulary::Vocabulary;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// What a query with no tokens (empty or all whitespace) returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// Apply the empty pattern like any other: an empty term is an exact hit
    /// and every other term is a partial hit ranked by its length.
    #[default]
    MatchAll,
    /// Return no hits at all.
    MatchNone,
}

/// Knobs for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub empty_query: EmptyQueryPolicy,
    /// Keep at most this many hits after ordering. `None` keeps all.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// How a term matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Exact,
    /// Tokens found inside the term; `distance` is the edit distance between
    /// the raw query and the raw term.
    Partial { distance: usize },
}

impl MatchKind {
    pub fn is_exact(self) -> bool {
        matches!(self, MatchKind::Exact)
    }
}

/// One result row, borrowing its term and record from the vocabulary.
#[derive(Debug)]
pub struct Hit<'v, R> {
    pub term: &'v str,
    pub record: &'v R,
    pub kind: MatchKind,
}

impl<R> Clone for Hit<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Hit<'_, R> {}

impl<R: PartialEq> PartialEq for Hit<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term && self.record == other.record && self.kind == other.kind
    }
}

/// Ordered hits for one query: exact hits first, then partial hits.
#[derive(Debug)]
pub struct SearchResults<'v, R> {
    hits: Vec<Hit<'v, R>>,
    exact: usize,
}

impl<'v, R> SearchResults<'v, R> {
    fn empty() -> Self {
        Self {
            hits: Vec::new(),
            exact: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// All hits in result order.
    pub fn hits(&self) -> &[Hit<'v, R>] {
        &self.hits
    }

    /// The exact portion, in vocabulary order.
    pub fn exact(&self) -> &[Hit<'v, R>] {
        &self.hits[..self.exact]
    }

    /// The partial portion, in ascending distance.
    pub fn partial(&self) -> &[Hit<'v, R>] {
        &self.hits[self.exact..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hit<'v, R>> {
        self.hits.iter()
    }

    /// Terms in result order.
    pub fn terms(&self) -> Vec<&'v str> {
        self.hits.iter().map(|h| h.term).collect()
    }

    /// Detach from the vocabulary by cloning each term and record.
    pub fn into_owned(self) -> Vec<(String, R)>
    where
        R: Clone,
    {
        self.hits
            .into_iter()
            .map(|h| (h.term.to_owned(), h.record.clone()))
            .collect()
    }
}

impl<'v, R> IntoIterator for SearchResults<'v, R> {
    type Item = Hit<'v, R>;
    type IntoIter = std::vec::IntoIter<Hit<'v, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

impl<'a, 'v, R> IntoIterator for &'a SearchResults<'v, R> {
    type Item = &'a Hit<'v, R>;
    type IntoIter = std::slice::Iter<'a, Hit<'v, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Search `vocabulary` for `query` with default options.
///
/// Never fails: any query against any vocabulary, including empty ones,
/// yields a (possibly empty) result.
pub fn search<'v, R>(vocabulary: &'v Vocabulary<R>, query: &str) -> SearchResults<'v, R> {
    search_with(vocabulary, query, SearchOptions::default())
}

/// Search `vocabulary` for `query` with explicit [`SearchOptions`].
pub fn search_with<'v, R>(
    vocabulary: &'v Vocabulary<R>,
    query: &str,
    options: SearchOptions,
) -> SearchResults<'v, R> {
    let pattern = Pattern::build(query);

    if pattern.is_empty() && options.empty_query == EmptyQueryPolicy::MatchNone {
        tracing::debug!(query, "empty query: policy match_none");
        return SearchResults::empty();
    }

    let mut exact: Vec<Hit<'v, R>> = Vec::new();
    let mut partial: Vec<Hit<'v, R>> = Vec::new();
    let mut folded: Vec<char> = Vec::new();

    for (term, record) in vocabulary.iter() {
        folded.clear();
        // Fold the whole string like the query, so final sigma folds alike.
        folded.extend(term.to_lowercase().chars());

        if pattern.matches_whole(&folded) {
            exact.push(Hit {
                term,
                record,
                kind: MatchKind::Exact,
            });
        } else if pattern.matches_within(&folded) {
            partial.push(Hit {
                term,
                record,
                kind: MatchKind::Partial {
                    distance: distance(query, term),
                },
            });
        }
    }

    // Stable: equal distances keep vocabulary order.
    partial.sort_by_key(|hit| match hit.kind {
        MatchKind::Partial { distance } => distance,
        MatchKind::Exact => 0,
    });

    tracing::debug!(
        query,
        pattern = %pattern,
        exact = exact.len(),
        partial = partial.len(),
        vocabulary = vocabulary.len(),
        "search complete"
    );

    let exact_count = exact.len();
    let mut hits = exact;
    hits.append(&mut partial);

    if let Some(limit) = options.limit {
        hits.truncate(limit);
    }

    SearchResults {
        exact: exact_count.min(hits.len()),
        hits,
    }
}
