//! Vocabulary — the immutable term → record index that searches run against.
//!
//! A [`Vocabulary`] is built once, from an ordered sequence of
//! `(term, record)` pairs, and never changes afterwards. Iteration order is the
//! insertion order and serves as the tie-break order for equally ranked
//! results.
//!
//! Duplicate terms are resolved last-write-wins: the later record replaces the
//! earlier one *and* the term moves to the position of its last occurrence.

use std::collections::HashMap;

/// Immutable, insertion-ordered mapping from term to record.
#[derive(Debug, Clone)]
pub struct Vocabulary<R> {
    entries: Vec<(String, R)>,
    positions: HashMap<String, usize>,
}

impl<R> Vocabulary<R> {
    /// An empty vocabulary.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Start an incremental build. See [`VocabularyBuilder`].
    pub fn builder() -> VocabularyBuilder<R> {
        VocabularyBuilder::new()
    }

    /// Build from `(term, record)` pairs, applying last-write-wins to
    /// duplicates.
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, R)>,
        T: Into<String>,
    {
        let mut builder = VocabularyBuilder::new();
        for (term, record) in entries {
            builder.insert(term, record);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the record stored for `term` (case-sensitive).
    pub fn get(&self, term: &str) -> Option<&R> {
        self.positions.get(term).map(|&i| &self.entries[i].1)
    }

    /// Position of `term` in iteration order.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    /// Iterate `(term, record)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &R)> + '_ {
        self.entries.iter().map(|(t, r)| (t.as_str(), r))
    }

    /// Iterate terms in insertion order.
    pub fn terms(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(t, _)| t.as_str())
    }
}

impl<R> Default for Vocabulary<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R, T: Into<String>> FromIterator<(T, R)> for Vocabulary<R> {
    fn from_iter<I: IntoIterator<Item = (T, R)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates entries for a [`Vocabulary`] and reports overwrites.
///
/// Overwritten slots are tombstoned and compacted away in [`build`], which
/// keeps each insert O(1).
///
/// [`build`]: VocabularyBuilder::build
#[derive(Debug)]
pub struct VocabularyBuilder<R> {
    slots: Vec<Option<(String, R)>>,
    positions: HashMap<String, usize>,
    overwritten: usize,
}

impl<R> VocabularyBuilder<R> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            positions: HashMap::new(),
            overwritten: 0,
        }
    }

    /// Insert an entry. Returns the record it replaced, if the term was
    /// already present; the term then moves to the end of the order.
    pub fn insert(&mut self, term: impl Into<String>, record: R) -> Option<R> {
        let term = term.into();
        let previous = match self.positions.insert(term.clone(), self.slots.len()) {
            Some(old) => {
                self.overwritten += 1;
                self.slots[old].take().map(|(_, r)| r)
            }
            None => None,
        };
        self.slots.push(Some((term, record)));
        previous
    }

    /// Number of inserts so far that replaced an existing term.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    /// Number of distinct terms so far.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Freeze into an immutable [`Vocabulary`].
    pub fn build(self) -> Vocabulary<R> {
        let entries: Vec<(String, R)> = self.slots.into_iter().flatten().collect();
        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, (term, _))| (term.clone(), i))
            .collect();
        Vocabulary { entries, positions }
    }
}

impl<R> Default for VocabularyBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
