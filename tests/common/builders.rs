//! Test builders — ergonomic constructors for vocabularies.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use qdict_core::Vocabulary;

/// Build a vocabulary from `(term, record)` string pairs.
///
/// ```rust
/// let v = vocab(&[("apple", "R1"), ("apricot", "R2")]);
/// ```
pub fn vocab(entries: &[(&str, &str)]) -> Vocabulary<String> {
    Vocabulary::from_entries(entries.iter().map(|(t, r)| (*t, r.to_string())))
}

/// Build a vocabulary whose record is each term's input position. Handy when
/// a test needs to tell duplicate terms apart.
pub fn indexed_vocab<S: AsRef<str>>(terms: &[S]) -> Vocabulary<usize> {
    Vocabulary::from_entries(terms.iter().enumerate().map(|(i, t)| (t.as_ref(), i)))
}

/// Build a synthetic vocabulary of `n` terms, roughly a tenth of which contain
/// "time" and a tenth "out".
pub fn build_corpus(n: usize) -> Vocabulary<usize> {
    const STEMS: &[&str] = &[
        "timeout", "connection", "retry", "output", "timer", "latency", "shutdown", "overtime",
        "session", "token",
    ];
    Vocabulary::from_entries((0..n).map(|i| (format!("{}-{i}", STEMS[i % STEMS.len()]), i)))
}
