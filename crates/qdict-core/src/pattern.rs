//! Query patterns — ordered literal tokens separated by arbitrary gaps.
//!
//! A query such as `"New  York"` becomes the tokens `["new", "york"]`. The
//! pattern matches any text containing those tokens in order, with any number
//! of characters (including none) between them. Tokens are always literal:
//! characters like `.` or `*` in the query carry no special meaning.
//!
//! Two match modes are offered:
//!
//! - [`Pattern::matches_whole`]: the tokens must span the entire text: the
//!   text starts with the first token and ends with the last.
//! - [`Pattern::matches_within`]: the tokens may appear anywhere in the text.
//!
//! Both operate on code-point slices. Callers are expected to have lowercased
//! the text already; the pattern itself is lowercase.
//!
//! Token separators are Unicode whitespace plus the ASCII information
//! separators U+001C to U+001F, so `"a\x1fb"` is two tokens.

use std::fmt;

/// A compiled query: lowercase, whitespace-separated tokens in query order.
///
/// The empty pattern (no tokens) matches only empty text under
/// [`matches_whole`](Pattern::matches_whole) and every text under
/// [`matches_within`](Pattern::matches_within).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    tokens: Vec<Vec<char>>,
}

impl Pattern {
    /// Lowercase `query`, split it on separators and keep the non-empty tokens.
    pub fn build(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let tokens = lowered
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(|token| token.chars().collect())
            .collect();
        Self { tokens }
    }

    /// `true` when the query contained no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens as owned strings, in query order.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.iter().collect()).collect()
    }

    /// Does the pattern cover the whole of `text`?
    ///
    /// The first token must be a prefix, the last token a suffix that does not
    /// overlap it, and every token in between must occur in order in the gap.
    pub fn matches_whole(&self, text: &[char]) -> bool {
        match self.tokens.as_slice() {
            [] => text.is_empty(),
            [only] => text == only.as_slice(),
            [first, middle @ .., last] => {
                if text.len() < first.len() + last.len() {
                    return false;
                }
                if !text.starts_with(first) || !text.ends_with(last) {
                    return false;
                }
                let gap = &text[first.len()..text.len() - last.len()];
                contains_in_order(gap, middle)
            }
        }
    }

    /// Does the pattern occur somewhere inside `text`?
    pub fn matches_within(&self, text: &[char]) -> bool {
        contains_in_order(text, &self.tokens)
    }
}

impl fmt::Display for Pattern {
    /// Renders the pattern in the familiar wildcard notation, e.g. `new.*?york`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(".*?")?;
            }
            for c in token {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Leftmost scan for each token after the end of the previous one. Taking the
/// earliest occurrence never rules out a later token, so a greedy pass is
/// exact.
fn contains_in_order(haystack: &[char], tokens: &[Vec<char>]) -> bool {
    let mut from = 0;
    for token in tokens {
        match find(&haystack[from..], token) {
            Some(at) => from += at + token.len(),
            None => return false,
        }
    }
    true
}

fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
