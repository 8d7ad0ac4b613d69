//! Edit distance used to rank partial matches.

/// Levenshtein distance between `a` and `b`, counted in Unicode scalar values.
///
/// Insertion, deletion and substitution each cost 1. The strings are compared
/// exactly as given; callers that want case-insensitive ranking must fold case
/// first.
///
/// Only a single row of `min(|a|, |b|) + 1` cells is kept, so memory stays
/// proportional to the shorter string.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        // `diag` holds the previous row's value at column j.
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }

    row[short.len()]
}
