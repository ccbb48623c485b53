//! Natural ordering for reference designators.
//!
//! Designators like `R2` and `R10` must sort numerically within a prefix
//! (`R2` before `R10`), which plain lexical ordering gets wrong. The key
//! splits a designator into alternating non-digit/digit runs; digit runs
//! compare by numeric value, non-digit runs lexically. The ordering is total
//! and works with stable sorts.

use std::cmp::Ordering;

/// One maximal run of a designator.
///
/// Digit runs store their digits with leading zeros stripped so numeric
/// equality (`R007` vs `R7`) matches comparison order without parsing into a
/// fixed-width integer.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Run {
    Digits(String),
    Text(String),
}

impl Ord for Run {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Run::Text(a), Run::Text(b)) => a.cmp(b),
            // Equal lengths first, then lexical: "9" < "10" < "11".
            (Run::Digits(a), Run::Digits(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            // Keys always start with a (possibly empty) text run, so mixed
            // comparisons only occur at differing run depths; digits order
            // first, matching ASCII.
            (Run::Digits(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Run {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparison key for one reference designator.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct NaturalKey {
    runs: Vec<Run>,
}

/// Build the natural-order key for a designator.
pub fn natural_key(designator: &str) -> NaturalKey {
    let mut runs = Vec::new();
    let mut chars = designator.chars().peekable();
    loop {
        let mut text = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                break;
            }
            text.push(c);
            chars.next();
        }
        // A leading empty text run keeps run positions aligned between keys;
        // trailing empties add nothing.
        if !text.is_empty() || runs.is_empty() {
            runs.push(Run::Text(text));
        }
        if chars.peek().is_none() {
            break;
        }
        let mut digits = String::new();
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            chars.next();
        }
        runs.push(Run::Digits(strip_leading_zeros(digits)));
    }
    NaturalKey { runs }
}

/// Compare two designators in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Sort designators in place, naturally and stably.
pub fn sort_natural(designators: &mut [String]) {
    designators.sort_by_cached_key(|d| natural_key(d));
}

fn strip_leading_zeros(digits: String) -> String {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}
