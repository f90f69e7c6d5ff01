//! Picks the highest version out of an unordered list of tag names.

use crate::domain::TagVersion;
use std::cmp::Ordering;

/// Version-aware "less than" over arbitrary strings.
///
/// Two parseable versions compare by `(major, minor, patch)` alone; suffixes
/// never break a tie. A parseable version always beats one that does not
/// parse. Two unparseable strings fall back to natural order, so `""` sorts
/// below everything else.
pub fn version_less(a: &str, b: &str) -> bool {
    match (TagVersion::parse(a), TagVersion::parse(b)) {
        (Ok(a), Ok(b)) => a.cmp_numeric(&b) == Ordering::Less,
        (Err(_), Ok(_)) => true,
        (Ok(_), Err(_)) => false,
        (Err(_), Err(_)) => natural_cmp(a, b) == Ordering::Less,
    }
}

/// Reduce `tags` to the one judged highest by [`version_less`].
///
/// Entries are trimmed and blank ones skipped. On ties the earliest entry
/// wins. Returns an empty string when nothing is left.
pub fn latest_tag<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut latest = String::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        if version_less(&latest, tag) {
            latest = tag.to_string();
        }
    }
    latest
}

/// Compare strings chunk by chunk, where a chunk is a run of ASCII digits or
/// a run of anything else. Digit runs compare by numeric value.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ord = if is_numeric(x) && is_numeric(y) {
            numeric_cmp(x, y)
        } else {
            x.cmp(y)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}

fn chunks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_digit = None;

    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if prev_digit.is_some_and(|p| p != digit) {
            out.push(&s[start..i]);
            start = i;
        }
        prev_digit = Some(digit);
    }
    if start < s.len() {
        out.push(&s[start..]);
    }
    out
}

fn is_numeric(chunk: &str) -> bool {
    chunk.bytes().all(|b| b.is_ascii_digit())
}

// Length first so arbitrarily long digit runs never overflow.
fn numeric_cmp(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}
