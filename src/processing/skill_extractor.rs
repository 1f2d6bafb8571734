//! Fuzzy skill extraction against a skill catalog
//!
//! Every catalog entry is scored against the whole text with a partial-match
//! ratio: the shorter string is slid across the longer one and the best window
//! wins. Cost is O(catalog_size × text_length × skill_length) in the worst case;
//! entries that occur verbatim short-circuit to a full score.

use crate::processing::catalog::SkillCatalog;
use rapidfuzz::distance::lcs_seq;

/// Default cutoff for resume text
pub const RESUME_THRESHOLD: u8 = 85;

/// Default cutoff for job descriptions, which are shorter and more literal
pub const JD_THRESHOLD: u8 = 90;

/// Return the catalog entries whose partial ratio against `text` reaches `threshold`.
///
/// The result is a duplicate-free subset of the catalog in ascending order.
pub fn extract_skills(text: &str, catalog: &SkillCatalog, threshold: u8) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let cutoff = f64::from(threshold);

    // Catalog iteration order is already sorted and unique.
    catalog
        .iter()
        .filter(|skill| partial_ratio(text, skill) >= cutoff)
        .map(str::to_string)
        .collect()
}

/// Best normalized Indel similarity (0-100) of the shorter string against any
/// window of the longer one.
///
/// Windows are the prefixes shorter than the needle, every full-length window,
/// and the trailing suffixes shorter than the needle. Strings of equal length
/// are scanned in both directions. Either string empty scores 0.
pub fn partial_ratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (needle, haystack) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let best = best_window_score(needle, haystack);
    if a.len() == b.len() && best < 100.0 {
        return best.max(best_window_score(haystack, needle));
    }

    best
}

fn best_window_score(needle: &[char], haystack: &[char]) -> f64 {
    let m = needle.len();
    let n = haystack.len();

    if haystack.windows(m).any(|w| w == needle) {
        return 100.0;
    }

    let scorer = lcs_seq::BatchComparator::new(needle.iter().copied());
    let windows = (1..m)
        .map(|end| (0, end))
        .chain((0..=n - m).map(|start| (start, start + m)))
        .chain((n - m + 1..n).map(|start| (start, n)));

    let mut best = 0.0;
    for (start, end) in windows {
        let window = &haystack[start..end];
        let common = scorer.similarity(window.iter().copied());
        let score = 200.0 * common as f64 / (m + window.len()) as f64;
        if score > best {
            best = score;
        }
    }

    best
}
