use strsim::levenshtein;

/// How close a discovered game title is to the search term, as a fraction of
/// the longer string's length not consumed by edit distance, rounded to two
/// decimals.
///
/// This is a relevance hint, not a ranking: it is monotonic in Levenshtein
/// distance but ignores token order, substrings and any semantic match. The
/// formula is kept as-is for compatibility with existing consumers.
pub fn similarity_score(candidate: &str, query: &str) -> f64 {
    let a = candidate.to_lowercase();
    let b = query.to_lowercase();

    let (longer, shorter) = if a.chars().count() >= b.chars().count() {
        (a.as_str(), b.as_str())
    } else {
        (b.as_str(), a.as_str())
    };

    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(longer, shorter);
    ((longer_len - distance) as f64 / longer_len as f64 * 100.0).round() / 100.0
}
