use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex for non-word characters"));

/// Build a full-text search query where every search term is matched as a
/// prefix and all terms are required.
///
/// Word characters are Unicode aware, so terms like `café` are kept as they are.
/// Returns an empty string if the query doesn't contain any search term.
pub fn build_ts_query(query: &str) -> String {
    let query = query.to_lowercase();
    let query = NON_WORD_REGEX.replace_all(&query, "");

    query
        .split_whitespace()
        .map(|token| format!("{token}:*"))
        .collect::<Vec<_>>()
        .join(" & ")
}
