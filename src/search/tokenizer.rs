use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}]+").expect("static pattern is valid"));

/// Splits a post body on whitespace and normalizes every chunk into a term.
///
/// Chunk order is preserved and repeated words are kept; chunks that are nothing
/// but punctuation are dropped.
pub fn tokenize(body: &str) -> Vec<String> {
    body.split_whitespace().filter_map(normalize_term).collect()
}

/// Lowercases a chunk, then strips every non-alphanumeric character.
///
/// Lowercasing can emit combining marks (`İ` becomes `i` plus U+0307), so it has to
/// run before stripping for the result to be a fixed point. Returns `None` when
/// nothing is left.
pub fn normalize_term(chunk: &str) -> Option<String> {
    let lowered = chunk.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lowered, "");
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.into_owned())
}

/// Deduplicates a term sequence, keeping the first occurrence of each term.
pub fn unique_terms(terms: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(terms.len());
    terms
        .iter()
        .filter(|term| seen.insert(term.as_str()))
        .cloned()
        .collect()
}
