//! Search-box input handling.

/// Normalize user input into a lookup key.
///
/// Returns `None` for empty or whitespace-only input, which callers treat as
/// "no search" and answer with the regular list instead.
pub fn normalize_query(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Encode a lookup key as a single URL path segment.
///
/// Returns `None` for keys that cannot name a record: empty keys and keys
/// made only of dots. URL resolution folds `.` and `..` (escaped or not)
/// into the parent route, so such keys never reach `/pokemon/{key}`.
pub(crate) fn path_segment(key: &str) -> Option<String> {
    if key.chars().all(|c| c == '.') {
        return None;
    }
    Some(urlencoding::encode(key).into_owned())
}
