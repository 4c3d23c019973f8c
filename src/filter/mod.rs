//! Title blocklist filtering.

/// Terms that disqualify an entry by title, matched case-insensitively.
const BLOCKLIST_TERMS: &[&str] = &[
    "loli",
    "lolicon",
    "shota",
    "shotacon",
    "underage",
    "minor",
    "kid",
    "child",
    "middle school",
    "elementary",
];

/// Check a title against the blocklist.
///
/// Case-insensitive substring match; entries with no title are never
/// blocked (callers only invoke this when a title is present).
pub fn is_blocked(title: &str) -> bool {
    let lower = title.to_lowercase();
    BLOCKLIST_TERMS.iter().any(|term| lower.contains(term))
}
