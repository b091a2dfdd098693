// text keys used by the catalog
//
// Two rules, kept apart on purpose:
//   format_key -> lowercase, drop whitespace, keep punctuation   (display keys)
//   match_key  -> lowercase, keep only letters and digits        (identifier lookup)

/// Compact display key: `"[Group 1] Op Name 1"` -> `"[group1]opname1"`.
pub fn format_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Lookup key for loosely formatted identifiers: `"operation-x."` -> `"operationx"`.
pub fn match_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}
