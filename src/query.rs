//! Query tag toggler.
//!
//! Rewrites a free-text search query to cycle a single `book:<abbr>` filter
//! token through the states absent → present → negated → present.
//!
//! Everything in the query other than the `book:` filter sub-language is
//! opaque and round-trips unchanged, in content and in relative order.

use regex::Regex;

/// One rewrite rule: a pattern over the query and its replacement text.
///
/// Rules are tried in declaration order and the first whose pattern matches
/// wins. Only the first textual occurrence is replaced; later occurrences in
/// a malformed multi-filter query are deliberately left alone.
struct ToggleRule {
    pattern: Regex,
    replacement: String,
}

/// Builds the ordered rule list for one abbreviation.
///
/// Precedence (first match wins):
///
/// 1. `NOT book:<abbr>` → `book:<abbr>` — re-affirm a negated tag.
/// 2. `book:<abbr>` → `NOT book:<abbr>` — negate a present tag.
/// 3. any `book:<word>` → `book:<abbr>` — switch a different active tag
///    instead of stacking a second filter.
///
/// All patterns are word-bounded and consume an optional trailing `?` (a `?`
/// glued to the filter token belongs to the token, not to the rest of the
/// query). Matching is case-insensitive on the abbreviation and
/// case-sensitive on the literal `NOT`.
fn toggle_rules(abbr: &str) -> [ToggleRule; 3] {
    let escaped = regex::escape(abbr);

    [
        ToggleRule {
            pattern: Regex::new(&format!(r"\bNOT\s+book:(?i:{escaped})\b\??")).unwrap(),
            replacement: format!("book:{abbr}"),
        },
        ToggleRule {
            pattern: Regex::new(&format!(r"\bbook:(?i:{escaped})\b\??")).unwrap(),
            replacement: format!("NOT book:{abbr}"),
        },
        ToggleRule {
            pattern: Regex::new(r"\bbook:\w+\??").unwrap(),
            replacement: format!("book:{abbr}"),
        },
    ]
}

/// Toggles the `book:<abbr>` filter in a search query.
///
/// The abbreviation is lowercased before matching and insertion. When no
/// rewrite rule applies, a fresh ` book:<abbr> ` token is appended and only
/// leading whitespace is trimmed — the trailing space keeps the input caret
/// positioned after the new token.
///
/// # Examples
///
/// ```
/// use excerpt_tools::toggle_book_filter;
///
/// assert_eq!(toggle_book_filter("errors", "niv"), "errors book:niv ");
/// assert_eq!(toggle_book_filter("book:niv context", "niv"), "NOT book:niv context");
/// assert_eq!(toggle_book_filter("NOT book:niv context", "niv"), "book:niv context");
/// assert_eq!(toggle_book_filter("book:esv text", "niv"), "book:niv text");
/// ```
pub fn toggle_book_filter(query: &str, abbr: &str) -> String {
    let abbr = abbr.to_lowercase();

    for rule in toggle_rules(&abbr) {
        if rule.pattern.is_match(query) {
            return rule
                .pattern
                .replace(query, rule.replacement.as_str())
                .into_owned();
        }
    }

    // No book filter anywhere in the query: append a fresh token.
    format!("{query} book:{abbr} ").trim_start().to_string()
}
