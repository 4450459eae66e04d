//! Keyword tables used by the tree builder
//!
//! The lexer emits every word as [`SyntaxKind::WORD`](crate::syntax::SyntaxKind::WORD);
//! these tables decide which words become keyword items and which runs of
//! words fold into a single multi-word keyword.

/// Reserved words, lowercase and sorted for binary search
pub const KEYWORDS: &[&str] = &[
    "add", "all", "alter", "and", "any", "as", "asc", "begin", "between", "by", "case", "check",
    "commit", "constraint", "create", "cross", "default", "delete", "desc", "distinct", "drop",
    "else", "end", "except", "exists", "false", "for", "foreign", "from", "full", "group",
    "having", "if", "in", "inner", "insert", "intersect", "into", "is", "join", "left", "like",
    "limit", "natural", "not", "null", "offset", "on", "or", "order", "outer", "over",
    "partition", "primary", "references", "returning", "right", "rollback", "select", "set",
    "table", "then", "true", "truncate", "union", "unique", "update", "using", "values", "when",
    "where", "with",
];

/// Keywords that stand for a value and may appear wherever an operand can
pub const VALUE_KEYWORDS: &[&str] = &["false", "null", "true"];

/// Multi-word keywords, longest first so the first match is the longest
pub const MULTI_KEYWORDS: &[&[&str]] = &[
    &["left", "outer", "join"],
    &["right", "outer", "join"],
    &["full", "outer", "join"],
    &["if", "not", "exists"],
    &["order", "by"],
    &["group", "by"],
    &["partition", "by"],
    &["insert", "into"],
    &["delete", "from"],
    &["inner", "join"],
    &["cross", "join"],
    &["left", "join"],
    &["right", "join"],
    &["full", "join"],
    &["natural", "join"],
    &["outer", "join"],
    &["union", "all"],
    &["primary", "key"],
    &["foreign", "key"],
    &["create", "table"],
    &["drop", "table"],
    &["alter", "table"],
    &["if", "exists"],
    &["is", "not"],
    &["not", "null"],
    &["not", "in"],
    &["not", "like"],
    &["not", "between"],
    &["not", "exists"],
];

/// Check if a word is a keyword, ignoring case
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS
        .binary_search(&word.to_ascii_lowercase().as_str())
        .is_ok()
}

/// Check if a word is `NULL`, `TRUE` or `FALSE`, ignoring case
pub fn is_value_keyword(word: &str) -> bool {
    VALUE_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
}
