use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_WORDS
/// keywords that cannot be used as field idents because they collide with
/// either Rust or common SQL dialects
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words = Vec::new();

    // sql
    words.extend(vec![
        "all", "and", "any", "as", "asc", "between", "by", "case", "cast", "check", "column",
        "constraint", "create", "cross", "default", "delete", "desc", "distinct", "drop", "else",
        "end", "exists", "from", "full", "group", "having", "in", "inner", "insert", "into", "is",
        "join", "left", "like", "limit", "not", "null", "offset", "on", "or", "order", "outer",
        "primary", "references", "right", "select", "set", "table", "then", "union", "unique",
        "update", "values", "when", "where",
    ]);

    // rust
    // https://doc.rust-lang.org/reference/keywords.html
    words.extend(vec![
        "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
        "gen", "if", "impl", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
        "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
        "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final", "macro",
        "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]);

    words.into_iter().collect()
});

/// Check if an identifier is a reserved word.
#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}
