//! Symbol alphabets
//!
//! Operators label internal nodes, terminals label leaves.

/// Binary operators, one glyph each.
pub const OPERATORS: [&str; 5] = ["+", "-", "*", "/", "^"];

/// Terminal literals: `1`..`9` and their negations.
pub const TERMINALS: [&str; 18] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "-1", "-2", "-3", "-4", "-5", "-6", "-7", "-8",
    "-9",
];

/// True if `token` is one of [`OPERATORS`].
#[inline]
pub fn is_operator(token: &str) -> bool {
    OPERATORS.contains(&token)
}

/// True if `token` is one of [`TERMINALS`].
#[inline]
pub fn is_terminal(token: &str) -> bool {
    TERMINALS.contains(&token)
}
