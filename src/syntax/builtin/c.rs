//! C rule-set (C11)

use crate::syntax::rules::RuleSet;

/// C keywords, including the C11 underscore keywords
const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

/// Rules for C sources
pub static C_RULES: RuleSet = RuleSet {
    name: "C",
    keywords: KEYWORDS,
    line_comment: b"//",
    block_open: b"/*",
    block_close: b"*/",
    directive_marker: b'#',
};
