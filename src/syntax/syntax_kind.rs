//! Token kinds produced by the lexer.
//!
//! Words are not split into keywords here: `SELECT` and `users` are both
//! [`SyntaxKind::WORD`]. Keyword recognition happens in the tree builder.

/// All lexical token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // WORDS AND LITERALS
    // =========================================================================
    WORD,              // select, users, count
    QUOTED_IDENT,      // "name" or `name`
    WILDCARD,          // *
    NUMBER,            // 42, 25.5, 1e10
    STRING,            // 'text'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,           // (
    R_PAREN,           // )
    COMMA,             // ,
    SEMICOLON,         // ;
    DOT,               // .

    // =========================================================================
    // OPERATORS
    // =========================================================================
    PLUS,              // +
    MINUS,             // -
    SLASH,             // /
    PERCENT,           // %
    PIPE_PIPE,         // ||
    EQ,                // =
    NEQ,               // <> or !=
    LT,                // <
    GT,                // >
    LT_EQ,             // <=
    GT_EQ,             // >=

    /// Any character the lexer has no rule for
    UNKNOWN,
}

impl SyntaxKind {
    /// Whitespace, newlines and comments
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Symbols folded into an `Operator` node
    ///
    /// `WILDCARD` doubles as multiplication when it follows an operand.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::PLUS | Self::MINUS | Self::WILDCARD | Self::SLASH | Self::PERCENT | Self::PIPE_PIPE
        )
    }

    /// Symbols folded into a `Comparison` node
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::EQ | Self::NEQ | Self::LT | Self::GT | Self::LT_EQ | Self::GT_EQ
        )
    }

    /// Tokens that can name something: words and quoted identifiers
    pub fn is_name(self) -> bool {
        matches!(self, Self::WORD | Self::QUOTED_IDENT)
    }

    pub fn is_literal(self) -> bool {
        matches!(self, Self::NUMBER | Self::STRING)
    }
}
