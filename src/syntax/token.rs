use smol_str::SmolStr;
use text_size::TextRange;

use super::SyntaxKind;
use crate::base::Span;

/// A lexical token with its kind, text, and position
///
/// `span` is the line/column range, `range` the byte range in the source.
/// Both always describe the original text; `text` only differs from the
/// source slice inside normalized block comments, and never in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub text: SmolStr,
    pub span: Span,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: SyntaxKind, text: impl Into<SmolStr>, span: Span, range: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            range,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Case-insensitive comparison against a word, e.g. a keyword
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == SyntaxKind::WORD && self.text.eq_ignore_ascii_case(word)
    }
}
