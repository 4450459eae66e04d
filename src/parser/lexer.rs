//! Logos-based lexer for SQL
//!
//! Every input byte ends up in exactly one token: whitespace and comments
//! are kept, and characters without a rule become `UNKNOWN` tokens.
//! Unterminated strings, quoted identifiers and block comments run to the
//! end of input instead of failing.

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::{Position, Span};
use crate::syntax::{SyntaxKind, Token};

/// Lexer wrapping the logos-generated tokenizer
///
/// Tracks line/column while scanning so no line index has to be built.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            position: Position::default(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let bytes = self.inner.span();
        let range = TextRange::new(
            TextSize::new(bytes.start as u32),
            TextSize::new(bytes.end as u32),
        );

        let start = self.position;
        self.position = start.advance(text);
        let span = Span::new(start, self.position);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::UNKNOWN,
        };
        let text = match kind {
            SyntaxKind::BLOCK_COMMENT => normalize_block_comment(text),
            _ => SmolStr::new(text),
        };

        Some(Token::new(kind, text, span, range))
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Blank out the leading `*` of block comment continuation lines
///
/// `/*\n * foo\n */` becomes `/*\n   foo\n */`. The closing `*/` is kept
/// and the text length never changes.
fn normalize_block_comment(text: &str) -> SmolStr {
    let mut normalized = String::with_capacity(text.len());
    for (index, line) in text.split_inclusive('\n').enumerate() {
        let body = line.trim_start_matches([' ', '\t']);
        if index > 0 && body.starts_with('*') && !body.starts_with("*/") {
            let indent = line.len() - body.len();
            normalized.push_str(&line[..indent]);
            normalized.push(' ');
            normalized.push_str(&body[1..]);
        } else {
            normalized.push_str(line);
        }
    }
    SmolStr::from(normalized)
}

/// Consume a `delimiter`-quoted body; a doubled delimiter is an escape
fn quoted(lex: &mut logos::Lexer<'_, LogosToken>, delimiter: char) {
    let rest = lex.remainder();
    let mut chars = rest.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if c == delimiter && chars.next_if(|&(_, next)| next == delimiter).is_none() {
            lex.bump(index + c.len_utf8());
            return;
        }
    }
    lex.bump(rest.len());
}

fn block_comment(lex: &mut logos::Lexer<'_, LogosToken>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"--[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // WORDS AND LITERALS
    // =========================================================================
    #[regex(r"[\p{L}_][\p{L}\p{N}_$]*")]
    Word,

    #[token("\"", |lex| quoted(lex, '"'))]
    #[token("`", |lex| quoted(lex, '`'))]
    QuotedIdent,

    #[token("'", |lex| quoted(lex, '\''))]
    QuotedString,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    // =========================================================================
    // MULTI-CHARACTER OPERATORS (must come before single-char)
    // =========================================================================
    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<>")]
    #[token("!=")]
    Neq,

    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            Newline => SyntaxKind::NEWLINE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Words and literals
            Word => SyntaxKind::WORD,
            QuotedIdent => SyntaxKind::QUOTED_IDENT,
            QuotedString => SyntaxKind::STRING,
            Number => SyntaxKind::NUMBER,

            // Operators
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            Neq => SyntaxKind::NEQ,
            PipePipe => SyntaxKind::PIPE_PIPE,
            Star => SyntaxKind::WILDCARD,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,

            // Punctuation
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Comma => SyntaxKind::COMMA,
            Semicolon => SyntaxKind::SEMICOLON,
            Dot => SyntaxKind::DOT,
        }
    }
}
