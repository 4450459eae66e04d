//! The syntax tree node.
//!
//! Every shape in the tree is a variant of [`Node`]. Leaves wrap a single
//! [`Token`]; containers own their children in source order, so the text of
//! any node is the concatenation of its children's text and its span runs
//! from the first child's start to the last child's end.

use std::fmt;

use text_size::{TextRange, TextSize};

use super::nodes::{
    Aliased, BinaryExpr, FunctionLiteral, IdentifierList, MemberIdentifier, MultiKeyword,
    Parenthesis, Statement, SwitchCase,
};
use super::{SyntaxKind, Token};
use crate::base::{Position, Span};

/// Discriminant of a [`Node`], used by matchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Item,
    Identifier,
    MemberIdentifier,
    Aliased,
    Operator,
    Comparison,
    Parenthesis,
    FunctionLiteral,
    IdentifierList,
    MultiKeyword,
    SwitchCase,
    Statement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Keyword, punctuation, literal, operator symbol, comment or whitespace
    Item(Token),
    /// Plain or quoted name, or `*`
    Identifier(Token),
    MemberIdentifier(MemberIdentifier),
    Aliased(Aliased),
    Operator(BinaryExpr),
    Comparison(BinaryExpr),
    Parenthesis(Parenthesis),
    FunctionLiteral(FunctionLiteral),
    IdentifierList(IdentifierList),
    MultiKeyword(MultiKeyword),
    SwitchCase(SwitchCase),
    Statement(Statement),
}

/// Read-only access to an ordered child sequence
pub trait TokenList {
    fn children(&self) -> &[Node];

    fn span(&self) -> Span {
        span_of(self.children())
    }

    fn text_range(&self) -> TextRange {
        text_range_of(self.children())
    }

    fn text(&self) -> String {
        self.children().iter().map(Node::text).collect()
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Item(_) => NodeKind::Item,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::MemberIdentifier(_) => NodeKind::MemberIdentifier,
            Node::Aliased(_) => NodeKind::Aliased,
            Node::Operator(_) => NodeKind::Operator,
            Node::Comparison(_) => NodeKind::Comparison,
            Node::Parenthesis(_) => NodeKind::Parenthesis,
            Node::FunctionLiteral(_) => NodeKind::FunctionLiteral,
            Node::IdentifierList(_) => NodeKind::IdentifierList,
            Node::MultiKeyword(_) => NodeKind::MultiKeyword,
            Node::SwitchCase(_) => NodeKind::SwitchCase,
            Node::Statement(_) => NodeKind::Statement,
        }
    }

    /// The wrapped token, for leaves
    pub fn token(&self) -> Option<&Token> {
        match self {
            Node::Item(token) | Node::Identifier(token) => Some(token),
            _ => None,
        }
    }

    pub fn token_kind(&self) -> Option<SyntaxKind> {
        self.token().map(|token| token.kind)
    }

    /// The ordered children, for containers
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Item(_) | Node::Identifier(_) => None,
            Node::MemberIdentifier(node) => Some(node.children()),
            Node::Aliased(node) => Some(node.children()),
            Node::Operator(node) | Node::Comparison(node) => Some(node.children()),
            Node::Parenthesis(node) => Some(node.children()),
            Node::FunctionLiteral(node) => Some(node.children()),
            Node::IdentifierList(node) => Some(node.children()),
            Node::MultiKeyword(node) => Some(node.children()),
            Node::SwitchCase(node) => Some(node.children()),
            Node::Statement(node) => Some(node.children()),
        }
    }

    pub fn span(&self) -> Span {
        match (self.token(), self.children()) {
            (Some(token), _) => token.span,
            (None, Some(children)) => span_of(children),
            (None, None) => Span::default(),
        }
    }

    pub fn start(&self) -> Position {
        self.span().start
    }

    pub fn end(&self) -> Position {
        self.span().end
    }

    /// Byte range of the node in the parsed buffer
    pub fn text_range(&self) -> TextRange {
        match (self.token(), self.children()) {
            (Some(token), _) => token.range,
            (None, Some(children)) => text_range_of(children),
            (None, None) => TextRange::empty(TextSize::from(0)),
        }
    }

    /// The exact source text covered by this node
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Whitespace, newline or comment leaf
    pub fn is_trivia(&self) -> bool {
        matches!(self, Node::Item(token) if token.is_trivia())
    }

    /// Keyword leaf matching `word`, case-insensitively
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Node::Item(token) if token.is_word(word))
    }

    /// Leaf of the given token kind
    pub fn is_token(&self, kind: SyntaxKind) -> bool {
        self.token_kind() == Some(kind)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Node::Identifier(token) if token.kind == SyntaxKind::WILDCARD)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.token(), self.children()) {
            (Some(token), _) => f.write_str(token.text()),
            (None, Some(children)) => children
                .iter()
                .try_for_each(|child| fmt::Display::fmt(child, f)),
            (None, None) => Ok(()),
        }
    }
}

pub(crate) fn span_of(nodes: &[Node]) -> Span {
    match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) => Span::new(first.start(), last.end()),
        _ => Span::default(),
    }
}

pub(crate) fn text_range_of(nodes: &[Node]) -> TextRange {
    match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) => {
            TextRange::new(first.text_range().start(), last.text_range().end())
        }
        _ => TextRange::empty(TextSize::from(0)),
    }
}
