//! Container node types.
//!
//! Each container owns its children, including the whitespace, comments and
//! punctuation between the meaningful parts, so that text round-trips. The
//! meaningful parts are located by index into that child vector.

use std::fmt;

use super::node::{Node, TokenList, span_of};
use super::{SyntaxKind, Token};
use crate::base::Position;

macro_rules! token_list {
    ($($name:ident),* $(,)?) => {$(
        impl TokenList for $name {
            fn children(&self) -> &[Node] {
                &self.nodes
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.nodes.iter().try_for_each(|node| fmt::Display::fmt(node, f))
            }
        }
    )*};
}

token_list!(
    MemberIdentifier,
    Aliased,
    BinaryExpr,
    Parenthesis,
    FunctionLiteral,
    IdentifierList,
    MultiKeyword,
    SwitchCase,
    Statement,
);

fn first_significant(nodes: &[Node], from: usize) -> Option<usize> {
    (from..nodes.len()).find(|&index| !nodes[index].is_trivia())
}

// ============================================================================
// MEMBER IDENTIFIER
// ============================================================================

/// `parent.child`, `parent.*` or the incomplete `parent.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberIdentifier {
    nodes: Vec<Node>,
}

impl MemberIdentifier {
    /// `nodes` is `[parent, ".", child?]`
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        debug_assert!(nodes.len() == 2 || nodes.len() == 3);
        Self { nodes }
    }

    pub fn parent(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn child(&self) -> Option<&Node> {
        self.nodes.get(2)
    }

    /// Child text, empty while the user has only typed `parent.`
    pub fn child_text(&self) -> String {
        self.child().map(Node::text).unwrap_or_default()
    }
}

// ============================================================================
// ALIASED
// ============================================================================

/// `real_name [AS] alias_name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aliased {
    nodes: Vec<Node>,
    as_keyword: Option<usize>,
}

impl Aliased {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        let as_keyword =
            first_significant(&nodes, 1).filter(|&index| nodes[index].is_keyword("as"));
        Self { nodes, as_keyword }
    }

    pub fn real_name(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn alias_name(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn has_as_keyword(&self) -> bool {
        self.as_keyword.is_some()
    }
}

// ============================================================================
// OPERATOR / COMPARISON
// ============================================================================

/// `left op right`, shared by `Node::Operator` and `Node::Comparison`
///
/// The right operand is absent while the expression is still being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    nodes: Vec<Node>,
    operator: usize,
    right: Option<usize>,
}

impl BinaryExpr {
    /// `nodes` is `[left, trivia*, op, trivia*, right?]`
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        let operator = first_significant(&nodes, 1).unwrap_or(0);
        let right = first_significant(&nodes, operator + 1);
        Self {
            nodes,
            operator,
            right,
        }
    }

    pub fn left(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn operator(&self) -> &Node {
        &self.nodes[self.operator]
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.map(|index| &self.nodes[index])
    }

    /// Right operand text, empty when it is missing
    pub fn right_text(&self) -> String {
        self.right().map(Node::text).unwrap_or_default()
    }
}

// ============================================================================
// PARENTHESIS
// ============================================================================

/// `( ... )`, possibly missing its closing paren
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parenthesis {
    nodes: Vec<Node>,
    closed: bool,
}

impl Parenthesis {
    /// `nodes` is `["(", inner*, ")"?]`; `closed` says whether the last
    /// node is this paren's own `)`
    pub(crate) fn from_nodes(nodes: Vec<Node>, closed: bool) -> Self {
        debug_assert!(!closed || nodes.len() > 1);
        Self { nodes, closed }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Children between the parens
    pub fn inner(&self) -> &[Node] {
        let end = if self.closed {
            self.nodes.len() - 1
        } else {
            self.nodes.len()
        };
        &self.nodes[1.min(end)..end]
    }
}

// ============================================================================
// FUNCTION LITERAL
// ============================================================================

/// `name(args)` with no space before the paren
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    nodes: Vec<Node>,
}

impl FunctionLiteral {
    /// `nodes` is `[name, parenthesis]`
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        debug_assert_eq!(nodes.len(), 2);
        Self { nodes }
    }

    pub fn name(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn parenthesis(&self) -> Option<&Parenthesis> {
        match self.nodes.get(1) {
            Some(Node::Parenthesis(parenthesis)) => Some(parenthesis),
            _ => None,
        }
    }

    pub fn arguments(&self) -> &[Node] {
        self.parenthesis().map(Parenthesis::inner).unwrap_or_default()
    }
}

// ============================================================================
// IDENTIFIER LIST
// ============================================================================

/// Comma separated elements, possibly ending in a dangling comma
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierList {
    nodes: Vec<Node>,
}

impl IdentifierList {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// The list elements, without separators and trivia
    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|node| !node.is_trivia() && !node.is_token(SyntaxKind::COMMA))
    }

    /// Index of the element slot a cursor at `position` is editing
    ///
    /// The slot is the number of commas that end at or before `position`.
    /// Positions outside the list, end inclusive, have no slot.
    pub fn index_at(&self, position: Position) -> Option<usize> {
        if !span_of(&self.nodes).touches(position) {
            return None;
        }
        let commas = self
            .nodes
            .iter()
            .filter(|node| node.is_token(SyntaxKind::COMMA) && node.end() <= position)
            .count();
        Some(commas)
    }
}

// ============================================================================
// MULTI KEYWORD
// ============================================================================

/// Keywords recognized as a unit: `order by`, `left outer join`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiKeyword {
    nodes: Vec<Node>,
}

impl MultiKeyword {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn keywords(&self) -> impl Iterator<Item = &Token> {
        self.nodes
            .iter()
            .filter_map(Node::token)
            .filter(|token| token.kind == SyntaxKind::WORD)
    }
}

// ============================================================================
// SWITCH CASE
// ============================================================================

/// `CASE ... END`, kept as one opaque run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCase {
    nodes: Vec<Node>,
    closed: bool,
}

impl SwitchCase {
    pub(crate) fn from_nodes(nodes: Vec<Node>, closed: bool) -> Self {
        Self { nodes, closed }
    }

    /// Whether the matching `END` was found
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

// ============================================================================
// STATEMENT
// ============================================================================

/// Top-level nodes up to and including a `;`, or to the end of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    nodes: Vec<Node>,
}

impl Statement {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_terminated(&self) -> bool {
        self.nodes
            .last()
            .is_some_and(|node| node.is_token(SyntaxKind::SEMICOLON))
    }
}
