//! Arithmetic and comparison folding
//!
//! There is no precedence: `1 + 2 * 3` folds as `(1 + 2) * 3`. Arithmetic
//! symbols build `Operator` nodes and comparison symbols build `Comparison`
//! nodes, but both chain left to right in one pass.

use super::{Fold, Link, MAX_LINKS, consume_trailing_trivia, fold_with};
use crate::parser::keywords::is_value_keyword;
use crate::syntax::{BinaryExpr, Cursor, Node};

pub(super) fn fold(nodes: Vec<Node>) -> Vec<Node> {
    fold_with("operator", nodes, &is_operand, operator)
}

fn is_operand(node: &Node) -> bool {
    match node {
        Node::Identifier(_) => !node.is_wildcard(),
        Node::Item(token) => {
            token.kind.is_literal() || (token.kind.is_name() && is_value_keyword(token.text()))
        }
        Node::MemberIdentifier(_)
        | Node::FunctionLiteral(_)
        | Node::Parenthesis(_)
        | Node::SwitchCase(_)
        | Node::Operator(_)
        | Node::Comparison(_) => true,
        Node::Aliased(_) | Node::IdentifierList(_) | Node::MultiKeyword(_) | Node::Statement(_) => {
            false
        }
    }
}

/// The link an operator symbol starts, if `node` is one
///
/// A bare `*` only gets here after a left operand, so it multiplies.
fn link_for(node: &Node, start: usize) -> Option<Link> {
    let kind = node.token_kind()?;
    if kind.is_arithmetic() {
        Some(Link::new(start, |nodes| Node::Operator(BinaryExpr::from_nodes(nodes))))
    } else if kind.is_comparison() {
        Some(Link::new(start, |nodes| Node::Comparison(BinaryExpr::from_nodes(nodes))))
    } else {
        None
    }
}

/// Trivia before an operator joins the expression only if an operator follows
fn operator(cursor: &mut Cursor<'_, Node>) -> Option<Fold> {
    let start = cursor.index();
    let mut links = Vec::new();
    while links.len() < MAX_LINKS {
        cursor.set_skip_trivia(true);
        let Some(link) = cursor
            .peek(1)
            .and_then(|node| link_for(node, cursor.index() + 1 - start))
        else {
            break;
        };
        links.push(link);
        cursor.advance();
        if cursor.peek(1).is_some_and(is_operand) {
            cursor.advance();
        } else {
            consume_trailing_trivia(cursor);
            break;
        }
    }
    Fold::left_deep(start..cursor.index() + 1, links)
}
