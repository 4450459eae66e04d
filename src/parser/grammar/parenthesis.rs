//! `( ... )` folding
//!
//! Runs first. The interior of every group, up to a fixed nesting depth,
//! goes through the whole pipeline on its own, so later passes see a
//! parenthesis as one opaque operand.

use super::{Fold, MAX_DEPTH, consume_balanced, fold_with, parse_nested};
use crate::syntax::{Cursor, Node, NodeMatcher, Parenthesis, SyntaxKind};

const OPEN_PAREN: NodeMatcher<'static> = NodeMatcher::new().token_kinds(&[SyntaxKind::L_PAREN]);

pub(super) fn fold(nodes: Vec<Node>, depth: usize) -> Vec<Node> {
    fold_with("parenthesis", nodes, &OPEN_PAREN, |cursor| {
        parenthesis(cursor, depth)
    })
}

/// An unmatched `(` takes everything up to the end of the sequence
fn parenthesis(cursor: &mut Cursor<'_, Node>, depth: usize) -> Option<Fold> {
    let start = cursor.index();
    let closed = consume_balanced(
        cursor,
        |node| node.is_token(SyntaxKind::L_PAREN),
        |node| node.is_token(SyntaxKind::R_PAREN),
    );
    Some(Fold::new(start..cursor.index() + 1, move |nodes| {
        build(nodes, closed, depth)
    }))
}

/// Interiors deeper than `MAX_DEPTH` stay flat leaves
fn build(mut nodes: Vec<Node>, closed: bool, depth: usize) -> Node {
    let close = if closed { nodes.pop() } else { None };
    let inner = nodes.split_off(1.min(nodes.len()));
    if depth + 1 < MAX_DEPTH {
        nodes.extend(parse_nested(inner, depth + 1));
    } else {
        nodes.extend(inner);
    }
    nodes.extend(close);
    Node::Parenthesis(Parenthesis::from_nodes(nodes, closed))
}
