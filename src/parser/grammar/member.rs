//! Member identifier folding: `a.b`, `a.*`, `"s"."t"`, and the
//! incomplete `a.` a user leaves while typing.

use super::{Fold, Link, MAX_LINKS, fold_with, into_identifier};
use crate::syntax::{Cursor, Matcher, MemberIdentifier, Node, NodeMatcher, SyntaxKind};

const NAME: NodeMatcher<'static> =
    NodeMatcher::new().token_kinds(&[SyntaxKind::WORD, SyntaxKind::QUOTED_IDENT]);

const CHILD: NodeMatcher<'static> = NodeMatcher::new().token_kinds(&[
    SyntaxKind::WORD,
    SyntaxKind::QUOTED_IDENT,
    SyntaxKind::WILDCARD,
]);

pub(super) fn fold(nodes: Vec<Node>) -> Vec<Node> {
    fold_with("member", nodes, &NAME, member)
}

/// Dots and children must touch: `a . b` is three nodes
fn member(cursor: &mut Cursor<'_, Node>) -> Option<Fold> {
    let start = cursor.index();
    let mut links = Vec::new();
    while links.len() < MAX_LINKS
        && cursor.peek(1).is_some_and(|node| node.is_token(SyntaxKind::DOT))
    {
        links.push(Link::new(cursor.index() + 1 - start, build));
        cursor.advance();
        if !cursor.peek(1).is_some_and(|node| CHILD.matches(node)) {
            break;
        }
        cursor.advance();
    }
    Fold::left_deep(start..cursor.index() + 1, links)
}

/// `nodes` is `[parent, ".", child?]`; keyword words name columns here
fn build(nodes: Vec<Node>) -> Node {
    let nodes = nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| if index == 1 { node } else { into_identifier(node) })
        .collect();
    Node::MemberIdentifier(MemberIdentifier::from_nodes(nodes))
}
