//! Alias folding: `expr AS name` and `expr name`

use super::{Fold, fold_with};
use crate::syntax::{Aliased, Cursor, Node};

pub(super) fn fold(nodes: Vec<Node>) -> Vec<Node> {
    fold_with("aliased", nodes, &is_real_name, aliased)
}

fn is_real_name(node: &Node) -> bool {
    match node {
        Node::Identifier(_) => !node.is_wildcard(),
        Node::MemberIdentifier(_)
        | Node::Parenthesis(_)
        | Node::FunctionLiteral(_)
        | Node::SwitchCase(_) => true,
        _ => false,
    }
}

fn is_alias_name(node: &Node) -> bool {
    matches!(node, Node::Identifier(_)) && !node.is_wildcard()
}

/// Comments and line breaks between the parts stay inside the node
fn aliased(cursor: &mut Cursor<'_, Node>) -> Option<Fold> {
    let start = cursor.mark();
    cursor.set_skip_trivia(true);
    if cursor.peek(1).is_some_and(|node| node.is_keyword("as")) {
        cursor.advance();
    }
    if !cursor.peek(1).is_some_and(is_alias_name) {
        cursor.reset(start);
        return None;
    }
    cursor.advance();
    Some(Fold::new(start..cursor.index() + 1, |nodes| {
        Node::Aliased(Aliased::from_nodes(nodes))
    }))
}
