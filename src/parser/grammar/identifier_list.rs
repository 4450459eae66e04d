//! Comma list folding: `a, b, c`
//!
//! A trailing comma is kept with the trivia after it, so `select foo,  from t`
//! gives the list `foo,  ` and a cursor in that gap lands in the empty slot.

use super::{Fold, consume_trailing_trivia, fold_with};
use crate::parser::keywords::is_value_keyword;
use crate::syntax::{Cursor, IdentifierList, Node, SyntaxKind};

pub(super) fn fold(nodes: Vec<Node>) -> Vec<Node> {
    fold_with("identifier_list", nodes, &is_element, identifier_list)
}

/// Anything but trivia, punctuation, operator symbols, keywords and bare groups
///
/// `(a, b), (c, d)` is a row of values, not a list of lists.
fn is_element(node: &Node) -> bool {
    match node {
        Node::Item(token) => match token.kind {
            SyntaxKind::WORD => is_value_keyword(token.text()),
            kind => kind.is_literal() || kind == SyntaxKind::UNKNOWN,
        },
        Node::Parenthesis(_) | Node::MultiKeyword(_) | Node::Statement(_) => false,
        _ => true,
    }
}

fn identifier_list(cursor: &mut Cursor<'_, Node>) -> Option<Fold> {
    let start = cursor.mark();
    let mut commas = 0;
    cursor.set_skip_trivia(true);
    while cursor
        .peek(1)
        .is_some_and(|node| node.is_token(SyntaxKind::COMMA))
    {
        cursor.advance();
        commas += 1;
        if cursor.peek(1).is_some_and(is_element) {
            cursor.advance();
        } else {
            consume_trailing_trivia(cursor);
            break;
        }
    }
    if commas == 0 {
        cursor.reset(start);
        return None;
    }
    Some(Fold::new(start..cursor.index() + 1, |nodes| {
        Node::IdentifierList(IdentifierList::from_nodes(nodes))
    }))
}
