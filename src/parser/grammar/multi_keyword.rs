//! Multi-word keyword folding: `order by`, `left outer join`, `is not`, ...
//!
//! Words must be separated by exactly one space. `order  by` or
//! `order\nby` stay separate keywords.

use super::{Fold, fold_with};
use crate::parser::keywords::MULTI_KEYWORDS;
use crate::syntax::{Cursor, MultiKeyword, Node, NodeMatcher, SyntaxKind};

const WORD: NodeMatcher<'static> = NodeMatcher::new().token_kinds(&[SyntaxKind::WORD]);

pub(super) fn fold(nodes: Vec<Node>) -> Vec<Node> {
    fold_with("multi_keyword", nodes, &WORD, multi_keyword)
}

fn multi_keyword(cursor: &mut Cursor<'_, Node>) -> Option<Fold> {
    let start = cursor.mark();
    for words in MULTI_KEYWORDS {
        if matches_words(cursor, words) {
            return Some(Fold::new(start..cursor.index() + 1, build));
        }
        cursor.reset(start);
    }
    None
}

fn matches_words(cursor: &mut Cursor<'_, Node>, words: &[&str]) -> bool {
    let Some((first, rest)) = words.split_first() else {
        return false;
    };
    if !cursor.current().is_some_and(|node| is_word(node, first)) {
        return false;
    }
    for word in rest {
        let separated = cursor.advance().is_some_and(is_single_space);
        if !separated || !cursor.advance().is_some_and(|node| is_word(node, word)) {
            return false;
        }
    }
    true
}

fn is_word(node: &Node, word: &str) -> bool {
    node.token().is_some_and(|token| token.is_word(word))
}

fn is_single_space(node: &Node) -> bool {
    node.token()
        .is_some_and(|token| token.kind == SyntaxKind::WHITESPACE && token.text() == " ")
}

/// Words inside a multi-keyword are keyword items, even `key`
fn build(nodes: Vec<Node>) -> Node {
    let nodes = nodes
        .into_iter()
        .map(|node| match node {
            Node::Identifier(token) => Node::Item(token),
            other => other,
        })
        .collect();
    Node::MultiKeyword(MultiKeyword::from_nodes(nodes))
}
