use std::fmt;

use super::node::{Node, TokenList};
use super::nodes::Statement;

/// The parse result: the statements of one buffer, in order
///
/// Concatenating the text of every statement reproduces the parsed buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub(crate) fn new(statements: Vec<Statement>) -> Self {
        Self {
            nodes: statements.into_iter().map(Node::Statement).collect(),
        }
    }

    pub fn statements(&self) -> impl DoubleEndedIterator<Item = &Statement> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Statement(statement) => Some(statement),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TokenList for Document {
    fn children(&self) -> &[Node] {
        &self.nodes
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.nodes.iter().try_for_each(|node| fmt::Display::fmt(node, f))
    }
}
