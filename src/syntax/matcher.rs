//! Predicate-driven scanning over node sequences.
//!
//! [`scan`] and [`walk`] are the single traversal primitive: the tree
//! builder uses them to find runs to fold, the `ide` queries to pull nodes
//! out of a statement. Neither mutates the input.

use super::cursor::Cursor;
use super::{Node, NodeKind, SyntaxKind};

/// A predicate over node shape
pub trait Matcher {
    fn matches(&self, node: &Node) -> bool;
}

impl<F: Fn(&Node) -> bool> Matcher for F {
    fn matches(&self, node: &Node) -> bool {
        self(node)
    }
}

/// Declarative matcher: every filter that is set must hold
///
/// ```
/// use sqlfold::syntax::{Matcher, NodeKind, NodeMatcher};
///
/// const AS_KEYWORD: NodeMatcher<'static> =
///     NodeMatcher::new().kinds(&[NodeKind::Item]).texts(&["as"]);
///
/// let document = sqlfold::parse("AS");
/// let statement = document.statements().next().unwrap();
/// let node = &sqlfold::syntax::TokenList::children(statement)[0];
/// assert!(AS_KEYWORD.matches(node));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeMatcher<'m> {
    kinds: &'m [NodeKind],
    token_kinds: &'m [SyntaxKind],
    texts: &'m [&'m str],
    child_count: Option<usize>,
}

impl<'m> NodeMatcher<'m> {
    /// Matches every node until filters are added
    pub const fn new() -> Self {
        Self {
            kinds: &[],
            token_kinds: &[],
            texts: &[],
            child_count: None,
        }
    }

    pub const fn kinds(self, kinds: &'m [NodeKind]) -> Self {
        Self { kinds, ..self }
    }

    /// Leaves whose token has one of these kinds
    pub const fn token_kinds(self, token_kinds: &'m [SyntaxKind]) -> Self {
        Self {
            token_kinds,
            ..self
        }
    }

    /// Leaves whose text equals one of these, ignoring ASCII case
    pub const fn texts(self, texts: &'m [&'m str]) -> Self {
        Self { texts, ..self }
    }

    /// Containers with exactly this many children
    pub const fn child_count(self, count: usize) -> Self {
        Self {
            child_count: Some(count),
            ..self
        }
    }
}

impl Matcher for NodeMatcher<'_> {
    fn matches(&self, node: &Node) -> bool {
        if !self.kinds.is_empty() && !self.kinds.contains(&node.kind()) {
            return false;
        }
        if !self.token_kinds.is_empty()
            && !node
                .token_kind()
                .is_some_and(|kind| self.token_kinds.contains(&kind))
        {
            return false;
        }
        if !self.texts.is_empty()
            && !node.token().is_some_and(|token| {
                self.texts
                    .iter()
                    .any(|text| token.text().eq_ignore_ascii_case(text))
            })
        {
            return false;
        }
        match self.child_count {
            Some(count) => node.children().map(<[Node]>::len) == Some(count),
            None => true,
        }
    }
}

/// Run `handler` at every top-level node `matcher` accepts
///
/// The handler gets a raw cursor positioned on the match and may advance
/// it; it must leave the cursor on the last node it consumed. Scanning
/// resumes after that node. Results are collected in source order.
pub fn scan<'a, M, F, I, R>(nodes: &'a [Node], matcher: &M, mut handler: F) -> Vec<R>
where
    M: Matcher + ?Sized,
    F: FnMut(&mut Cursor<'a, Node>) -> I,
    I: IntoIterator<Item = R>,
{
    let mut results = Vec::new();
    let mut cursor = Cursor::new(nodes);
    while let Some(node) = cursor.current() {
        if matcher.matches(node) {
            let start = cursor.index();
            results.extend(handler(&mut cursor));
            cursor.set_skip_trivia(false);
            if cursor.index() < start {
                cursor.reset(start);
            }
        }
        cursor.advance();
    }
    results
}

/// Like [`scan`], but descends into containers that do not match
pub fn walk<'a, M, F, I, R>(nodes: &'a [Node], matcher: &M, mut handler: F) -> Vec<R>
where
    M: Matcher + ?Sized,
    F: FnMut(&mut Cursor<'a, Node>) -> I,
    I: IntoIterator<Item = R>,
{
    let mut results = Vec::new();
    walk_into(nodes, matcher, &mut handler, &mut results);
    results
}

fn walk_into<'a, M, F, I, R>(nodes: &'a [Node], matcher: &M, handler: &mut F, results: &mut Vec<R>)
where
    M: Matcher + ?Sized,
    F: FnMut(&mut Cursor<'a, Node>) -> I,
    I: IntoIterator<Item = R>,
{
    let mut cursor = Cursor::new(nodes);
    while let Some(node) = cursor.current() {
        if matcher.matches(node) {
            let start = cursor.index();
            results.extend(handler(&mut cursor));
            cursor.set_skip_trivia(false);
            if cursor.index() < start {
                cursor.reset(start);
            }
        } else if let Some(children) = node.children() {
            walk_into(children, matcher, handler, results);
        }
        cursor.advance();
    }
}
