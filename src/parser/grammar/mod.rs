//! Fold passes of the tree builder
//!
//! Each pass scans a sibling sequence with a matcher, plans the runs it
//! wants to fold, then replaces each run with one new parent node. The
//! passes run in a fixed order over every statement:
//!
//! ```text
//! 1. parenthesis      ( ... )                 inner nodes get the whole pipeline
//! 2. multi_keyword    order by, left outer join
//! 3. member           a.b  a.*  a.            left-deep over a.b.c
//! 4. function         name(...)               no whitespace before the paren
//! 5. case             CASE ... END            opaque
//! 6. operator         a + b  a = b            left-deep, no precedence
//! 7. aliased          expr [AS] name
//! 8. identifier_list  a, b, c                 trailing comma allowed
//! ```
//!
//! A pass never looks inside nodes folded by an earlier pass.
//!
//! Nesting is bounded so that parsing and every later tree walk stay within
//! a fixed stack depth: groups past `MAX_DEPTH` keep their interior as
//! flat leaves, and a chain stops after `MAX_LINKS` links and the rest of
//! it starts a new chain.

mod aliased;
mod case;
mod function;
mod identifier_list;
mod member;
mod multi_keyword;
mod operator;
mod parenthesis;

use std::iter;
use std::ops::Range;

use tracing::trace;

use crate::syntax::{Cursor, Matcher, Node, scan};

type Pass = fn(Vec<Node>) -> Vec<Node>;

/// Group nesting past which a group's interior is not folded
const MAX_DEPTH: usize = 64;

/// Links in one left-deep chain such as `a.b.c` or `1 + 2 - 3`
const MAX_LINKS: usize = 32;

/// Passes after the parenthesis pass, which runs first and carries the depth
const PASSES: &[Pass] = &[
    multi_keyword::fold,
    member::fold,
    function::fold,
    case::fold,
    operator::fold,
    aliased::fold,
    identifier_list::fold,
];

/// Run every fold pass over the top-level nodes of a statement
pub(crate) fn parse_nodes(nodes: Vec<Node>) -> Vec<Node> {
    parse_nested(nodes, 0)
}

/// Run every fold pass over a sibling sequence `depth` groups deep
fn parse_nested(nodes: Vec<Node>, depth: usize) -> Vec<Node> {
    let nodes = parenthesis::fold(nodes, depth);
    PASSES.iter().fold(nodes, |nodes, pass| pass(nodes))
}

// ============================================================================
// FOLD PLANS
// ============================================================================

/// A planned fold: the sibling run to replace and how to build its parent
pub(crate) struct Fold {
    range: Range<usize>,
    build: Box<dyn FnOnce(Vec<Node>) -> Node>,
}

impl Fold {
    pub(crate) fn new(range: Range<usize>, build: impl FnOnce(Vec<Node>) -> Node + 'static) -> Self {
        Self {
            range,
            build: Box::new(build),
        }
    }

    /// Fold a chain like `a.b.c` or `1 + 2 - 3` into a left-deep tree
    ///
    /// Each link starts where its segment starts inside the run; the
    /// segment's parent wraps everything folded before it. `None` when
    /// there are no links.
    pub(crate) fn left_deep(range: Range<usize>, mut links: Vec<Link>) -> Option<Self> {
        let last = links.pop()?;
        Some(Self::new(range, move |nodes| build_left_deep(nodes, last, &links)))
    }
}

/// One segment of a left-deep chain
#[derive(Clone, Copy)]
pub(crate) struct Link {
    start: usize,
    build: fn(Vec<Node>) -> Node,
}

impl Link {
    pub(crate) fn new(start: usize, build: fn(Vec<Node>) -> Node) -> Self {
        Self { start, build }
    }
}

fn build_left_deep(mut nodes: Vec<Node>, last: Link, init: &[Link]) -> Node {
    if let Some((&previous, init)) = init.split_last() {
        let tail = nodes.split_off(last.start);
        let left = build_left_deep(nodes, previous, init);
        nodes = iter::once(left).chain(tail).collect();
    }
    (last.build)(nodes)
}

/// Replace each planned run with its folded parent
///
/// Folds must be in source order and must not overlap, which is what
/// [`scan`] produces.
fn apply(nodes: Vec<Node>, folds: Vec<Fold>) -> Vec<Node> {
    if folds.is_empty() {
        return nodes;
    }
    let mut result = Vec::with_capacity(nodes.len());
    let mut remaining = nodes.into_iter();
    let mut index = 0;
    for fold in folds {
        result.extend(remaining.by_ref().take(fold.range.start.saturating_sub(index)));
        let run: Vec<Node> = remaining.by_ref().take(fold.range.len()).collect();
        index = fold.range.end;
        result.push((fold.build)(run));
    }
    result.extend(remaining);
    result
}

fn fold_with<M, F>(pass: &'static str, nodes: Vec<Node>, matcher: &M, handler: F) -> Vec<Node>
where
    M: Matcher + ?Sized,
    F: FnMut(&mut Cursor<'_, Node>) -> Option<Fold>,
{
    let folds = scan(&nodes, matcher, handler);
    if !folds.is_empty() {
        trace!(pass, folds = folds.len(), nodes = nodes.len(), "folded runs");
    }
    apply(nodes, folds)
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// Consume from an opening node to its balancing close
///
/// Nested opens are depth-counted. Returns whether the close was found;
/// either way the cursor is left on the last consumed node.
fn consume_balanced(
    cursor: &mut Cursor<'_, Node>,
    opens: impl Fn(&Node) -> bool,
    closes: impl Fn(&Node) -> bool,
) -> bool {
    let mut depth = 0usize;
    while let Some(node) = cursor.current() {
        if opens(node) {
            depth += 1;
        } else if closes(node) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return true;
            }
        }
        if cursor.peek(1).is_none() {
            break;
        }
        cursor.advance();
    }
    false
}

/// Step a raw cursor over the trivia directly after the current node
fn consume_trailing_trivia(cursor: &mut Cursor<'_, Node>) {
    cursor.set_skip_trivia(false);
    while cursor.peek(1).is_some_and(Node::is_trivia) {
        cursor.advance();
    }
}

/// Keyword leaves become identifiers where a name is expected
fn into_identifier(node: Node) -> Node {
    match node {
        Node::Item(token) if token.kind.is_name() => Node::Identifier(token),
        other => other,
    }
}
