//! Position-restorable reader over a token or node sequence.
//!
//! The cursor either visits every element, or (with trivia skipping on)
//! steps over whitespace and comments transparently. Passes that care about
//! exact adjacency, like `name(` detection, must read raw.

use super::{Node, Token};

/// Anything the cursor can walk over
pub trait Element {
    fn is_trivia(&self) -> bool;
}

impl Element for Token {
    fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl Element for Node {
    fn is_trivia(&self) -> bool {
        Node::is_trivia(self)
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    index: usize,
    skip_trivia: bool,
}

impl<'a, T: Element> Cursor<'a, T> {
    /// A raw cursor on the first element
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            index: 0,
            skip_trivia: false,
        }
    }

    pub fn with_skip_trivia(mut self, skip: bool) -> Self {
        self.skip_trivia = skip;
        self
    }

    pub fn set_skip_trivia(&mut self, skip: bool) {
        self.skip_trivia = skip;
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a T> {
        self.items.get(self.index)
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.items.len()
    }

    /// Index of the `n`th element after the current one
    ///
    /// `peek_index(1)` is the next element; trivia is not counted (nor
    /// returned) while skipping is on.
    pub fn peek_index(&self, n: usize) -> Option<usize> {
        if n == 0 {
            return (!self.is_done()).then_some(self.index);
        }
        let mut remaining = n;
        for index in self.index + 1..self.items.len() {
            if self.skip_trivia && self.items[index].is_trivia() {
                continue;
            }
            remaining -= 1;
            if remaining == 0 {
                return Some(index);
            }
        }
        None
    }

    pub fn peek(&self, n: usize) -> Option<&'a T> {
        self.peek_index(n).map(|index| &self.items[index])
    }

    /// Move to the next element and return it; past the end yields `None`
    pub fn advance(&mut self) -> Option<&'a T> {
        self.index = self.peek_index(1).unwrap_or(self.items.len());
        self.current()
    }

    /// Save the current position for a later [`Cursor::reset`]
    pub fn mark(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self, mark: usize) {
        self.index = mark.min(self.items.len());
    }
}
