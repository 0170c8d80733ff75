//! Frontier containers used by the traversals.
//!
//! The queries only rely on the [`Frontier`] contract: [`Queue`] hands
//! items back in FIFO order (breadth-first search), [`Stack`] in LIFO order
//! (the iterative depth-first searches).

use std::collections::VecDeque;

/// The "to be visited" set of a traversal.
pub trait Frontier<T> {
    /// Adds an item to the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item, if any.
    fn pop(&mut self) -> Option<T>;

    /// Number of items waiting.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO frontier.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// LIFO frontier.
///
/// Besides the [`Frontier`] operations, the top element can be inspected
/// and updated in place, which lets a DFS keep a per-vertex neighbor cursor
/// on the stack instead of recursing.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// The most recently pushed item.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutable access to the most recently pushed item.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
