//! A small FIFO queue.
//!
//! This exists to drive [`Tree::level_order`](crate::Tree::level_order): the
//! traversal enqueues node references breadth-first and drains them in
//! arrival order. The queue never outlives the traversal call.

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// A first-in, first-out container.
///
/// # Examples
///
/// ```
/// use bstree::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] when the queue holds no items. Callers
    /// that check [`is_empty`](Queue::is_empty) first never see this.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyQueue)
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of items currently queued.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_come_out_in_arrival_order() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Ok("b"));

        queue.enqueue("d");
        assert_eq!(queue.dequeue(), Ok("c"));
        assert_eq!(queue.dequeue(), Ok("d"));
    }

    #[test]
    fn dequeue_on_empty_fails() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));

        queue.enqueue(1);
        queue.dequeue().unwrap();
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
    }
}
