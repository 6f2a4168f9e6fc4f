//! Sequential traversal across several upstream cursors.

use crate::cursor::{BoxCursor, Cursor};

/// Chains upstream cursors end to end, in construction order.
///
/// The active index only ever moves forward: once an upstream is exhausted
/// it is skipped permanently. A chain of zero cursors is valid and
/// immediately exhausted.
///
/// # Examples
///
/// ```
/// use fastforward::{chain, from_iter, CursorExt};
///
/// let chained = chain(vec![
///     from_iter(vec![1, 2]).boxed(),
///     from_iter(vec![3, 4]).boxed(),
/// ]);
/// let values: Vec<i32> = chained.values().collect();
/// assert_eq!(values, vec![1, 2, 3, 4]);
/// ```
pub struct Chain<K, V> {
    cursors: Vec<BoxCursor<K, V>>,
    active: usize,
}

/// Chain any number of cursors into one sequential traversal.
pub fn chain<K: Clone, V: Clone>(cursors: Vec<BoxCursor<K, V>>) -> Chain<K, V> {
    Chain { cursors, active: 0 }
}

impl<K: Clone, V: Clone> Cursor for Chain<K, V> {
    type Key = K;
    type Item = V;

    fn reset(&mut self) {
        for cursor in &mut self.cursors {
            cursor.reset();
        }
        self.active = 0;
    }

    fn has_current(&mut self) -> bool {
        while self.active < self.cursors.len() {
            if self.cursors[self.active].has_current() {
                return true;
            }
            self.active += 1;
        }
        false
    }

    fn key(&mut self) -> Option<K> {
        if self.has_current() {
            self.cursors[self.active].key()
        } else {
            None
        }
    }

    fn current(&mut self) -> Option<V> {
        if self.has_current() {
            self.cursors[self.active].current()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if self.has_current() {
            self.cursors[self.active].advance();
        }
    }

    fn replayable(&self) -> bool {
        self.cursors.iter().all(|c| c.replayable())
    }
}
