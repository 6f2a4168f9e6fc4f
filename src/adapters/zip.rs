//! Synchronized traversal over several upstream cursors, shortest wins.

use crate::cursor::{BoxCursor, Cursor};
use crate::error::{CursorError, CursorResult};

/// Walks all upstreams in lockstep, producing the ordered tuple of their
/// current values as a `Vec`.
///
/// Valid only while **every** upstream has a current element: traversal
/// stops permanently once the shortest upstream runs out, even if others
/// still hold elements. Keys are a sequential counter starting at zero.
pub struct Zip<K, V> {
    cursors: Vec<BoxCursor<K, V>>,
    index: usize,
}

impl<K, V> std::fmt::Debug for Zip<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Zip")
            .field("cursors", &self.cursors.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Zip two or more cursors together.
///
/// Fewer than two upstreams is a construction error.
///
/// # Examples
///
/// ```
/// use fastforward::{zip, from_iter, CursorExt};
///
/// let zipped = zip(vec![
///     from_iter(vec![1, 2, 3]).boxed(),
///     from_iter(vec![10, 20]).boxed(),
/// ]).unwrap();
/// let rows: Vec<Vec<i32>> = zipped.values().collect();
/// assert_eq!(rows, vec![vec![1, 10], vec![2, 20]]);
/// ```
pub fn zip<K: Clone, V: Clone>(cursors: Vec<BoxCursor<K, V>>) -> CursorResult<Zip<K, V>> {
    if cursors.len() < 2 {
        return Err(CursorError::TooFewCursors {
            required: 2,
            provided: cursors.len(),
        });
    }
    Ok(Zip { cursors, index: 0 })
}

impl<K: Clone, V: Clone> Cursor for Zip<K, V> {
    type Key = usize;
    type Item = Vec<V>;

    fn reset(&mut self) {
        for cursor in &mut self.cursors {
            cursor.reset();
        }
        self.index = 0;
    }

    fn has_current(&mut self) -> bool {
        self.cursors.iter_mut().all(|c| c.has_current())
    }

    fn key(&mut self) -> Option<usize> {
        self.has_current().then_some(self.index)
    }

    fn current(&mut self) -> Option<Vec<V>> {
        if !self.has_current() {
            return None;
        }
        self.cursors.iter_mut().map(|c| c.current()).collect()
    }

    fn advance(&mut self) {
        for cursor in &mut self.cursors {
            cursor.advance();
        }
        self.index += 1;
    }

    fn replayable(&self) -> bool {
        self.cursors.iter().all(|c| c.replayable())
    }
}
