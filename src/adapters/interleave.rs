//! Round-robin traversal across several upstream cursors.

use crate::cursor::{BoxCursor, Cursor};
use crate::error::{CursorError, CursorResult};

/// Alternates between upstreams one element at a time, skipping exhausted
/// upstreams, until every upstream is drained.
///
/// The key of each element is the 0-based index of the upstream it came
/// from, not a global counter.
pub struct Interleave<K, V> {
    cursors: Vec<BoxCursor<K, V>>,
    active: usize,
}

impl<K, V> std::fmt::Debug for Interleave<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interleave")
            .field("cursors", &self.cursors.len())
            .field("active", &self.active)
            .finish()
    }
}

/// Interleave one or more cursors round-robin.
///
/// Zero upstreams is a construction error.
///
/// # Examples
///
/// ```
/// use fastforward::{interleave, from_iter, CursorExt};
///
/// let merged = interleave(vec![
///     from_iter(vec![1, 3, 5]).boxed(),
///     from_iter(vec![2, 4, 6]).boxed(),
/// ]).unwrap();
/// let values: Vec<i32> = merged.values().collect();
/// assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn interleave<K: Clone, V: Clone>(
    cursors: Vec<BoxCursor<K, V>>,
) -> CursorResult<Interleave<K, V>> {
    if cursors.is_empty() {
        return Err(CursorError::TooFewCursors {
            required: 1,
            provided: 0,
        });
    }
    Ok(Interleave { cursors, active: 0 })
}

impl<K, V> Interleave<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Settles the active index on a valid upstream, scanning forward
    /// modulo the upstream count. Returns whether any upstream is valid.
    fn seek(&mut self) -> bool {
        let n = self.cursors.len();
        for step in 0..n {
            let idx = (self.active + step) % n;
            if self.cursors[idx].has_current() {
                self.active = idx;
                return true;
            }
        }
        false
    }
}

impl<K: Clone, V: Clone> Cursor for Interleave<K, V> {
    type Key = usize;
    type Item = V;

    fn reset(&mut self) {
        for cursor in &mut self.cursors {
            cursor.reset();
        }
        self.active = 0;
    }

    fn has_current(&mut self) -> bool {
        self.seek()
    }

    fn key(&mut self) -> Option<usize> {
        self.seek().then_some(self.active)
    }

    fn current(&mut self) -> Option<V> {
        if self.seek() {
            self.cursors[self.active].current()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if self.seek() {
            self.cursors[self.active].advance();
            // Hand the turn to the next upstream; the following seek walks
            // past any that are exhausted.
            self.active = (self.active + 1) % self.cursors.len();
        }
    }

    fn replayable(&self) -> bool {
        self.cursors.iter().all(|c| c.replayable())
    }
}
