//! Bidirectional peeking without disturbing the main traversal.

use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};

/// Peek ahead of and behind the main cursor position.
///
/// Every element pulled from upstream is appended to a position-indexed
/// arena; the main cursor and the peek operations are independent indices
/// into that arena, so there is one copy of the data and peeking never moves
/// the main position. Peeking any number of times between advances is
/// idempotent.
///
/// Built by [`CursorExt::lookahead`](crate::CursorExt::lookahead).
///
/// # Examples
///
/// ```
/// use fastforward::{from_iter, Cursor, CursorExt};
///
/// let mut cursor = from_iter(vec!["a", "b", "c", "d"]).lookahead();
/// cursor.advance(); // now at "b"
/// assert_eq!(cursor.current(), Some("b"));
/// assert_eq!(cursor.look_ahead(), Some("c"));
/// assert_eq!(cursor.look_behind(), Some("a"));
/// assert_eq!(cursor.current(), Some("b")); // undisturbed
/// ```
pub struct Lookahead<C: Cursor> {
    upstream: C,
    arena: Vec<(C::Key, C::Item)>,
    position: usize,
}

impl<C: Cursor> Lookahead<C> {
    pub(crate) fn new(upstream: C) -> Self {
        Lookahead {
            upstream,
            arena: Vec::new(),
            position: 0,
        }
    }

    fn fill_to(&mut self, len: usize) {
        while self.arena.len() < len && self.upstream.has_current() {
            let (Some(key), Some(value)) = (self.upstream.key(), self.upstream.current()) else {
                break;
            };
            self.arena.push((key, value));
            self.upstream.advance();
        }
    }

    /// The next value, without advancing. `None` when none remains.
    pub fn look_ahead(&mut self) -> Option<C::Item> {
        self.fill_to(self.position + 2);
        self.arena.get(self.position + 1).map(|(_, v)| v.clone())
    }

    /// Up to `count` upcoming values, in order, without advancing. Fewer
    /// are returned when upstream ends early. A count of zero is an
    /// invalid-argument error.
    pub fn look_ahead_n(&mut self, count: usize) -> CursorResult<Vec<C::Item>> {
        if count < 1 {
            return Err(CursorError::InvalidPeekCount);
        }
        self.fill_to(self.position + 1 + count);
        Ok(self
            .arena
            .iter()
            .skip(self.position + 1)
            .take(count)
            .map(|(_, v)| v.clone())
            .collect())
    }

    /// The previous value. `None` at the traversal origin.
    pub fn look_behind(&mut self) -> Option<C::Item> {
        if self.position == 0 {
            return None;
        }
        self.arena.get(self.position - 1).map(|(_, v)| v.clone())
    }

    /// The `count` values ending just before the current position, in
    /// source order. Empty when fewer than `count` elements precede the
    /// position. A count of zero is an invalid-argument error.
    pub fn look_behind_n(&mut self, count: usize) -> CursorResult<Vec<C::Item>> {
        if count < 1 {
            return Err(CursorError::InvalidPeekCount);
        }
        if self.position < count {
            return Ok(Vec::new());
        }
        Ok(self.arena[self.position - count..self.position]
            .iter()
            .map(|(_, v)| v.clone())
            .collect())
    }
}

impl<C: Cursor> Cursor for Lookahead<C> {
    type Key = C::Key;
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.arena.clear();
        self.position = 0;
    }

    fn has_current(&mut self) -> bool {
        self.fill_to(self.position + 1);
        self.position < self.arena.len()
    }

    fn key(&mut self) -> Option<C::Key> {
        self.fill_to(self.position + 1);
        self.arena.get(self.position).map(|(k, _)| k.clone())
    }

    fn current(&mut self) -> Option<C::Item> {
        self.fill_to(self.position + 1);
        self.arena.get(self.position).map(|(_, v)| v.clone())
    }

    fn advance(&mut self) {
        if self.has_current() {
            self.position += 1;
        }
    }

    fn replayable(&self) -> bool {
        self.upstream.replayable()
    }
}
