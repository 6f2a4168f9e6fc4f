//! Bounded cyclic repetition of a finite upstream.

use log::trace;

use crate::cursor::Cursor;

/// Infinite repetition of a finite, replayable upstream: on exhaustion the
/// upstream is reset and traversal continues from its start. An empty
/// upstream stays empty.
pub struct CycleCursor<C: Cursor> {
    upstream: C,
}

impl<C: Cursor> CycleCursor<C> {
    /// Cycle a replayable upstream endlessly.
    pub fn new(upstream: C) -> Self {
        CycleCursor { upstream }
    }
}

impl<C: Cursor> Cursor for CycleCursor<C> {
    type Key = C::Key;
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
    }

    fn has_current(&mut self) -> bool {
        if self.upstream.has_current() {
            return true;
        }
        trace!("cycle: restarting upstream");
        self.upstream.reset();
        self.upstream.has_current()
    }

    fn key(&mut self) -> Option<C::Key> {
        if self.has_current() {
            self.upstream.key()
        } else {
            None
        }
    }

    fn current(&mut self) -> Option<C::Item> {
        if self.has_current() {
            self.upstream.current()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if self.has_current() {
            self.upstream.advance();
        }
    }
}

/// A bounded window over an endlessly cycled upstream: skips `offset`
/// cyclic elements, then emits exactly `limit` elements.
///
/// Traversal never ends because the upstream ran out — the cycle restarts
/// it; it ends only once `limit` elements have been emitted. Keys delegate
/// to the cycled upstream. Requires a replayable upstream (documented
/// precondition).
///
/// Built by [`CursorExt::repeat_bounded`](crate::CursorExt::repeat_bounded)
/// and
/// [`CursorExt::repeat_bounded_from`](crate::CursorExt::repeat_bounded_from).
///
/// # Examples
///
/// ```
/// use fastforward::{from_iter, CursorExt};
///
/// let values: Vec<i32> = from_iter(vec![1, 2, 3, 4, 5])
///     .repeat_bounded(10)
///     .values()
///     .collect();
/// assert_eq!(values, vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]);
/// ```
pub struct Repeatable<C: Cursor> {
    cycle: CycleCursor<C>,
    limit: usize,
    offset: usize,
    emitted: usize,
    primed: bool,
}

impl<C: Cursor> Repeatable<C> {
    pub(crate) fn new(upstream: C, limit: usize, offset: usize) -> Self {
        Repeatable {
            cycle: CycleCursor::new(upstream),
            limit,
            offset,
            emitted: 0,
            primed: false,
        }
    }

    /// The configured bound, reported unconditionally; this is the window
    /// size, not a measured element count.
    pub fn count(&self) -> usize {
        self.limit
    }

    fn prime(&mut self) {
        if self.primed {
            return;
        }
        self.primed = true;
        for _ in 0..self.offset {
            if !self.cycle.has_current() {
                break;
            }
            self.cycle.advance();
        }
    }
}

impl<C: Cursor> Cursor for Repeatable<C> {
    type Key = C::Key;
    type Item = C::Item;

    fn reset(&mut self) {
        self.cycle.reset();
        self.emitted = 0;
        self.primed = false;
    }

    fn has_current(&mut self) -> bool {
        self.prime();
        self.emitted < self.limit && self.cycle.has_current()
    }

    fn key(&mut self) -> Option<C::Key> {
        if self.has_current() {
            self.cycle.key()
        } else {
            None
        }
    }

    fn current(&mut self) -> Option<C::Item> {
        if self.has_current() {
            self.cycle.current()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if self.has_current() {
            self.cycle.advance();
            self.emitted += 1;
        }
    }
}
