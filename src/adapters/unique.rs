//! First-occurrence deduplication.

use crate::cursor::Cursor;

/// Filters out every element already produced earlier in the traversal.
///
/// Output preserves the first-occurrence order of distinct values; the key
/// of each survivor is its original upstream key, and the keys of dropped
/// duplicates are dropped with them. Equality is configurable: the plain
/// constructor compares with `PartialEq`, the `_by` variant takes a custom
/// comparison (the place for case-insensitive or field-projected equality).
///
/// Built by [`CursorExt::unique`](crate::CursorExt::unique) and
/// [`CursorExt::unique_by`](crate::CursorExt::unique_by).
pub struct Unique<C: Cursor, F> {
    upstream: C,
    eq: F,
    seen: Vec<C::Item>,
    latched: bool,
}

impl<C, F> Unique<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    pub(crate) fn new(upstream: C, eq: F) -> Self {
        Unique {
            upstream,
            eq,
            seen: Vec::new(),
            latched: false,
        }
    }

    /// Skips upstream forward to the next unseen value and records it. The
    /// latch keeps repeated queries idempotent: the accepted value is only
    /// re-examined after an advance.
    fn settle(&mut self) -> bool {
        if self.latched {
            return true;
        }
        while self.upstream.has_current() {
            let Some(value) = self.upstream.current() else {
                return false;
            };
            let already_seen = self.seen.iter().any(|prior| (self.eq)(prior, &value));
            if !already_seen {
                self.seen.push(value);
                self.latched = true;
                return true;
            }
            self.upstream.advance();
        }
        false
    }
}

impl<C, F> Cursor for Unique<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    type Key = C::Key;
    type Item = C::Item;

    fn reset(&mut self) {
        self.upstream.reset();
        self.seen.clear();
        self.latched = false;
    }

    fn has_current(&mut self) -> bool {
        self.settle()
    }

    fn key(&mut self) -> Option<C::Key> {
        if self.settle() {
            self.upstream.key()
        } else {
            None
        }
    }

    fn current(&mut self) -> Option<C::Item> {
        if self.settle() {
            self.upstream.current()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if self.settle() {
            self.upstream.advance();
            self.latched = false;
        }
    }

    fn replayable(&self) -> bool {
        self.upstream.replayable()
    }
}
