//! The pull-based iteration protocol every adapter in this crate speaks.
//!
//! A [`Cursor`] is a resettable, keyed, single-consumer view over a sequence.
//! Adapters wrap one or more upstream cursors and expose a transformed view
//! through the same protocol, so composition is plain nesting.

/// The uniform pull protocol.
///
/// The contract, which every adapter in this crate honors:
///
/// * [`has_current`](Cursor::has_current) reports whether a current element
///   exists. It may lazily pull from upstream to answer (filling a window,
///   skipping duplicates, materializing groups), but repeated calls without
///   an intervening [`advance`](Cursor::advance) never change observable
///   state.
/// * [`current`](Cursor::current) and [`key`](Cursor::key) are `Some` exactly
///   when `has_current` is `true`; when no element exists they return `None`
///   rather than panicking.
/// * [`advance`](Cursor::advance) moves to the next element and invalidates
///   the previous `current` result. Advancing an exhausted cursor is a no-op.
/// * [`reset`](Cursor::reset) returns the cursor to its initial state. For
///   single-pass sources reset is unsupported: it is a no-op and a second
///   traversal silently yields nothing (see
///   [`replayable`](Cursor::replayable)).
///
/// Methods that merely answer questions still take `&mut self` because
/// answering may require pulling from upstream; the mutation is internal
/// bookkeeping only.
pub trait Cursor {
    /// Key type produced alongside each element.
    type Key: Clone;
    /// Element type this cursor produces.
    type Item: Clone;

    /// Returns the cursor to its initial state.
    fn reset(&mut self);

    /// Whether a current element exists.
    fn has_current(&mut self) -> bool;

    /// The key of the current element, `None` when exhausted.
    fn key(&mut self) -> Option<Self::Key>;

    /// The current element, `None` when exhausted.
    fn current(&mut self) -> Option<Self::Item>;

    /// Moves to the next element. No-op once exhausted.
    fn advance(&mut self);

    /// Whether this cursor can produce the same sequence again after
    /// [`reset`](Cursor::reset). One-shot producers report `false`, and so
    /// does anything directly downstream of one.
    fn replayable(&self) -> bool {
        true
    }
}

/// A boxed, heap-allocated cursor, the dynamic form used by the combining
/// adapters (chain, zip, interleave) that hold a variable number of
/// upstreams.
pub type BoxCursor<K, V> = Box<dyn Cursor<Key = K, Item = V>>;

impl<'a, C: Cursor + ?Sized> Cursor for &'a mut C {
    type Key = C::Key;
    type Item = C::Item;

    fn reset(&mut self) {
        (**self).reset()
    }

    fn has_current(&mut self) -> bool {
        (**self).has_current()
    }

    fn key(&mut self) -> Option<Self::Key> {
        (**self).key()
    }

    fn current(&mut self) -> Option<Self::Item> {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn replayable(&self) -> bool {
        (**self).replayable()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Key = C::Key;
    type Item = C::Item;

    fn reset(&mut self) {
        (**self).reset()
    }

    fn has_current(&mut self) -> bool {
        (**self).has_current()
    }

    fn key(&mut self) -> Option<Self::Key> {
        (**self).key()
    }

    fn current(&mut self) -> Option<Self::Item> {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn replayable(&self) -> bool {
        (**self).replayable()
    }
}

/// Iterator over `(key, value)` pairs, driving the cursor protocol.
///
/// Created by [`CursorExt::pairs`](crate::CursorExt::pairs); this is the
/// bridge into `for` loops and the rest of the `Iterator` ecosystem.
pub struct Pairs<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> Pairs<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Pairs { cursor }
    }
}

impl<C: Cursor> Iterator for Pairs<C> {
    type Item = (C::Key, C::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_current() {
            return None;
        }
        let key = self.cursor.key()?;
        let value = self.cursor.current()?;
        self.cursor.advance();
        Some((key, value))
    }
}

/// Iterator over values only.
///
/// Created by [`CursorExt::values`](crate::CursorExt::values).
pub struct Values<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> Values<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Values { cursor }
    }
}

impl<C: Cursor> Iterator for Values<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_current() {
            return None;
        }
        let value = self.cursor.current()?;
        self.cursor.advance();
        Some(value)
    }
}
