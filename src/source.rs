//! Sequence normalization: turning raw collections and one-shot producers
//! into cursors.
//!
//! Nothing here pulls at wrap time; traversal is fully deferred until the
//! first protocol call.

use crate::cursor::Cursor;

/// Index-ordered cursor over an in-memory sequence. Keys are `usize`
/// positions starting at zero.
#[derive(Debug)]
pub struct SeqCursor<V> {
    items: Vec<V>,
    pos: usize,
}

impl<V> SeqCursor<V> {
    pub fn new(items: Vec<V>) -> Self {
        SeqCursor { items, pos: 0 }
    }
}

impl<V: Clone> Cursor for SeqCursor<V> {
    type Key = usize;
    type Item = V;

    fn reset(&mut self) {
        self.pos = 0;
    }

    fn has_current(&mut self) -> bool {
        self.pos < self.items.len()
    }

    fn key(&mut self) -> Option<usize> {
        (self.pos < self.items.len()).then_some(self.pos)
    }

    fn current(&mut self) -> Option<V> {
        self.items.get(self.pos).cloned()
    }

    fn advance(&mut self) {
        if self.pos < self.items.len() {
            self.pos += 1;
        }
    }
}

/// Cursor over explicit `(key, value)` pairs, for sources that carry their
/// own keys.
pub struct PairsCursor<K, V> {
    items: Vec<(K, V)>,
    pos: usize,
}

impl<K, V> PairsCursor<K, V> {
    pub fn new(items: Vec<(K, V)>) -> Self {
        PairsCursor { items, pos: 0 }
    }
}

impl<K: Clone, V: Clone> Cursor for PairsCursor<K, V> {
    type Key = K;
    type Item = V;

    fn reset(&mut self) {
        self.pos = 0;
    }

    fn has_current(&mut self) -> bool {
        self.pos < self.items.len()
    }

    fn key(&mut self) -> Option<K> {
        self.items.get(self.pos).map(|(k, _)| k.clone())
    }

    fn current(&mut self) -> Option<V> {
        self.items.get(self.pos).map(|(_, v)| v.clone())
    }

    fn advance(&mut self) {
        if self.pos < self.items.len() {
            self.pos += 1;
        }
    }
}

/// Cursor over a one-shot producer closure.
///
/// The closure is pulled one element at a time, lazily; nothing is copied or
/// pulled at wrap time. This is a single-pass source: `reset` is a no-op, so
/// a second traversal silently yields nothing. Wrap it in
/// [`Rewindable`](crate::Rewindable) when replay is needed.
pub struct FnCursor<V, F> {
    producer: F,
    slot: Option<V>,
    index: usize,
    primed: bool,
    done: bool,
}

impl<V, F: FnMut() -> Option<V>> FnCursor<V, F> {
    pub fn new(producer: F) -> Self {
        FnCursor {
            producer,
            slot: None,
            index: 0,
            primed: false,
            done: false,
        }
    }

    fn prime(&mut self) {
        if !self.primed {
            self.primed = true;
            self.slot = (self.producer)();
            self.done = self.slot.is_none();
        }
    }
}

impl<V: Clone, F: FnMut() -> Option<V>> Cursor for FnCursor<V, F> {
    type Key = usize;
    type Item = V;

    // Single-pass: the producer cannot be restarted.
    fn reset(&mut self) {}

    fn has_current(&mut self) -> bool {
        self.prime();
        self.slot.is_some()
    }

    fn key(&mut self) -> Option<usize> {
        self.prime();
        self.slot.is_some().then_some(self.index)
    }

    fn current(&mut self) -> Option<V> {
        self.prime();
        self.slot.clone()
    }

    fn advance(&mut self) {
        self.prime();
        if self.done {
            return;
        }
        self.slot = (self.producer)();
        self.index += 1;
        self.done = self.slot.is_none();
    }

    fn replayable(&self) -> bool {
        false
    }
}

/// Conversion into a cursor, for APIs that accept any source shape.
pub trait IntoCursor {
    type Key: Clone;
    type Item: Clone;
    type IntoCursor: Cursor<Key = Self::Key, Item = Self::Item>;

    fn into_cursor(self) -> Self::IntoCursor;
}

impl<V: Clone> IntoCursor for Vec<V> {
    type Key = usize;
    type Item = V;
    type IntoCursor = SeqCursor<V>;

    fn into_cursor(self) -> SeqCursor<V> {
        SeqCursor::new(self)
    }
}

impl<V: Clone, const N: usize> IntoCursor for [V; N] {
    type Key = usize;
    type Item = V;
    type IntoCursor = SeqCursor<V>;

    fn into_cursor(self) -> SeqCursor<V> {
        SeqCursor::new(self.into())
    }
}

/// Create a cursor from any iterable.
///
/// # Examples
///
/// ```
/// use fastforward::{from_iter, CursorExt};
///
/// let values: Vec<i32> = from_iter(vec![1, 2, 3]).values().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn from_iter<I>(iter: I) -> SeqCursor<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    SeqCursor::new(iter.into_iter().collect())
}

/// Create a cursor from `(key, value)` pairs.
pub fn from_pairs<I, K, V>(iter: I) -> PairsCursor<K, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: Clone,
    V: Clone,
{
    PairsCursor::new(iter.into_iter().collect())
}

/// Create a single-pass cursor from a producer closure. The producer signals
/// exhaustion by returning `None`.
pub fn from_fn<V, F>(producer: F) -> FnCursor<V, F>
where
    F: FnMut() -> Option<V>,
{
    FnCursor::new(producer)
}

/// An immediately exhausted cursor.
pub fn empty<V: Clone>() -> SeqCursor<V> {
    SeqCursor::new(Vec::new())
}

/// A cursor over a single element.
pub fn emit<V: Clone>(value: V) -> SeqCursor<V> {
    SeqCursor::new(vec![value])
}
