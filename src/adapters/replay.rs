//! Replay support: turning a single-pass producer into a multi-traversal
//! source by buffering everything it produces.
//!
//! Two layers. [`CachedSource`] is the buffer-plus-producer state machine;
//! [`Rewindable`] is the cursor facade that makes `reset` begin a new
//! logical traversal over it.

use log::{debug, trace};

use crate::cursor::Cursor;

enum Producer<C> {
    /// A zero-argument factory, instantiated at most once, lazily, on the
    /// first cold pull.
    Factory(Box<dyn FnOnce() -> C>),
    Live(C),
    Spent,
}

/// Full-materializing cache over a producer.
///
/// Pulls append to an internal cache; reads at indices the cache already
/// covers never touch the producer. Once [`lock`](CachedSource::lock) is
/// called over a non-empty cache, the producer is abandoned for good and
/// the cache alone serves every later read.
pub struct CachedSource<C: Cursor> {
    producer: Producer<C>,
    cache: Vec<(C::Key, C::Item)>,
    locked: bool,
}

impl<C: Cursor> CachedSource<C> {
    /// Cache an already-built cursor.
    pub fn new(cursor: C) -> Self {
        CachedSource {
            producer: Producer::Live(cursor),
            cache: Vec::new(),
            locked: false,
        }
    }

    /// Cache a factory. The factory runs at most once, on the first pull of
    /// a cold traversal; a warm cache means it never runs at all.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: FnOnce() -> C + 'static,
    {
        CachedSource {
            producer: Producer::Factory(Box::new(factory)),
            cache: Vec::new(),
            locked: false,
        }
    }

    /// Freezes the cache if it holds anything: from here on the producer is
    /// never consulted again. Called when a new traversal begins.
    pub fn lock(&mut self) {
        if !self.cache.is_empty() && !self.locked {
            trace!("cache locked with {} elements", self.cache.len());
            self.locked = true;
        }
    }

    /// Pulls one more element from the producer into the cache. Returns
    /// `false` when the producer is spent, absent, or locked out.
    fn pull(&mut self) -> bool {
        if self.locked {
            return false;
        }
        let producer = std::mem::replace(&mut self.producer, Producer::Spent);
        let mut live = match producer {
            Producer::Factory(build) => {
                debug!("cold traversal: instantiating producer");
                build()
            }
            Producer::Live(cursor) => cursor,
            Producer::Spent => return false,
        };
        if live.has_current() {
            if let (Some(key), Some(value)) = (live.key(), live.current()) {
                self.cache.push((key, value));
                live.advance();
                self.producer = Producer::Live(live);
                return true;
            }
        }
        false
    }

    /// The element at `index`, pulling from the producer as needed.
    pub fn get(&mut self, index: usize) -> Option<(C::Key, C::Item)> {
        while self.cache.len() <= index {
            if !self.pull() {
                break;
            }
        }
        self.cache.get(index).cloned()
    }
}

/// A cursor facade over [`CachedSource`]: the same sequence, traversable
/// any number of times.
///
/// The first traversal drives the producer while warming the cache; every
/// traversal after a `reset` over a warm cache replays from the cache
/// without touching the producer. The produced sequence is identical across
/// traversals.
///
/// # Examples
///
/// ```
/// use fastforward::{from_fn, CursorExt, Cursor, Rewindable};
///
/// let mut n = 0;
/// let mut cursor = Rewindable::new(from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// }));
///
/// let first: Vec<i32> = (&mut cursor).values().collect();
/// cursor.reset();
/// let second: Vec<i32> = (&mut cursor).values().collect();
/// assert_eq!(first, vec![1, 2, 3]);
/// assert_eq!(first, second);
/// ```
pub struct Rewindable<C: Cursor> {
    source: CachedSource<C>,
    pos: usize,
}

impl<C: Cursor> Rewindable<C> {
    /// Make a single-pass cursor replayable.
    pub fn new(cursor: C) -> Self {
        Rewindable {
            source: CachedSource::new(cursor),
            pos: 0,
        }
    }

    /// Make the cursors produced by a factory replayable; the factory is
    /// invoked at most once.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: FnOnce() -> C + 'static,
    {
        Rewindable {
            source: CachedSource::from_factory(factory),
            pos: 0,
        }
    }
}

impl<C: Cursor> Cursor for Rewindable<C> {
    type Key = C::Key;
    type Item = C::Item;

    fn reset(&mut self) {
        // A new logical traversal: replay from the cache when warm,
        // otherwise keep driving the producer.
        self.source.lock();
        self.pos = 0;
    }

    fn has_current(&mut self) -> bool {
        self.source.get(self.pos).is_some()
    }

    fn key(&mut self) -> Option<C::Key> {
        self.source.get(self.pos).map(|(k, _)| k)
    }

    fn current(&mut self) -> Option<C::Item> {
        self.source.get(self.pos).map(|(_, v)| v)
    }

    fn advance(&mut self) {
        if self.has_current() {
            self.pos += 1;
        }
    }

    fn replayable(&self) -> bool {
        true
    }
}
