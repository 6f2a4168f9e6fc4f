//! Elementwise transformation on `current()`.

use std::marker::PhantomData;

use crate::cursor::Cursor;

/// Applies a user function to `(value, key)` on every `current()` call.
///
/// Keys, advancement, validity and reset all delegate to upstream
/// untouched; only the produced value changes. This is the building block
/// for fixed per-element transformations such as
/// [`trimmed`](crate::CursorExt::trimmed).
///
/// Built by [`CursorExt::map_values`](crate::CursorExt::map_values).
pub struct Transform<C: Cursor, F, U> {
    upstream: C,
    transform: F,
    _out: PhantomData<fn() -> U>,
}

impl<C, F, U> Transform<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Key) -> U,
    U: Clone,
{
    pub(crate) fn new(upstream: C, transform: F) -> Self {
        Transform {
            upstream,
            transform,
            _out: PhantomData,
        }
    }
}

impl<C, F, U> Cursor for Transform<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Key) -> U,
    U: Clone,
{
    type Key = C::Key;
    type Item = U;

    fn reset(&mut self) {
        self.upstream.reset();
    }

    fn has_current(&mut self) -> bool {
        self.upstream.has_current()
    }

    fn key(&mut self) -> Option<C::Key> {
        self.upstream.key()
    }

    fn current(&mut self) -> Option<U> {
        let key = self.upstream.key()?;
        let value = self.upstream.current()?;
        Some((self.transform)(&value, &key))
    }

    fn advance(&mut self) {
        self.upstream.advance();
    }

    fn replayable(&self) -> bool {
        self.upstream.replayable()
    }
}
