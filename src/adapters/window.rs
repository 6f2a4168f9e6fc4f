//! Overlapping fixed-size windows.

use std::collections::VecDeque;

use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};

/// Produces every overlapping window of `size` consecutive elements.
///
/// The buffer never holds more than `size` elements. A window is only
/// reported once the buffer is full, so an upstream shorter than `size`
/// yields nothing. Advancing evicts the oldest element; the replacement is
/// pulled lazily on the next query. Keys are a sequential 0-based counter
/// independent of upstream keys.
///
/// Built by [`CursorExt::windowed`](crate::CursorExt::windowed); a size
/// below 1 is a construction error.
///
/// # Examples
///
/// ```
/// use fastforward::{from_iter, CursorExt};
///
/// let windows: Vec<Vec<i32>> = from_iter(vec![1, 2, 3, 4, 5])
///     .windowed(3)
///     .unwrap()
///     .values()
///     .collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
/// ```
#[derive(Debug)]
pub struct SlidingWindow<C: Cursor> {
    upstream: C,
    size: usize,
    window: VecDeque<C::Item>,
    index: usize,
}

impl<C: Cursor> SlidingWindow<C> {
    pub(crate) fn new(upstream: C, size: usize) -> CursorResult<Self> {
        if size < 1 {
            return Err(CursorError::InvalidWindowSize(size));
        }
        Ok(SlidingWindow {
            upstream,
            size,
            window: VecDeque::with_capacity(size),
            index: 0,
        })
    }

    fn fill(&mut self) {
        while self.window.len() < self.size && self.upstream.has_current() {
            match self.upstream.current() {
                Some(value) => self.window.push_back(value),
                None => break,
            }
            self.upstream.advance();
        }
    }
}

impl<C: Cursor> Cursor for SlidingWindow<C> {
    type Key = usize;
    type Item = Vec<C::Item>;

    fn reset(&mut self) {
        self.upstream.reset();
        self.window.clear();
        self.index = 0;
    }

    fn has_current(&mut self) -> bool {
        self.fill();
        self.window.len() == self.size
    }

    fn key(&mut self) -> Option<usize> {
        self.has_current().then_some(self.index)
    }

    fn current(&mut self) -> Option<Vec<C::Item>> {
        self.has_current()
            .then(|| self.window.iter().cloned().collect())
    }

    fn advance(&mut self) {
        if self.has_current() {
            self.window.pop_front();
            self.index += 1;
        }
    }

    fn replayable(&self) -> bool {
        self.upstream.replayable()
    }
}
