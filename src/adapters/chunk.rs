//! Fixed-size batching.

use crate::cursor::Cursor;

/// Groups upstream elements into batches of a fixed size.
///
/// Every batch holds exactly `size` elements except the last, which may be
/// shorter when the element count is not an exact multiple. An empty
/// upstream produces no batches. Keys are the 0-based batch counter.
///
/// Built by [`CursorExt::chunked`](crate::CursorExt::chunked); a size of
/// zero is clamped to one.
pub struct Chunk<C: Cursor> {
    upstream: C,
    size: usize,
    batch: Option<Vec<C::Item>>,
    index: usize,
}

impl<C: Cursor> Chunk<C> {
    pub(crate) fn new(upstream: C, size: usize) -> Self {
        Chunk {
            upstream,
            size: size.max(1),
            batch: None,
            index: 0,
        }
    }

    fn fill(&mut self) {
        if self.batch.is_some() {
            return;
        }
        let mut buf = Vec::with_capacity(self.size);
        while buf.len() < self.size && self.upstream.has_current() {
            match self.upstream.current() {
                Some(value) => buf.push(value),
                None => break,
            }
            self.upstream.advance();
        }
        if !buf.is_empty() {
            self.batch = Some(buf);
        }
    }
}

impl<C: Cursor> Cursor for Chunk<C> {
    type Key = usize;
    type Item = Vec<C::Item>;

    fn reset(&mut self) {
        self.upstream.reset();
        self.batch = None;
        self.index = 0;
    }

    fn has_current(&mut self) -> bool {
        self.fill();
        self.batch.is_some()
    }

    fn key(&mut self) -> Option<usize> {
        self.fill();
        self.batch.is_some().then_some(self.index)
    }

    fn current(&mut self) -> Option<Vec<C::Item>> {
        self.fill();
        self.batch.clone()
    }

    fn advance(&mut self) {
        self.fill();
        if self.batch.take().is_some() {
            self.index += 1;
        }
    }

    fn replayable(&self) -> bool {
        self.upstream.replayable()
    }
}
