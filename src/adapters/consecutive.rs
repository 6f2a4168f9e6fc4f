//! Grouping of consecutive elements under a binary predicate.

use crate::cursor::Cursor;

/// Groups runs of adjacent elements for which the predicate holds.
///
/// The predicate receives the last buffered element and the next upstream
/// element; when it rejects, the pending element stays un-consumed in
/// upstream and opens the following group. Keys are the 0-based group
/// counter.
///
/// `reset` requires a replayable upstream; over a one-shot producer a second
/// traversal silently yields nothing.
///
/// Built by
/// [`CursorExt::group_consecutive`](crate::CursorExt::group_consecutive).
///
/// # Examples
///
/// ```
/// use fastforward::{from_iter, CursorExt};
///
/// let groups: Vec<Vec<i32>> = from_iter(vec![1, 1, 2, 2, 2, 3])
///     .group_consecutive(|prev, next| prev == next)
///     .values()
///     .collect();
/// assert_eq!(groups, vec![vec![1, 1], vec![2, 2, 2], vec![3]]);
/// ```
pub struct ConsecutiveGroups<C: Cursor, F> {
    upstream: C,
    same_group: F,
    buffer: Vec<C::Item>,
    index: usize,
    seeded: bool,
}

impl<C, F> ConsecutiveGroups<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    pub(crate) fn new(upstream: C, same_group: F) -> Self {
        ConsecutiveGroups {
            upstream,
            same_group,
            buffer: Vec::new(),
            index: 0,
            seeded: false,
        }
    }

    /// Accumulates the next group. Stops at the first element the predicate
    /// rejects, leaving it in upstream for the following call.
    fn refill(&mut self) {
        self.buffer.clear();
        while self.upstream.has_current() {
            let Some(value) = self.upstream.current() else {
                break;
            };
            if let Some(last) = self.buffer.last() {
                if !(self.same_group)(last, &value) {
                    break;
                }
            }
            self.buffer.push(value);
            self.upstream.advance();
        }
    }

    fn seed(&mut self) {
        if !self.seeded {
            self.seeded = true;
            self.refill();
        }
    }
}

impl<C, F> Cursor for ConsecutiveGroups<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    type Key = usize;
    type Item = Vec<C::Item>;

    fn reset(&mut self) {
        self.upstream.reset();
        self.buffer.clear();
        self.index = 0;
        // Re-seeding happens lazily on the next query, equivalent to one
        // advance after reset.
        self.seeded = false;
    }

    fn has_current(&mut self) -> bool {
        self.seed();
        !self.buffer.is_empty()
    }

    fn key(&mut self) -> Option<usize> {
        self.seed();
        (!self.buffer.is_empty()).then_some(self.index)
    }

    fn current(&mut self) -> Option<Vec<C::Item>> {
        self.seed();
        (!self.buffer.is_empty()).then(|| self.buffer.clone())
    }

    fn advance(&mut self) {
        self.seed();
        if !self.buffer.is_empty() {
            self.refill();
            self.index += 1;
        }
    }

    fn replayable(&self) -> bool {
        self.upstream.replayable()
    }
}
