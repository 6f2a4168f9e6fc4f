//! Extension trait exposing the adapter suite as chainable methods.

use std::hash::Hash;

use crate::adapters::{
    Chunk, ConsecutiveGroups, GroupBy, Lookahead, Repeatable, Rewindable, SlidingWindow,
    Transform, Unique,
};
use crate::cursor::{BoxCursor, Cursor, Pairs, Values};
use crate::error::CursorResult;

/// Chainable constructors for every adapter in the suite.
///
/// Implemented for every [`Cursor`]; adapters taking a variable number of
/// upstreams are free functions instead ([`chain`](crate::chain),
/// [`zip`](crate::zip), [`interleave`](crate::interleave)).
///
/// # Examples
///
/// ```
/// use fastforward::{from_iter, CursorExt};
///
/// let chunks: Vec<Vec<i32>> = from_iter(1..=10).chunked(3).values().collect();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
/// ```
pub trait CursorExt: Cursor + Sized {
    /// Box this cursor for dynamic composition.
    fn boxed(self) -> BoxCursor<Self::Key, Self::Item>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Iterate `(key, value)` pairs through the standard `Iterator` trait.
    fn pairs(self) -> Pairs<Self> {
        Pairs::new(self)
    }

    /// Iterate values through the standard `Iterator` trait.
    fn values(self) -> Values<Self> {
        Values::new(self)
    }

    /// Batch elements into groups of `size` (clamped to a minimum of 1);
    /// the final batch may be shorter.
    fn chunked(self, size: usize) -> Chunk<Self> {
        Chunk::new(self, size)
    }

    /// Overlapping windows of exactly `size` elements. Sizes below 1 are a
    /// construction error.
    fn windowed(self, size: usize) -> CursorResult<SlidingWindow<Self>> {
        SlidingWindow::new(self, size)
    }

    /// Group runs of adjacent elements for which `same_group(prev, next)`
    /// holds.
    fn group_consecutive<F>(self, same_group: F) -> ConsecutiveGroups<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        ConsecutiveGroups::new(self, same_group)
    }

    /// Bucket all elements by a computed key, eagerly, in first-encounter
    /// order. Correct behavior across `reset` requires a replayable
    /// upstream.
    fn group_by_key<G, F>(self, key_fn: F) -> GroupBy<Self, G, F>
    where
        G: Eq + Hash + Clone,
        F: FnMut(&Self::Item, &Self::Key) -> G,
    {
        GroupBy::new(self, key_fn)
    }

    /// Keep only the first occurrence of each value, compared with
    /// `PartialEq`.
    fn unique(self) -> Unique<Self, fn(&Self::Item, &Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        Unique::new(self, |a, b| a == b)
    }

    /// Keep only the first occurrence of each value under a custom
    /// equality.
    fn unique_by<F>(self, eq: F) -> Unique<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        Unique::new(self, eq)
    }

    /// Peek ahead of and behind the traversal position without disturbing
    /// it.
    fn lookahead(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }

    /// Buffer everything produced so the sequence can be traversed again
    /// after `reset`, even over a single-pass source.
    fn rewindable(self) -> Rewindable<Self> {
        Rewindable::new(self)
    }

    /// Cycle this cursor endlessly and emit exactly `limit` elements from
    /// the start of the cycle. Requires a replayable upstream.
    fn repeat_bounded(self, limit: usize) -> Repeatable<Self> {
        Repeatable::new(self, limit, 0)
    }

    /// Like [`repeat_bounded`](CursorExt::repeat_bounded), with the window
    /// starting `offset` cyclic elements in.
    fn repeat_bounded_from(self, limit: usize, offset: usize) -> Repeatable<Self> {
        Repeatable::new(self, limit, offset)
    }

    /// Apply a function to `(value, key)` on every `current()` call; keys
    /// and traversal are untouched.
    fn map_values<U, F>(self, transform: F) -> Transform<Self, F, U>
    where
        F: FnMut(&Self::Item, &Self::Key) -> U,
        U: Clone,
    {
        Transform::new(self, transform)
    }

    /// Trim surrounding whitespace from each string element.
    fn trimmed(self) -> Transform<Self, fn(&Self::Item, &Self::Key) -> String, String>
    where
        Self::Item: AsRef<str>,
    {
        Transform::new(self, |value, _key| value.as_ref().trim().to_string())
    }
}

impl<C: Cursor> CursorExt for C {}
