//! Keyed grouping with eager materialization.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::cursor::Cursor;

/// Buckets every upstream element under a computed group key.
///
/// Grouping is inherently eager: the first protocol call fully drains
/// upstream into ordered buckets, and everything afterwards walks the
/// materialized result without touching upstream again. Bucket order is the
/// first-encounter order of each group key; elements within a bucket keep
/// source order.
///
/// `reset` discards the buckets and re-drains upstream on the next query, so
/// correct behavior across resets requires a replayable upstream (documented
/// precondition, not checked at runtime).
///
/// Built by [`CursorExt::group_by_key`](crate::CursorExt::group_by_key).
pub struct GroupBy<C: Cursor, G, F> {
    upstream: C,
    key_fn: F,
    groups: Option<Vec<(G, Vec<C::Item>)>>,
    pos: usize,
}

impl<C, G, F> GroupBy<C, G, F>
where
    C: Cursor,
    G: Eq + Hash + Clone,
    F: FnMut(&C::Item, &C::Key) -> G,
{
    pub(crate) fn new(upstream: C, key_fn: F) -> Self {
        GroupBy {
            upstream,
            key_fn,
            groups: None,
            pos: 0,
        }
    }

    fn materialize(&mut self) {
        if self.groups.is_some() {
            return;
        }
        let mut order: Vec<(G, Vec<C::Item>)> = Vec::new();
        let mut index: HashMap<G, usize> = HashMap::new();
        while self.upstream.has_current() {
            let (Some(key), Some(value)) = (self.upstream.key(), self.upstream.current()) else {
                break;
            };
            let group = (self.key_fn)(&value, &key);
            match index.entry(group.clone()) {
                Entry::Occupied(slot) => order[*slot.get()].1.push(value),
                Entry::Vacant(slot) => {
                    slot.insert(order.len());
                    order.push((group, vec![value]));
                }
            }
            self.upstream.advance();
        }
        debug!("group_by materialized {} buckets", order.len());
        self.groups = Some(order);
    }

    fn bucket(&mut self) -> Option<&(G, Vec<C::Item>)> {
        self.materialize();
        self.groups.as_ref().and_then(|groups| groups.get(self.pos))
    }
}

impl<C, G, F> Cursor for GroupBy<C, G, F>
where
    C: Cursor,
    G: Eq + Hash + Clone,
    F: FnMut(&C::Item, &C::Key) -> G,
{
    type Key = G;
    type Item = Vec<C::Item>;

    fn reset(&mut self) {
        self.upstream.reset();
        self.groups = None;
        self.pos = 0;
    }

    fn has_current(&mut self) -> bool {
        self.bucket().is_some()
    }

    fn key(&mut self) -> Option<G> {
        self.bucket().map(|(group, _)| group.clone())
    }

    fn current(&mut self) -> Option<Vec<C::Item>> {
        self.bucket().map(|(_, elements)| elements.clone())
    }

    fn advance(&mut self) {
        self.materialize();
        let len = self.groups.as_ref().map_or(0, |groups| groups.len());
        if self.pos < len {
            self.pos += 1;
        }
    }

    fn replayable(&self) -> bool {
        self.upstream.replayable()
    }
}
