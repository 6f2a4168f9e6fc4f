use fastforward::{chain, from_iter, interleave, zip, Chain, Cursor, CursorError, CursorExt};

#[test]
fn test_chain_concatenates_in_order() {
    let chained = chain(vec![
        from_iter(vec![1, 2]).boxed(),
        from_iter(vec![3, 4]).boxed(),
        from_iter(vec![5]).boxed(),
    ]);
    let values: Vec<i32> = chained.values().collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_chain_skips_empty_upstreams() {
    let chained = chain(vec![
        from_iter(Vec::<i32>::new()).boxed(),
        from_iter(vec![1]).boxed(),
        from_iter(Vec::<i32>::new()).boxed(),
        from_iter(vec![2]).boxed(),
    ]);
    let values: Vec<i32> = chained.values().collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_empty_chain_is_immediately_exhausted() {
    let mut chained: Chain<usize, i32> = chain(vec![]);
    assert!(!chained.has_current());
    assert_eq!(chained.current(), None);
}

#[test]
fn test_chain_reset_restarts_every_upstream() {
    let mut chained = chain(vec![
        from_iter(vec![1, 2]).boxed(),
        from_iter(vec![3]).boxed(),
    ]);
    let first: Vec<i32> = (&mut chained).values().collect();
    chained.reset();
    let second: Vec<i32> = (&mut chained).values().collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);
}

#[test]
fn test_zip_stops_at_shortest() {
    let zipped = zip(vec![
        from_iter(vec![1, 2, 3]).boxed(),
        from_iter(vec![10, 20]).boxed(),
    ])
    .unwrap();
    let rows: Vec<Vec<i32>> = zipped.values().collect();
    assert_eq!(rows, vec![vec![1, 10], vec![2, 20]]);
}

#[test]
fn test_zip_keys_are_a_sequential_counter() {
    let zipped = zip(vec![
        from_iter(vec![1, 2]).boxed(),
        from_iter(vec![3, 4]).boxed(),
    ])
    .unwrap();
    let keys: Vec<usize> = zipped.pairs().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![0, 1]);
}

#[test]
fn test_zip_requires_two_cursors() {
    let err = zip(vec![from_iter(vec![1]).boxed()]).unwrap_err();
    assert_eq!(
        err,
        CursorError::TooFewCursors {
            required: 2,
            provided: 1
        }
    );

    let err = zip::<usize, i32>(vec![]).unwrap_err();
    assert_eq!(
        err,
        CursorError::TooFewCursors {
            required: 2,
            provided: 0
        }
    );
}

#[test]
fn test_zip_three_ways() {
    let zipped = zip(vec![
        from_iter(vec![1, 2]).boxed(),
        from_iter(vec![3, 4]).boxed(),
        from_iter(vec![5, 6]).boxed(),
    ])
    .unwrap();
    let rows: Vec<Vec<i32>> = zipped.values().collect();
    assert_eq!(rows, vec![vec![1, 3, 5], vec![2, 4, 6]]);
}

#[test]
fn test_interleave_alternates_round_robin() {
    let merged = interleave(vec![
        from_iter(vec![1, 3, 5]).boxed(),
        from_iter(vec![2, 4, 6]).boxed(),
    ])
    .unwrap();
    let values: Vec<i32> = merged.values().collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_interleave_shorter_source_drops_out() {
    let merged = interleave(vec![
        from_iter(vec![1]).boxed(),
        from_iter(vec![2, 3, 4]).boxed(),
    ])
    .unwrap();
    let values: Vec<i32> = merged.values().collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[test]
fn test_interleave_keys_name_the_active_upstream() {
    let merged = interleave(vec![
        from_iter(vec!['a', 'c']).boxed(),
        from_iter(vec!['b', 'd']).boxed(),
    ])
    .unwrap();
    let pairs: Vec<(usize, char)> = merged.pairs().collect();
    assert_eq!(pairs, vec![(0, 'a'), (1, 'b'), (0, 'c'), (1, 'd')]);
}

#[test]
fn test_interleave_requires_at_least_one_cursor() {
    let err = interleave::<usize, i32>(vec![]).unwrap_err();
    assert_eq!(
        err,
        CursorError::TooFewCursors {
            required: 1,
            provided: 0
        }
    );
}

#[test]
fn test_interleave_single_upstream_passes_through() {
    let merged = interleave(vec![from_iter(vec![1, 2, 3]).boxed()]).unwrap();
    let values: Vec<i32> = merged.values().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_nested_composition() {
    // An adapter's upstream may itself be another adapter.
    let chained = chain(vec![
        from_iter(vec![1, 2]).boxed(),
        from_iter(vec![3, 4]).boxed(),
    ]);
    let chunks: Vec<Vec<i32>> = chained.chunked(3).values().collect();
    assert_eq!(chunks, vec![vec![1, 2, 3], vec![4]]);
}
