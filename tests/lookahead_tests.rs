use fastforward::{from_iter, Cursor, CursorError, CursorExt};

#[test]
fn test_peek_around_the_current_position() {
    let mut cursor = from_iter(vec!["a", "b", "c", "d"]).lookahead();
    cursor.advance(); // at "b"

    assert_eq!(cursor.current(), Some("b"));
    assert_eq!(cursor.look_ahead(), Some("c"));
    assert_eq!(cursor.look_ahead_n(2).unwrap(), vec!["c", "d"]);
    assert_eq!(cursor.look_behind(), Some("a"));
}

#[test]
fn test_peeking_never_moves_the_main_position() {
    let mut cursor = from_iter(vec![1, 2, 3, 4]).lookahead();
    cursor.advance();

    for _ in 0..5 {
        assert_eq!(cursor.look_ahead(), Some(3));
        assert_eq!(cursor.look_behind(), Some(1));
    }
    assert_eq!(cursor.current(), Some(2));
    assert_eq!(cursor.key(), Some(1));

    let rest: Vec<i32> = cursor.values().collect();
    assert_eq!(rest, vec![2, 3, 4]);
}

#[test]
fn test_look_ahead_truncates_at_the_end() {
    let mut cursor = from_iter(vec![1, 2, 3]).lookahead();
    assert_eq!(cursor.look_ahead_n(10).unwrap(), vec![2, 3]);
    cursor.advance();
    cursor.advance(); // at the last element
    assert_eq!(cursor.look_ahead(), None);
    assert!(cursor.look_ahead_n(1).unwrap().is_empty());
}

#[test]
fn test_look_behind_at_the_origin() {
    let mut cursor = from_iter(vec![1, 2, 3]).lookahead();
    assert_eq!(cursor.look_behind(), None);
    assert!(cursor.look_behind_n(1).unwrap().is_empty());

    cursor.advance();
    // Only one element behind; asking for two underflows to empty.
    assert!(cursor.look_behind_n(2).unwrap().is_empty());
    assert_eq!(cursor.look_behind_n(1).unwrap(), vec![1]);
}

#[test]
fn test_look_behind_window_in_source_order() {
    let mut cursor = from_iter(vec![1, 2, 3, 4, 5]).lookahead();
    cursor.advance();
    cursor.advance();
    cursor.advance(); // at 4
    assert_eq!(cursor.look_behind_n(3).unwrap(), vec![1, 2, 3]);
    assert_eq!(cursor.look_behind_n(2).unwrap(), vec![2, 3]);
}

#[test]
fn test_zero_peek_counts_are_rejected() {
    let mut cursor = from_iter(vec![1, 2]).lookahead();
    assert_eq!(cursor.look_ahead_n(0).unwrap_err(), CursorError::InvalidPeekCount);
    assert_eq!(cursor.look_behind_n(0).unwrap_err(), CursorError::InvalidPeekCount);
}

#[test]
fn test_reset_reanchors_the_peek_view() {
    let mut cursor = from_iter(vec![1, 2, 3]).lookahead();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.look_behind(), Some(2));

    cursor.reset();
    assert_eq!(cursor.current(), Some(1));
    assert_eq!(cursor.look_behind(), None);
    assert_eq!(cursor.look_ahead(), Some(2));
}

#[test]
fn test_lookahead_protocol_walks_the_full_sequence() {
    let values: Vec<i32> = from_iter(vec![1, 2, 3]).lookahead().values().collect();
    assert_eq!(values, vec![1, 2, 3]);
}
