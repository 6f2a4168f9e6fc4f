use fastforward::{from_iter, from_pairs, Cursor, CursorError, CursorExt, Range};

#[test]
fn test_ascending_range_stops_before_overshoot() {
    let values: Vec<f64> = Range::new(0.0, 5.0, 1.5).unwrap().values().collect();
    assert_eq!(values, vec![0.0, 1.5, 3.0, 4.5]);
}

#[test]
fn test_descending_range_is_inferred_from_endpoints() {
    let values: Vec<f64> = Range::new(5.0, 0.0, 1.5).unwrap().values().collect();
    assert_eq!(values, vec![5.0, 3.5, 2.0, 0.5]);
}

#[test]
fn test_range_includes_end_when_hit_exactly() {
    let values: Vec<f64> = Range::new(1.0, 9.0, 2.0).unwrap().values().collect();
    assert_eq!(values, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
}

#[test]
fn test_range_count() {
    assert_eq!(Range::new(0.0, 5.0, 1.5).unwrap().count(), 4);
    assert_eq!(Range::new(1.0, 9.0, 2.0).unwrap().count(), 5);
    assert_eq!(Range::new(9.0, 1.0, 2.0).unwrap().count(), 5);
}

#[test]
fn test_range_keys_are_step_indices() {
    let pairs: Vec<(usize, f64)> = Range::new(1.0, 3.0, 1.0).unwrap().pairs().collect();
    assert_eq!(pairs, vec![(0, 1.0), (1, 2.0), (2, 3.0)]);
}

#[test]
fn test_range_rejects_non_positive_step() {
    assert_eq!(
        Range::new(0.0, 5.0, 0.0).unwrap_err(),
        CursorError::NonPositiveStep(0.0)
    );
    assert_eq!(
        Range::new(0.0, 5.0, -1.0).unwrap_err(),
        CursorError::NonPositiveStep(-1.0)
    );
}

#[test]
fn test_range_rejects_step_wider_than_the_span() {
    assert_eq!(
        Range::new(0.0, 5.0, 6.0).unwrap_err(),
        CursorError::StepExceedsSpan {
            start: 0.0,
            end: 5.0,
            step: 6.0
        }
    );
}

#[test]
fn test_range_reset() {
    let mut range = Range::new(0.0, 2.0, 1.0).unwrap();
    range.advance();
    range.advance();
    assert_eq!(range.current(), Some(2.0));
    range.reset();
    assert_eq!(range.current(), Some(0.0));
    assert_eq!(range.key(), Some(0));
}

#[test]
fn test_map_values_transforms_without_touching_keys() {
    let pairs: Vec<(usize, i32)> = from_iter(vec![1, 2, 3])
        .map_values(|value, _key| value * 2)
        .pairs()
        .collect();
    assert_eq!(pairs, vec![(0, 2), (1, 4), (2, 6)]);
}

#[test]
fn test_map_values_can_see_the_key() {
    let values: Vec<String> = from_pairs(vec![("a", 1), ("b", 2)])
        .map_values(|value, key| format!("{key}={value}"))
        .values()
        .collect();
    assert_eq!(values, vec!["a=1", "b=2"]);
}

#[test]
fn test_map_values_current_is_recomputed_but_stable() {
    let mut doubled = from_iter(vec![5]).map_values(|value, _key| value + 1);
    assert_eq!(doubled.current(), Some(6));
    assert_eq!(doubled.current(), Some(6));
}

#[test]
fn test_trimmed_strips_surrounding_whitespace() {
    let values: Vec<String> = from_iter(vec!["  hello  ", "\nworld\n", "\trust\t"])
        .trimmed()
        .values()
        .collect();
    assert_eq!(values, vec!["hello", "world", "rust"]);
}

#[test]
fn test_transform_composes_with_other_adapters() {
    let chunks: Vec<Vec<i32>> = from_iter(vec![1, 1, 2, 3])
        .unique()
        .map_values(|value, _key| value * 10)
        .chunked(2)
        .values()
        .collect();
    assert_eq!(chunks, vec![vec![10, 20], vec![30]]);
}
