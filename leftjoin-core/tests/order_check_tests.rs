// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use leftjoin_core::{JoinError, JoinSide, JoinState, LeftJoin, LeftJoinExt, OrderCheck};
use leftjoin_test_utils::{key, record, split_rows, Record};

#[test]
fn test_order_check_is_off_by_default() {
    // Arrange
    let join = LeftJoin::new(vec![key(2), key(1)], Record::id)
        .with_right(vec![record(2, "Y"), record(1, "X")], Record::id);

    // Act & Assert
    assert_eq!(join.order_check(), OrderCheck::Unchecked);
    let (rows, error) = split_rows(join);
    assert_eq!(rows.len(), 2);
    assert!(error.is_none());
}

#[test]
fn test_order_check_accepts_sorted_inputs_with_duplicates() -> anyhow::Result<()> {
    // Arrange
    let join = LeftJoin::new(vec![key(1), key(1), key(3)], Record::id)
        .with_right(vec![record(1, "A"), record(1, "B"), record(3, "C")], Record::id)
        .with_order_check();

    // Act
    let rows = join.collect::<Result<Vec<_>, _>>()?;

    // Assert
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].matches_for(0).map(<[_]>::len), Some(2));
    Ok(())
}

#[test]
fn test_order_check_reports_unsorted_right_input() {
    // Arrange
    let mut join = LeftJoin::new(vec![key(1), key(2)], Record::id)
        .with_order_check()
        .with_right(vec![record(1, "A")], Record::id)
        .with_right(vec![record(2, "Y"), record(1, "X")], Record::id);

    // Act
    let first = join.next();
    let second = join.next();

    // Assert
    assert!(first.is_some_and(|row| row.is_ok()));
    assert_eq!(
        second,
        Some(Err(JoinError::out_of_order(JoinSide::Right(1), 1)))
    );
    assert_eq!(join.state(), JoinState::Failed);
    assert!(join.next().is_none());
}

#[test]
fn test_order_check_reports_unsorted_left_input() {
    // Arrange
    let join = LeftJoin::new(vec![key(1), key(3), key(2)], Record::id)
        .with_right(vec![record(1, "A"), record(3, "C")], Record::id)
        .with_order_check();

    // Act
    let (rows, error) = split_rows(join);

    // Assert
    assert_eq!(rows.len(), 2);
    assert_eq!(error, Some(JoinError::out_of_order(JoinSide::Left, 2)));
}

#[test]
fn test_order_check_prefers_violation_over_unused_data_while_draining() {
    // Arrange
    let join = LeftJoin::new(vec![key(1)], Record::id)
        .with_right(vec![record(1, "A"), record(5, "B"), record(4, "C")], Record::id)
        .with_order_check();

    // Act
    let (rows, error) = split_rows(join);

    // Assert
    assert_eq!(rows.len(), 1);
    assert_eq!(error, Some(JoinError::out_of_order(JoinSide::Right(0), 2)));
}

#[test]
fn test_order_check_still_reports_unused_data() {
    // Arrange
    let join = LeftJoin::new(vec![key(1)], Record::id)
        .with_right(vec![record(1, "A"), record(2, "B")], Record::id)
        .with_order_check();

    // Act
    let (_, error) = split_rows(join);

    // Assert
    assert!(error.is_some_and(|e| e.is_unused_data()));
}

#[test]
fn test_order_check_size_hint_never_exceeds_produced_items() {
    // Arrange
    let join = vec![3u32, 1, 2, 4]
        .left_join_by(|n: &u32| *n)
        .with_right(Vec::<u32>::new(), |n: &u32| *n)
        .with_order_check();
    let (lower, upper) = join.size_hint();

    // Act
    let produced = join.count();

    // Assert
    assert_eq!(produced, 2);
    assert!(lower <= produced);
    assert!(upper.is_some_and(|upper| upper >= produced));
}

#[test]
fn test_order_check_size_hint_with_unsorted_right_input() {
    // Arrange
    let join = LeftJoin::new(vec![key(1), key(2), key(3)], Record::id)
        .with_right(vec![record(3, "C"), record(1, "A")], Record::id)
        .with_order_check();
    let (lower, _) = join.size_hint();

    // Act
    let (rows, error) = split_rows(join);

    // Assert
    assert!(lower <= rows.len() + usize::from(error.is_some()));
    assert_eq!(error, Some(JoinError::out_of_order(JoinSide::Right(0), 1)));
}
