// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use leftjoin_stream::{
    JoinError, JoinSide, JoinState, LeftJoinStream, LeftJoinStreamExt, Row, UnusedInput,
};
use leftjoin_test_utils::test_data::{
    as_museums, as_parks, attraction_key, cities, city_key, city_london, city_paris, museum_louvre,
    museum_science, museums, park_boulogne, park_hyde, park_luxembourg, parks,
};
use leftjoin_test_utils::{
    counted_stream, key, record, split_stream_rows, Attraction, City, Record,
};

fn cities_with_attractions(
    museums: Vec<Attraction>,
    parks: Vec<Attraction>,
) -> impl Stream<Item = Result<Row<City, Attraction>, JoinError>> + Unpin {
    stream::iter(cities())
        .left_join_by(city_key)
        .with_right(stream::iter(museums), attraction_key)
        .with_right(stream::iter(parks), attraction_key)
}

#[tokio::test]
async fn test_left_join_stream_matches_every_right_input() -> anyhow::Result<()> {
    // Arrange
    let join = cities_with_attractions(as_museums(museums()), as_parks(parks()));

    // Act
    let rows: Vec<_> = join.try_collect().await?;

    // Assert
    assert_eq!(
        rows,
        vec![
            Row::new(
                city_london(),
                vec![
                    vec![Attraction::Museum(museum_science())],
                    vec![Attraction::Park(park_hyde())],
                ],
            ),
            Row::new(
                city_paris(),
                vec![
                    vec![Attraction::Museum(museum_louvre())],
                    vec![Attraction::Park(park_luxembourg())],
                ],
            ),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_left_join_stream_allows_missing_matches() -> anyhow::Result<()> {
    // Arrange
    let join = cities_with_attractions(as_museums(vec![museum_louvre()]), Vec::new());

    // Act
    let rows: Vec<_> = join.try_collect().await?;

    // Assert
    assert!(rows[0].is_unmatched());
    assert_eq!(
        rows[1].matches(),
        &[vec![Attraction::Museum(museum_louvre())], vec![]]
    );
    Ok(())
}

#[tokio::test]
async fn test_left_join_stream_pulls_at_most_one_element_ahead() {
    // Arrange
    let (cities, city_pulls) = counted_stream(stream::iter(0..10u32));
    let (museums, museum_pulls) = counted_stream(stream::iter(0..10u32));
    let (parks, park_pulls) = counted_stream(stream::iter(0..10u32));

    let mut join = cities
        .left_join_by(|id: &u32| *id)
        .with_right(museums, |id: &u32| *id)
        .with_right(parks, |id: &u32| *id);

    // Act
    let mut counts = Vec::new();
    while let Some(row) = join.next().await {
        assert!(row.is_ok());
        counts.push((city_pulls.get(), museum_pulls.get(), park_pulls.get()));
    }

    // Assert
    assert_eq!(
        counts,
        vec![
            (1, 2, 2),
            (2, 3, 3),
            (3, 4, 4),
            (4, 5, 5),
            (5, 6, 6),
            (6, 7, 7),
            (7, 8, 8),
            (8, 9, 9),
            (9, 10, 10),
            (10, 10, 10),
        ]
    );
}

#[tokio::test]
async fn test_left_join_stream_unused_elements_fail() {
    // Arrange
    let mut parks = parks();
    parks.push(park_boulogne());
    parks.push(park_boulogne());
    let mut join = cities_with_attractions(as_museums(museums()), as_parks(parks));

    // Act
    let (rows, error) = split_stream_rows(&mut join).await;

    // Assert
    assert_eq!(rows.len(), 2);
    let Some(JoinError::UnusedData(unused)) = &error else {
        panic!("expected unused data, got {error:?}");
    };
    assert_eq!(unused.inputs(), &[UnusedInput::new(1, 2)]);
}

#[tokio::test]
async fn test_left_join_stream_two_right_inputs_scenario() -> anyhow::Result<()> {
    // Arrange
    let join = LeftJoinStream::new(stream::iter(vec![key(1), key(2)]), Record::id)
        .with_right_iter(vec![record(1, "A")], Record::id)
        .with_right_iter(vec![record(1, "X"), record(2, "Y")], Record::id);

    // Act
    let rows: Vec<_> = join.try_collect().await?;

    // Assert
    assert_eq!(
        rows,
        vec![
            Row::new(key(1), vec![vec![record(1, "A")], vec![record(1, "X")]]),
            Row::new(key(2), vec![vec![], vec![record(2, "Y")]]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_left_join_stream_out_of_order_right_input_reports_leftover() {
    // Arrange
    let mut join = stream::iter(vec![key(1), key(2)])
        .left_join_by(Record::id)
        .with_right_iter(vec![record(2, "Y"), record(1, "X")], Record::id);

    // Act
    let (rows, error) = split_stream_rows(&mut join).await;

    // Assert
    assert_eq!(
        rows,
        vec![
            Row::new(key(1), vec![vec![]]),
            Row::new(key(2), vec![vec![record(2, "Y")]]),
        ]
    );
    assert!(error.is_some_and(|e| e.is_unused_data()));
}

#[tokio::test]
async fn test_left_join_stream_duplicate_left_keys_only_first_matches() -> anyhow::Result<()> {
    // Arrange
    let left = vec![record(1, "first"), record(1, "second"), record(2, "third")];
    let right = vec![record(1, "A"), record(1, "B"), record(2, "C")];

    // Act
    let rows: Vec<_> = stream::iter(left)
        .left_join_by(Record::id)
        .with_right_iter(right, Record::id)
        .try_collect()
        .await?;

    // Assert
    assert_eq!(
        rows[0].matches_for(0),
        Some(&[record(1, "A"), record(1, "B")][..])
    );
    assert!(rows[1].is_unmatched());
    assert_eq!(rows[2].matches_for(0), Some(&[record(2, "C")][..]));
    Ok(())
}

#[tokio::test]
async fn test_left_join_stream_empty_left_drains_every_right_input() {
    // Arrange
    let mut join = stream::iter(Vec::<Record>::new())
        .left_join_by(Record::id)
        .with_right_iter(vec![record(1, "A")], Record::id)
        .with_right_iter(Vec::new(), Record::id)
        .with_right_iter(vec![record(2, "B"), record(3, "C")], Record::id);

    // Act
    let (rows, error) = split_stream_rows(&mut join).await;

    // Assert
    assert!(rows.is_empty());
    let Some(JoinError::UnusedData(unused)) = &error else {
        panic!("expected unused data, got {error:?}");
    };
    assert_eq!(
        unused.inputs(),
        &[UnusedInput::new(0, 1), UnusedInput::new(2, 2)]
    );
    assert_eq!(join.state(), JoinState::Failed);
}

#[tokio::test]
async fn test_left_join_stream_state_transitions() {
    // Arrange
    let mut join = stream::iter(vec![key(1)])
        .left_join_by(Record::id)
        .with_right_iter(vec![record(1, "A")], Record::id);
    assert_eq!(join.state(), JoinState::NotStarted);

    // Act & Assert
    assert!(join.next().await.is_some_and(|row| row.is_ok()));
    assert_eq!(join.state(), JoinState::Running);

    assert!(join.next().await.is_none());
    assert_eq!(join.state(), JoinState::Completed);
    assert!(join.next().await.is_none());
}

#[tokio::test]
async fn test_left_join_stream_is_fused_after_failure() {
    // Arrange
    let mut join = stream::iter(Vec::<Record>::new())
        .left_join_by(Record::id)
        .with_right_iter(vec![record(1, "A")], Record::id);

    // Act
    let first = join.next().await;

    // Assert
    assert!(first.is_some_and(|item| item.is_err()));
    assert!(futures::stream::FusedStream::is_terminated(&join));
    assert!(join.next().await.is_none());
}

#[tokio::test]
async fn test_left_join_stream_order_check_reports_right_position() {
    // Arrange
    let mut join = stream::iter(vec![key(1), key(2), key(3)])
        .left_join_by(Record::id)
        .with_order_check()
        .with_right_iter(vec![record(1, "A"), record(3, "C"), record(2, "B")], Record::id);

    // Act
    let (rows, error) = split_stream_rows(&mut join).await;

    // Assert
    assert_eq!(rows.len(), 2);
    assert!(rows[1].is_unmatched());
    assert_eq!(
        error,
        Some(JoinError::out_of_order(JoinSide::Right(0), 2))
    );
}

#[tokio::test]
async fn test_left_join_stream_order_check_reports_left_position() {
    // Arrange
    let mut join = stream::iter(vec![key(2), key(1)])
        .left_join_by(Record::id)
        .with_right_iter(vec![record(2, "A")], Record::id)
        .with_order_check();

    // Act
    let (rows, error) = split_stream_rows(&mut join).await;

    // Assert
    assert_eq!(rows, vec![Row::new(key(2), vec![vec![record(2, "A")]])]);
    assert_eq!(error, Some(JoinError::out_of_order(JoinSide::Left, 1)));
}

#[tokio::test]
async fn test_left_join_stream_runs_on_spawned_task() -> anyhow::Result<()> {
    // Arrange
    let join = stream::iter(cities())
        .left_join_by(city_key)
        .with_right_iter(as_museums(museums()), attraction_key);

    // Act
    let rows = tokio::spawn(async move { join.try_collect::<Vec<_>>().await }).await??;

    // Assert
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.matches_for(0).map(<[_]>::len) == Some(1)));
    Ok(())
}

#[tokio::test]
async fn test_left_join_stream_order_check_size_hint_never_exceeds_produced_items() {
    // Arrange
    let join = stream::iter(vec![3u32, 1, 2, 4])
        .left_join_by(|n: &u32| *n)
        .with_right_iter(Vec::<u32>::new(), |n: &u32| *n)
        .with_order_check();
    let (lower, _) = join.size_hint();

    // Act
    let produced = join.count().await;

    // Assert
    assert_eq!(produced, 2);
    assert!(lower <= produced);
}

#[tokio::test]
async fn test_left_join_stream_unchecked_size_hint_follows_left_input() {
    // Arrange
    let mut join = stream::iter(vec![key(1), key(2)])
        .left_join_by(Record::id)
        .with_right_iter(vec![record(2, "B")], Record::id);

    // Act & Assert
    assert_eq!(join.size_hint(), (2, Some(3)));
    assert!(join.next().await.is_some());
    assert_eq!(join.size_hint(), (1, Some(2)));
    assert!(join.next().await.is_some());
    assert!(join.next().await.is_none());
    assert_eq!(join.size_hint(), (0, Some(0)));
}
