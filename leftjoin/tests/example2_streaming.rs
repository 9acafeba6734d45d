// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use leftjoin::prelude::*;
use leftjoin_test_utils::test_data::{
    attraction_key, city_key, city_london, city_paris, museum_louvre, museum_science, park_hyde,
};
use leftjoin_test_utils::{
    assert_no_row_emitted, assert_stream_ended, test_channel, unwrap_row, Attraction, City,
};

#[tokio::test]
async fn test_cities_joined_as_they_arrive() -> anyhow::Result<()> {
    // Arrange
    let (city_tx, cities) = test_channel::<City>();
    let (museum_tx, museums) = test_channel::<Attraction>();
    let (park_tx, parks) = test_channel::<Attraction>();

    let mut join = cities
        .left_join_by(city_key)
        .with_right(museums, attraction_key)
        .with_right(parks, attraction_key);

    // Act & Assert
    city_tx.send(city_london())?;
    museum_tx.send(Attraction::Museum(museum_science()))?;
    museum_tx.send(Attraction::Museum(museum_louvre()))?;
    assert_no_row_emitted(&mut join, 100).await;

    park_tx.send(Attraction::Park(park_hyde()))?;
    drop(park_tx);
    let london = unwrap_row(&mut join, 500).await;
    assert_eq!(london.left(), &city_london());
    assert_eq!(
        london.matches(),
        &[
            vec![Attraction::Museum(museum_science())],
            vec![Attraction::Park(park_hyde())],
        ]
    );

    city_tx.send(city_paris())?;
    drop(museum_tx);
    let paris = unwrap_row(&mut join, 500).await;
    assert_eq!(
        paris.matches(),
        &[vec![Attraction::Museum(museum_louvre())], vec![]]
    );

    drop(city_tx);
    assert_stream_ended(&mut join, 500).await;
    assert_eq!(join.state(), JoinState::Completed);
    Ok(())
}

#[tokio::test]
async fn test_join_stream_can_be_chained_with_stream_operators() {
    // Arrange
    let cities = futures::stream::iter(vec![city_london(), city_paris()]);
    let museums = futures::stream::iter(vec![Attraction::Museum(museum_louvre())]);

    // Act
    let matched: Vec<String> = LeftJoinStream::new(cities, city_key)
        .with_right(museums, attraction_key)
        .filter_map(|row| async move { row.ok().filter(|row| !row.is_unmatched()) })
        .map(|row| row.into_left().name)
        .collect()
        .await;

    // Assert
    assert_eq!(matched, vec!["Paris".to_string()]);
}
