// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{city::City, museum::Museum, park::Park};
use std::fmt::{self, Display};

/// Right-side element type when museums and parks are joined in one call.
#[derive(Debug, Clone, PartialEq)]
pub enum Attraction {
    Museum(Museum),
    Park(Park),
}

impl Attraction {
    #[must_use]
    pub const fn city_id(&self) -> u32 {
        match self {
            Self::Museum(museum) => museum.city_id,
            Self::Park(park) => park.city_id,
        }
    }
}

impl Display for Attraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Museum(museum) => write!(f, "{museum}"),
            Self::Park(park) => write!(f, "{park}"),
        }
    }
}

pub fn city_key(city: &City) -> u32 {
    city.city_id
}

pub fn museum_key(museum: &Museum) -> u32 {
    museum.city_id
}

pub fn park_key(park: &Park) -> u32 {
    park.city_id
}

pub fn attraction_key(attraction: &Attraction) -> u32 {
    attraction.city_id()
}

pub fn city_london() -> City {
    City::new(1, "London".to_string())
}

pub fn city_paris() -> City {
    City::new(2, "Paris".to_string())
}

pub fn museum_science() -> Museum {
    Museum::new(1, "Science Museum".to_string(), 300_000)
}

pub fn museum_louvre() -> Museum {
    Museum::new(2, "Louvre".to_string(), 380_000)
}

pub fn park_hyde() -> Park {
    Park::new(1, "Hyde Park".to_string(), 1.42)
}

pub fn park_luxembourg() -> Park {
    Park::new(2, "Jardin du Luxembourg".to_string(), 0.23)
}

pub fn park_boulogne() -> Park {
    Park::new(3, "Bois de Boulogne".to_string(), 8.44)
}

pub fn cities() -> Vec<City> {
    vec![city_london(), city_paris()]
}

pub fn museums() -> Vec<Museum> {
    vec![museum_science(), museum_louvre()]
}

pub fn parks() -> Vec<Park> {
    vec![park_hyde(), park_luxembourg()]
}

pub fn as_museums(museums: Vec<Museum>) -> Vec<Attraction> {
    museums.into_iter().map(Attraction::Museum).collect()
}

pub fn as_parks(parks: Vec<Park>) -> Vec<Attraction> {
    parks.into_iter().map(Attraction::Park).collect()
}
