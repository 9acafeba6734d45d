// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Park {
    pub city_id: u32,
    pub name: String,
    pub area_km_sq: f64,
}

impl Park {
    #[must_use]
    pub const fn new(city_id: u32, name: String, area_km_sq: f64) -> Self {
        Self {
            city_id,
            name,
            area_km_sq,
        }
    }
}

impl Display for Park {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Park[city_id={}, name={}, area={}km2]",
            self.city_id, self.name, self.area_km_sq
        )
    }
}
