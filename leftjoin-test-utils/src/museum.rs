// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Museum {
    pub city_id: u32,
    pub name: String,
    pub number_of_exhibits: u32,
}

impl Museum {
    #[must_use]
    pub const fn new(city_id: u32, name: String, number_of_exhibits: u32) -> Self {
        Self {
            city_id,
            name,
            number_of_exhibits,
        }
    }
}

impl Display for Museum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Museum[city_id={}, name={}, exhibits={}]",
            self.city_id, self.name, self.number_of_exhibits
        )
    }
}
