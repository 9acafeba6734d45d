// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct City {
    pub city_id: u32,
    pub name: String,
}

impl City {
    #[must_use]
    pub const fn new(city_id: u32, name: String) -> Self {
        Self { city_id, name }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City[city_id={}, name={}]", self.city_id, self.name)
    }
}
