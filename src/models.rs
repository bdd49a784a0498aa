//! Row types for the four tables and their transport shapes.
//!
//! Detail endpoints serialize a row as-is; list endpoints use the narrower
//! `*Summary` mappings.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct People {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// One of `planet_id` / `people_id` is set; rows written through `FavoriteTarget` never carry both.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeopleSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanetSummary {
    pub id: i64,
    pub name: String,
}

impl People {
    pub fn summary(&self) -> PeopleSummary {
        PeopleSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl Planet {
    pub fn summary(&self) -> PlanetSummary {
        PlanetSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// What a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    People(i64),
}

impl FavoriteTarget {
    /// Pick the target from the ids captured by the route. A planet id wins when both are present.
    pub fn from_ids(planet_id: Option<i64>, people_id: Option<i64>) -> Option<Self> {
        match (planet_id, people_id) {
            (Some(id), _) => Some(FavoriteTarget::Planet(id)),
            (None, Some(id)) => Some(FavoriteTarget::People(id)),
            (None, None) => None,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::People(id) => *id,
        }
    }

    /// Column of `favorites` holding this target's id.
    pub fn column(&self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "planet_id",
            FavoriteTarget::People(_) => "people_id",
        }
    }

    /// Capitalized kind used in response messages.
    pub fn label(&self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "Planet",
            FavoriteTarget::People(_) => "People",
        }
    }
}
