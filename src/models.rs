//! Request and response shapes.
//!
//! Entities are never serialized directly: every response goes through one of
//! the `*Out` projections below, and every write body through one of the input
//! shapes. Unknown body fields (including `id`) are ignored.

use serde::{Deserialize, Serialize};

use crate::entities::{director, genre, movie};

/// Body of `POST /movies/` and `PUT /movies/{id}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Body of create and update requests for directors and genres.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NameInput {
    pub name: Option<String>,
}

/// Query string of `GET /movies/`. Both filters combine with AND.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

/// Published movie shape.
///
/// `director_id` is deliberately left out: clients of the listing endpoint
/// filter by it but never receive it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieOut {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
}

impl From<movie::Model> for MovieOut {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectorOut {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for DirectorOut {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenreOut {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for GenreOut {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}
