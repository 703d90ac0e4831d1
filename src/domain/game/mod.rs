//! Domain types for the game catalog.
//!
//! `Game` is the stored entity; `CreateGameRequest` is the boundary shape a
//! client sends to add one. The request never carries an id: the store
//! assigns it when the request is mapped into a `Game`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub mod seed;
pub mod store;

pub use seed::seed_games;
pub use store::GameStore;

/// A catalog entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Assigned by the store; never changes after creation.
    pub id: i32,
    pub name: String,
    pub genre: String,
    /// Serialized as a JSON number carrying the exact decimal digits.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 19.99)]
    pub price: Decimal,
    /// Calendar date, `YYYY-MM-DD`.
    #[schema(value_type = String, format = Date, example = "1992-07-15")]
    pub release_date: NaiveDate,
}

/// Client-supplied fields for a new catalog entry.
///
/// No semantic validation is applied: empty names and negative prices are
/// accepted as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub name: String,
    pub genre: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    #[schema(value_type = String, format = Date, example = "2020-01-01")]
    pub release_date: NaiveDate,
}

impl CreateGameRequest {
    /// Maps the request onto a `Game` carrying the given id.
    pub fn into_game(self, id: i32) -> Game {
        Game {
            id,
            name: self.name,
            genre: self.genre,
            price: self.price,
            release_date: self.release_date,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("catalog id space exhausted after {0} entries")]
    IdExhausted(usize),
    #[error("game id {0} is already in the catalog")]
    DuplicateId(i32),
}
