use super::Game;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// (name, genre, price in cents, release year, month, day)
const SEED: &[(&str, &str, i64, i32, u32, u32)] = &[
    ("Street Fighter II", "Fighting", 1999, 1992, 7, 15),
    ("RDR", "Action-Adventure", 5999, 2018, 10, 26),
    ("FIFA 23", "Sports", 6999, 2022, 9, 27),
];

/// The fixed records the catalog starts with, ids 1..=3.
pub fn seed_games() -> Vec<Game> {
    SEED.iter()
        .zip(1..)
        .map(|(&(name, genre, cents, year, month, day), id)| Game {
            id,
            name: name.to_string(),
            genre: genre.to_string(),
            price: Decimal::new(cents, 2),
            release_date: NaiveDate::from_ymd_opt(year, month, day)
                .expect("seed release dates are valid calendar dates"),
        })
        .collect()
}
