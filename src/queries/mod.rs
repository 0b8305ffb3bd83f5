//! Query interfaces for the deck evaluator.
//!
//! Each module provides a query struct that borrows the shared
//! [`ApiClient`](crate::api::ApiClient) and exposes methods returning `Result<T>`.

pub mod cards;
pub mod decks;

pub use cards::{CardQuery, CollectionResult};
pub use decks::DeckQuery;
