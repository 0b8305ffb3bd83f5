pub mod card;
pub mod deck;
pub mod mana;
pub mod provider;

pub use card::*;
pub use deck::*;
pub use mana::*;
pub use provider::*;
