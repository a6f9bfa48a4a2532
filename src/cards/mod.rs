//! Playing cards, the four-value hand, and dealing from a standard deck

mod card;
mod deck;
mod errors;
mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::{DealtHand, Deck};
pub use errors::CardError;
pub use hand::{HAND_SIZE, Hand, MAX_CARD_VALUE, MIN_CARD_VALUE};
