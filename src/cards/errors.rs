use thiserror::Error;

/// Errors raised when building a hand from raw values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    #[error("Card value must be between 1 and 13, got {0}")]
    ValueOutOfRange(u8),
    #[error("A hand needs exactly 4 cards, got {0}")]
    WrongHandSize(usize),
    #[error("Invalid card value: '{0}'")]
    InvalidValue(String),
}
