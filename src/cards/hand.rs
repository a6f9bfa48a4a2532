use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::cards::card::Card;
use crate::cards::errors::CardError;

pub const HAND_SIZE: usize = 4;
pub const MIN_CARD_VALUE: u8 = 1;
pub const MAX_CARD_VALUE: u8 = 13;

/// The four card values in play, in display order. Repeated values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([u8; HAND_SIZE]);

impl Hand {
    /// # Errors
    ///
    /// Returns an error if any value lies outside 1..=13.
    pub fn new(values: [u8; HAND_SIZE]) -> Result<Self, CardError> {
        if let Some(&bad) = values
            .iter()
            .find(|v| !(MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(*v))
        {
            warn!("Rejecting hand {:?}: value {} out of range", values, bad);
            return Err(CardError::ValueOutOfRange(bad));
        }
        Ok(Self(values))
    }

    pub(crate) fn from_cards(cards: &[Card; HAND_SIZE]) -> Self {
        // Rank values always lie in 1..=13.
        Self(cards.map(|card| card.value()))
    }

    pub fn values(&self) -> &[u8; HAND_SIZE] {
        &self.0
    }

    pub fn sorted(&self) -> [u8; HAND_SIZE] {
        let mut values = self.0;
        values.sort_unstable();
        values
    }
}

impl TryFrom<&[u8]> for Hand {
    type Error = CardError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; HAND_SIZE] = values
            .try_into()
            .map_err(|_| CardError::WrongHandSize(values.len()))?;
        Hand::new(array)
    }
}

/// Parses `"4,6,2,8"`, `"4 6 2 8"` or any mix of commas and whitespace.
impl FromStr for Hand {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map_err(|_| CardError::InvalidValue(part.to_string()))
            })
            .collect::<Result<Vec<u8>, CardError>>()?;
        Hand::try_from(values.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
