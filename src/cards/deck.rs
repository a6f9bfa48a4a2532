use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cards::card::{Card, Rank, Suit};
use crate::cards::hand::{HAND_SIZE, Hand};

/// A full 52-card deck. Dealing never depletes it: every round draws from all 52.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Four cards drawn from the deck together with their puzzle values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtHand {
    cards: [Card; HAND_SIZE],
}

impl DealtHand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn hand(&self) -> Hand {
        Hand::from_cards(&self.cards)
    }
}

impl Deck {
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle a copy of the deck and take the top four cards.
    pub fn deal<R: Rng + ?Sized>(&self, rng: &mut R) -> DealtHand {
        let mut shuffled = self.cards.clone();
        shuffled.shuffle(rng);

        let mut cards = [Card::new(Rank::Ace, Suit::Spades); HAND_SIZE];
        for (slot, card) in cards.iter_mut().zip(shuffled) {
            *slot = card;
        }

        let dealt = DealtHand { cards };
        info!("Dealt hand {}", dealt.hand());
        dealt
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
