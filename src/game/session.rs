use rand::Rng;

use crate::cards::{Card, DealtHand, Deck, HAND_SIZE, Hand};
use crate::config::GameConfig;
use crate::game::outcome::VerificationOutcome;
use crate::game::verify::verify_with;
use crate::solver::{Hint, HintSolver};

/// One player's game: owns the deck, the random source and the active hand.
///
/// Nothing here is global, so several sessions can run side by side.
pub struct GameSession<R> {
    deck: Deck,
    rng: R,
    dealt: DealtHand,
    config: GameConfig,
    solver: HintSolver,
}

impl<R: Rng> GameSession<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, GameConfig::default())
    }

    /// Start a session and deal the first hand.
    pub fn with_config(mut rng: R, config: GameConfig) -> Self {
        let deck = Deck::standard();
        let dealt = deck.deal(&mut rng);
        Self {
            deck,
            rng,
            dealt,
            config,
            solver: HintSolver::with_target(config.target),
        }
    }

    /// Replace the active hand with a fresh deal.
    pub fn new_hand(&mut self) -> Hand {
        self.dealt = self.deck.deal(&mut self.rng);
        self.dealt.hand()
    }

    pub fn hand(&self) -> Hand {
        self.dealt.hand()
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        self.dealt.cards()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn verify(&self, expression: &str) -> VerificationOutcome {
        verify_with(&self.hand(), expression, &self.config)
    }

    pub fn hint(&self) -> Hint {
        Hint::from(self.solver.solve(&self.hand()))
    }

    pub fn solutions(&self) -> Vec<String> {
        self.solver.solutions(&self.hand())
    }
}
