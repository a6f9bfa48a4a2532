//! A round of the game: checking a typed answer against the hand, and the session that owns the hand

mod outcome;
mod session;
mod verify;

pub use outcome::VerificationOutcome;
pub use session::GameSession;
pub use verify::{hint, verify, verify_with};
