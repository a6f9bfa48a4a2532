//! Game parameters shared by verification and the hint solver

/// The value every hand has to reach.
pub const TARGET: f64 = 24.0;

/// Absolute tolerance when comparing a player's result to the target.
pub const TOLERANCE: f64 = 0.001;

/// Configuration for checking a player's answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub target: f64,
    pub tolerance: f64,
}

impl GameConfig {
    /// Tolerant comparison used for typed answers. The solver compares exactly.
    pub fn matches_target(&self, value: f64) -> bool {
        (value - self.target).abs() < self.tolerance
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            tolerance: TOLERANCE,
        }
    }
}
