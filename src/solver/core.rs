use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::cards::{HAND_SIZE, Hand};
use crate::config::TARGET;
use crate::expression::evaluate;
use crate::solver::candidate::Candidate;

/// Every ordering of the four hand slots, `a` varying slowest.
///
/// Slots are distinguishable even when their values repeat, so a hand with
/// duplicate cards still yields all 24 orders.
fn slot_orders() -> Vec<[usize; HAND_SIZE]> {
    let mut orders = Vec::with_capacity(24);
    for a in 0..HAND_SIZE {
        for b in (0..HAND_SIZE).filter(|&b| b != a) {
            for c in (0..HAND_SIZE).filter(|&c| c != a && c != b) {
                for d in (0..HAND_SIZE).filter(|&d| d != a && d != b && d != c) {
                    orders.push([a, b, c, d]);
                }
            }
        }
    }
    orders
}

/// Brute-force search for an expression over a hand that hits the target exactly
pub struct HintSolver {
    target: f64,
}

impl HintSolver {
    pub fn new() -> Self {
        Self::with_target(TARGET)
    }

    pub fn with_target(target: f64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Candidate strings for one slot order, in enumeration order.
    fn candidates_for(hand: &Hand, order: [usize; HAND_SIZE]) -> impl Iterator<Item = String> {
        let values = hand.values();
        Candidate::all_for(order.map(|slot| values[slot])).map(|candidate| candidate.to_string())
    }

    /// Exact comparison: candidates only combine whole card values, so no tolerance.
    /// Strings that fail to evaluate count as misses.
    #[allow(clippy::float_cmp)]
    fn hits_target(&self, expression: &str) -> bool {
        matches!(evaluate(expression), Ok(value) if value == self.target)
    }

    /// Find the first expression reaching the target.
    ///
    /// Tries slot orders, then operator triples, then the three bracketing
    /// shapes, and returns the first candidate whose value equals the target
    /// exactly. Returns `None` only after all 4608 candidates have been tried.
    pub fn solve(&self, hand: &Hand) -> Option<String> {
        info!("Searching for {} using hand {}", self.target, hand);

        let found = slot_orders()
            .into_iter()
            .flat_map(|order| Self::candidates_for(hand, order))
            .find(|expr| self.hits_target(expr));

        match &found {
            Some(expr) => info!("Found exact match: {}", expr),
            None => info!("No exact match found"),
        }
        found
    }

    /// Every distinct candidate reaching the target, in the same order `solve` visits them.
    ///
    /// Slot orders are searched in parallel. Equal card values in different
    /// slots render identical strings; only the first of each is kept.
    pub fn solutions(&self, hand: &Hand) -> Vec<String> {
        info!("Listing all solutions for {} using hand {}", self.target, hand);

        let hits: Vec<String> = slot_orders()
            .into_par_iter()
            .flat_map_iter(|order| {
                Self::candidates_for(hand, order).filter(|expr| self.hits_target(expr))
            })
            .collect();

        let mut seen = HashSet::new();
        let unique: Vec<String> = hits
            .into_iter()
            .filter(|expr| seen.insert(expr.clone()))
            .collect();

        debug!("Found {} distinct solutions", unique.len());
        unique
    }
}

impl Default for HintSolver {
    fn default() -> Self {
        Self::new()
    }
}
