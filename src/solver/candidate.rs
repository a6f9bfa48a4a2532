use std::fmt;

use crate::cards::HAND_SIZE;
use crate::expression::Operator;

/// The three ways the solver brackets four operands `a b c d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `(a op1 b) op2 (c op3 d)`
    Pairs,
    /// `((a op1 b) op2 c) op3 d`
    Chain,
    /// `(a op1 (b op2 c)) op3 d`
    Nested,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Pairs, Shape::Chain, Shape::Nested];
}

/// One solver-generated expression: operands in slot order, an operator
/// triple and a bracketing shape. Rendered without spaces, e.g. `(4+8)*(6-2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub operands: [u8; HAND_SIZE],
    pub operators: [Operator; 3],
    pub shape: Shape,
}

impl Candidate {
    /// Every operator triple and shape for one operand order, op1 varying slowest.
    pub fn all_for(operands: [u8; HAND_SIZE]) -> impl Iterator<Item = Candidate> {
        Operator::ALL.into_iter().flat_map(move |op1| {
            Operator::ALL.into_iter().flat_map(move |op2| {
                Operator::ALL.into_iter().flat_map(move |op3| {
                    Shape::ALL.into_iter().map(move |shape| Candidate {
                        operands,
                        operators: [op1, op2, op3],
                        shape,
                    })
                })
            })
        })
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.operands;
        let [op1, op2, op3] = self.operators;
        match self.shape {
            Shape::Pairs => write!(f, "({a}{op1}{b}){op2}({c}{op3}{d})"),
            Shape::Chain => write!(f, "(({a}{op1}{b}){op2}{c}){op3}{d}"),
            Shape::Nested => write!(f, "({a}{op1}({b}{op2}{c})){op3}{d}"),
        }
    }
}
