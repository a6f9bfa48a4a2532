use crate::expression::ExpressionError;

/// Result of checking one typed answer. Every variant is a normal game result.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// Nothing but whitespace was submitted.
    EmptyInput,
    /// The numbers in the text are not the hand's four values.
    WrongNumbers { expected: Vec<u8> },
    /// The text is not a well-formed expression.
    SyntaxInvalid(ExpressionError),
    /// Well-formed, but the arithmetic produced `inf` or `NaN` (division by zero).
    NonFiniteResult(f64),
    NumericResult {
        value: f64,
        target: f64,
        matches_target: bool,
    },
}

impl VerificationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            VerificationOutcome::NumericResult {
                matches_target: true,
                ..
            }
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            VerificationOutcome::EmptyInput
            | VerificationOutcome::SyntaxInvalid(_)
            | VerificationOutcome::NonFiniteResult(_) => "Error",
            VerificationOutcome::WrongNumbers { .. } => "Invalid Expression",
            VerificationOutcome::NumericResult {
                matches_target: true,
                ..
            } => "Success",
            VerificationOutcome::NumericResult { .. } => "Incorrect",
        }
    }

    pub fn message(&self) -> String {
        match self {
            VerificationOutcome::EmptyInput => "Please enter an arithmetic expression.".to_string(),
            VerificationOutcome::WrongNumbers { expected } => format!(
                "Your expression must use exactly these four numbers: {:?}",
                expected
            ),
            VerificationOutcome::SyntaxInvalid(_) | VerificationOutcome::NonFiniteResult(_) => {
                "Invalid mathematical expression.".to_string()
            }
            VerificationOutcome::NumericResult {
                target,
                matches_target: true,
                ..
            } => format!("Correct! Your expression evaluates to {}.", target),
            VerificationOutcome::NumericResult { value, .. } => {
                format!("Your expression evaluates to {}. Try again.", value)
            }
        }
    }
}
