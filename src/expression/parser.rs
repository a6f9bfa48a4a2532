use log::debug;

use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// Deepest parenthesis nesting accepted before the parser gives up.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent cursor over one whitespace-free expression.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '(' expression ')' | number
/// number     := digit+ ('.' digit+)?
/// ```
struct Parser {
    chars: Vec<char>,
    position: usize,
    depth: usize,
}

impl Parser {
    fn new(expression: &str) -> Self {
        Self {
            chars: expression
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect(),
            position: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek_operator(&self, additive: bool) -> Option<Operator> {
        self.peek()
            .and_then(Operator::from_symbol)
            .filter(|op| op.is_additive() == additive)
    }

    fn parse(&mut self) -> Result<f64, ExpressionError> {
        let value = self.parse_expression()?;
        if self.position < self.chars.len() {
            return Err(ExpressionError::TrailingInput {
                position: self.position,
            });
        }
        Ok(value)
    }

    fn parse_expression(&mut self) -> Result<f64, ExpressionError> {
        let mut result = self.parse_term()?;
        while let Some(op) = self.peek_operator(true) {
            self.position += 1;
            let right = self.parse_term()?;
            result = op.apply(result, right);
        }
        Ok(result)
    }

    fn parse_term(&mut self) -> Result<f64, ExpressionError> {
        let mut result = self.parse_factor()?;
        while let Some(op) = self.peek_operator(false) {
            self.position += 1;
            let right = self.parse_factor()?;
            result = op.apply(result, right);
        }
        Ok(result)
    }

    fn parse_factor(&mut self) -> Result<f64, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some('(') => {
                if self.depth >= MAX_NESTING {
                    return Err(ExpressionError::NestingTooDeep { limit: MAX_NESTING });
                }
                self.depth += 1;
                self.position += 1;

                let value = self.parse_expression()?;
                if self.peek() != Some(')') {
                    return Err(ExpressionError::MismatchedParentheses {
                        position: self.position,
                    });
                }
                self.position += 1;
                self.depth -= 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some(found) => Err(ExpressionError::UnexpectedCharacter {
                found,
                position: self.position,
            }),
        }
    }

    fn consume_digits(&mut self) -> usize {
        let start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
        }
        self.position - start
    }

    fn parse_number(&mut self) -> Result<f64, ExpressionError> {
        let start = self.position;
        self.consume_digits();

        if self.peek() == Some('.') {
            self.position += 1;
            if self.consume_digits() == 0 {
                return Err(match self.peek() {
                    None => ExpressionError::UnexpectedEnd,
                    Some(found) => ExpressionError::UnexpectedCharacter {
                        found,
                        position: self.position,
                    },
                });
            }
        }

        let literal: String = self
            .chars
            .get(start..self.position)
            .unwrap_or_default()
            .iter()
            .collect();
        match literal.parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ExpressionError::InvalidNumber(literal)),
        }
    }
}

/// Evaluate an arithmetic expression with standard precedence.
///
/// Whitespace anywhere in the input is ignored. Division by zero is not an
/// error: the result is `inf` or `NaN` and callers check `f64::is_finite`.
///
/// # Errors
///
/// Returns an error when the input does not derive from the grammar:
/// - a factor starts with something other than a digit or `(`
///   (this includes a leading `-`, there is no unary minus)
/// - parentheses are unbalanced
/// - characters remain after a complete expression
/// - the input ends where an operand was expected
pub fn evaluate(expression: &str) -> Result<f64, ExpressionError> {
    debug!("Evaluating expression: {}", expression);

    let result = Parser::new(expression).parse();

    match &result {
        Ok(value) => debug!("Expression evaluated to: {}", value),
        Err(e) => debug!("Expression evaluation failed: {}", e),
    }

    result
}
