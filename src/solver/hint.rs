use std::fmt;

/// What the hint button shows: an expression reaching the target, or an explicit miss
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Found(String),
    NoSolution,
}

impl Hint {
    pub fn expression(&self) -> Option<&str> {
        match self {
            Hint::Found(expr) => Some(expr),
            Hint::NoSolution => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Hint::Found(_))
    }
}

impl From<Option<String>> for Hint {
    fn from(found: Option<String>) -> Self {
        found.map_or(Hint::NoSolution, Hint::Found)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Hint::Found(expr) => write!(f, "{}", expr),
            Hint::NoSolution => write!(f, "No solution found"),
        }
    }
}
