use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expression must use exactly these four numbers: {expected:?} (found {found:?})")]
    WrongNumbers { expected: Vec<u8>, found: Vec<u64> },
}
