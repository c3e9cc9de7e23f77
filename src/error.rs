use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// There is no root to compare the children against.
    #[error("complexity sequence is empty")]
    EmptyInput,

    #[error("modulus must be non-zero")]
    ZeroModulus,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid integer {token:?} at position {position}")]
    InvalidInteger { token: String, position: usize },
}
