use thiserror::Error;

use crate::schemas::Money;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("amount must not be zero or negative, got {0}")]
    InvalidAmount(Money),

    #[error("no people in group to split the bill between")]
    EmptyGroup,
}

pub type Result<T> = std::result::Result<T, SplitError>;
