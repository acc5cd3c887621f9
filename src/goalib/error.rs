use thiserror::Error;

use crate::triplet::Field;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ordering {ordering} has no unconsumed triplet at or after index {index} (len {len})")]
    IndexOutOfRange {
        ordering: Field,
        index: usize,
        len: usize,
    },

    #[error("every quota was exhausted before iteration {iteration}")]
    QuotasExhausted { iteration: usize },

    #[error("running total overflowed at iteration {iteration}")]
    Overflow { iteration: usize },
}
