//! Error types for candidate construction, mutation and run configuration

use thiserror::Error;

/// Errors raised when an operation's preconditions are not met
#[derive(Error, Debug)]
pub enum PropagationError {
    #[error("Gene set is empty")]
    EmptyGeneSet,

    #[error("Gene set too small: need at least {required} genes, got {actual}")]
    GeneSetTooSmall { required: usize, actual: usize },

    #[error("Chromosome too short: need at least {required} genes, got {actual}")]
    ChromosomeTooShort { required: usize, actual: usize },

    #[error("Invalid run configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PropagationResult<T> = Result<T, PropagationError>;
