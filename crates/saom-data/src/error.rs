//! Data-integrity error type.

use thiserror::Error;

/// Errors produced while loading or deriving statistics of a variable.
///
/// `NoValidData` and `AllValuesEqual` mean the variable cannot support any
/// effect computation; callers abort the load rather than continue.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("behavior variable '{variable}' has no observations")]
    NoObservations { variable: String },

    #[error("no valid data for behavior variable '{variable}', observation {observation}")]
    NoValidData { variable: String, observation: usize },

    #[error("all observed values are equal for behavior variable '{variable}'")]
    AllValuesEqual { variable: String },

    #[error("properties of behavior variable '{variable}' have not been calculated")]
    NotCalculated { variable: String },

    #[error("behavior variable '{variable}': {what} {index} out of range (len {len})")]
    OutOfRange {
        variable: String,
        what:     &'static str,
        index:    usize,
        len:      usize,
    },

    #[error("network '{network}' has {got} actors, behavior variable '{variable}' has {expected}")]
    ActorCountMismatch {
        variable: String,
        network:  String,
        expected: usize,
        got:      usize,
    },

    #[error("behavior parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;
