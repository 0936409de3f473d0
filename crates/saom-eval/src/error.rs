use saom_core::{ActorId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("properties of behavior variable '{variable}' have not been calculated")]
    PropertiesNotCalculated { variable: String },

    #[error("{what} has {got} actors, behavior variable has {expected}")]
    ActorCountMismatch {
        expected: usize,
        got:      usize,
        what:     String,
    },

    #[error("network '{0}' registered twice")]
    DuplicateNetwork(String),

    #[error("effect '{effect}' refers to unknown network '{network}'")]
    UnknownNetwork { effect: String, network: String },

    #[error("change of {difference} is not permitted for {actor}")]
    MoveNotPermitted { actor: ActorId, difference: i32 },
}

pub type EvalResult<T> = Result<T, EvalError>;
