//! Network error type.

use thiserror::Error;

use saom_core::ActorId;

/// Errors produced by `saom-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network '{network}': tie endpoint {actor} out of range for {n} actors")]
    ActorOutOfRange { network: String, actor: ActorId, n: usize },

    #[error("network '{network}': self tie at {actor}")]
    SelfTie { network: String, actor: ActorId },

    #[error("network '{network}': duplicate tie {ego} -> {alter}")]
    DuplicateTie { network: String, ego: ActorId, alter: ActorId },

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
