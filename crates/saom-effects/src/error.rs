use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("unknown behavior effect '{0}'")]
    UnknownEffect(String),

    #[error("effect '{effect}' depends on a network but none was named")]
    MissingNetwork { effect: String },
}

pub type EffectResult<T> = Result<T, EffectError>;
