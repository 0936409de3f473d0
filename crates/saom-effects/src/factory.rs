//! Construct effects from their short names.
//!
//! | Name     | Effect                                      | Network |
//! |----------|---------------------------------------------|---------|
//! | `linear` | [`LinearShapeEffect`]                       | no      |
//! | `quad`   | [`QuadraticShapeEffect`]                    | no      |
//! | `avAlt`  | [`AlterEffect`] with `Average`              | yes     |
//! | `totAlt` | [`AlterEffect`] with `Total`                | yes     |
//! | `maxAlt` | [`MaxAlterEffect`] by maximum               | yes     |
//! | `minAlt` | [`MaxAlterEffect`] by minimum               | yes     |
//! | `avSim`  | [`AverageSimilarityEffect`]                 | yes     |

use crate::{
    AlterAggregate, AlterEffect, AverageSimilarityEffect, BehaviorEffect, EffectError,
    EffectInfo, EffectResult, LinearShapeEffect, MaxAlterEffect, QuadraticShapeEffect,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EffectKind {
    Linear,
    Quadratic,
    AverageAlter,
    TotalAlter,
    MaxAlter,
    MinAlter,
    AverageSimilarity,
}

impl EffectKind {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "linear" => Self::Linear,
            "quad"   => Self::Quadratic,
            "avAlt"  => Self::AverageAlter,
            "totAlt" => Self::TotalAlter,
            "maxAlt" => Self::MaxAlter,
            "minAlt" => Self::MinAlter,
            "avSim"  => Self::AverageSimilarity,
            _ => return None,
        })
    }

    fn needs_network(self) -> bool {
        !matches!(self, Self::Linear | Self::Quadratic)
    }
}

/// Build the effect named by `info.effect_name`.
///
/// # Errors
///
/// [`EffectError::UnknownEffect`] for an unrecognised name,
/// [`EffectError::MissingNetwork`] for a network effect without
/// `network_name`.
pub fn create_effect(info: EffectInfo) -> EffectResult<Box<dyn BehaviorEffect>> {
    let Some(kind) = EffectKind::from_name(&info.effect_name) else {
        return Err(EffectError::UnknownEffect(info.effect_name));
    };
    if kind.needs_network() && info.network_name.is_none() {
        return Err(EffectError::MissingNetwork { effect: info.effect_name });
    }

    let effect: Box<dyn BehaviorEffect> = match kind {
        EffectKind::Linear            => Box::new(LinearShapeEffect::new(info)),
        EffectKind::Quadratic         => Box::new(QuadraticShapeEffect::new(info)),
        EffectKind::AverageAlter      => Box::new(AlterEffect::new(info, AlterAggregate::Average)),
        EffectKind::TotalAlter        => Box::new(AlterEffect::new(info, AlterAggregate::Total)),
        EffectKind::MaxAlter          => Box::new(MaxAlterEffect::new(info, false)),
        EffectKind::MinAlter          => Box::new(MaxAlterEffect::new(info, true)),
        EffectKind::AverageSimilarity => Box::new(AverageSimilarityEffect::new(info)),
    };
    Ok(effect)
}
