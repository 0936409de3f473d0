//! Shape effects: the actor's own value, without reference to others.

use saom_core::ActorId;

use crate::{BehaviorEffect, EffectContext, EffectInfo};

/// Linear tendency: `s_i = z_i`.
#[derive(Clone, Debug)]
pub struct LinearShapeEffect {
    info: EffectInfo,
}

impl LinearShapeEffect {
    pub fn new(info: EffectInfo) -> Self {
        Self { info }
    }
}

impl BehaviorEffect for LinearShapeEffect {
    fn info(&self) -> &EffectInfo {
        &self.info
    }

    fn change_contribution(&self, _actor: ActorId, difference: i32, _ctx: &EffectContext<'_>) -> f64 {
        f64::from(difference)
    }

    fn ego_statistic(&self, ego: ActorId, current_values: &[f64], _ctx: &EffectContext<'_>) -> f64 {
        current_values[ego.index()]
    }
}

/// Quadratic tendency: `s_i = z_i²`.
///
/// Changing `z` by `d` moves the statistic by `(z + d)² - z² = d(2z + d)`.
#[derive(Clone, Debug)]
pub struct QuadraticShapeEffect {
    info: EffectInfo,
}

impl QuadraticShapeEffect {
    pub fn new(info: EffectInfo) -> Self {
        Self { info }
    }
}

impl BehaviorEffect for QuadraticShapeEffect {
    fn info(&self) -> &EffectInfo {
        &self.info
    }

    fn change_contribution(&self, actor: ActorId, difference: i32, ctx: &EffectContext<'_>) -> f64 {
        let d = f64::from(difference);
        d * (2.0 * ctx.centered_value(actor) + d)
    }

    fn ego_statistic(&self, ego: ActorId, current_values: &[f64], _ctx: &EffectContext<'_>) -> f64 {
        let z = current_values[ego.index()];
        z * z
    }
}
