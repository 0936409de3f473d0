//! Average and total alter effects.

use saom_core::ActorId;

use crate::{BehaviorEffect, EffectContext, EffectInfo};

/// How alter values are combined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlterAggregate {
    /// Mean over alters (`avAlt`).
    Average,
    /// Sum over alters (`totAlt`).
    Total,
}

/// Assimilation to alters: `s_i = z_i * agg_j z_j` over the alters of `i`.
///
/// Actors without outgoing ties contribute 0.
#[derive(Clone, Debug)]
pub struct AlterEffect {
    info:      EffectInfo,
    aggregate: AlterAggregate,
}

impl AlterEffect {
    pub fn new(info: EffectInfo, aggregate: AlterAggregate) -> Self {
        Self { info, aggregate }
    }

    pub fn aggregate(&self) -> AlterAggregate {
        self.aggregate
    }

    /// Aggregate `value_of` over the alters of `ego`; `None` without alters.
    #[inline]
    fn combine(&self, ego: ActorId, ctx: &EffectContext<'_>, value_of: impl Fn(ActorId) -> f64) -> Option<f64> {
        let alters = ctx.alters(ego);
        if alters.is_empty() {
            return None;
        }
        let sum: f64 = alters.iter().map(|&alter| value_of(alter)).sum();
        Some(match self.aggregate {
            AlterAggregate::Average => sum / alters.len() as f64,
            AlterAggregate::Total => sum,
        })
    }
}

impl BehaviorEffect for AlterEffect {
    fn info(&self) -> &EffectInfo {
        &self.info
    }

    fn change_contribution(&self, actor: ActorId, difference: i32, ctx: &EffectContext<'_>) -> f64 {
        if difference == 0 {
            return 0.0;
        }
        self.combine(actor, ctx, |alter| ctx.centered_value(alter))
            .map_or(0.0, |combined| combined * f64::from(difference))
    }

    fn ego_statistic(&self, ego: ActorId, current_values: &[f64], ctx: &EffectContext<'_>) -> f64 {
        self.combine(ego, ctx, |alter| current_values[alter.index()])
            .map_or(0.0, |combined| combined * current_values[ego.index()])
    }
}
