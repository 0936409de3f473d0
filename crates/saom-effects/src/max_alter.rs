//! Maximum / minimum alter effect.

use saom_core::ActorId;

use crate::{BehaviorEffect, EffectContext, EffectInfo};

/// Aligns an actor's behavior with the most extreme behavior among its
/// alters: the statistic for ego `i` is
///
/// ```text
/// s_i = z_i * max_j z_j      (or min_j z_j when `minim`)
/// ```
///
/// over the alters `j` of `i`'s outgoing ties, where `z` are centered values.
/// Actors without outgoing ties contribute 0.
///
/// Ties between equally extreme alters keep the first alter in the network's
/// iteration order.
#[derive(Clone, Debug)]
pub struct MaxAlterEffect {
    info:  EffectInfo,
    minim: bool,
}

impl MaxAlterEffect {
    /// `minim = false` aggregates by maximum, `true` by minimum.
    pub fn new(info: EffectInfo, minim: bool) -> Self {
        Self { info, minim }
    }

    /// `true` if this effect aggregates by minimum.
    pub fn is_minimum(&self) -> bool {
        self.minim
    }

    /// Strict improvement over the value kept so far.
    #[inline]
    fn improves(&self, candidate: f64, kept: f64) -> bool {
        if self.minim { candidate < kept } else { candidate > kept }
    }

    /// Most extreme of `values`; `None` for an empty sequence.
    #[inline]
    fn extreme(&self, values: impl Iterator<Item = f64>) -> Option<f64> {
        values.fold(None, |kept, candidate| match kept {
            Some(k) if !self.improves(candidate, k) => Some(k),
            _ => Some(candidate),
        })
    }
}

impl BehaviorEffect for MaxAlterEffect {
    fn info(&self) -> &EffectInfo {
        &self.info
    }

    fn change_contribution(&self, actor: ActorId, difference: i32, ctx: &EffectContext<'_>) -> f64 {
        if difference == 0 {
            return 0.0;
        }
        let Some(network) = ctx.network else {
            return 0.0;
        };
        if network.out_degree(actor) == 0 {
            return 0.0;
        }

        self.extreme(network.out_ties(actor).map(|tie| ctx.centered_value(tie.actor)))
            .map_or(0.0, |extreme| extreme * f64::from(difference))
    }

    fn ego_statistic(&self, ego: ActorId, current_values: &[f64], ctx: &EffectContext<'_>) -> f64 {
        let Some(network) = ctx.network else {
            return 0.0;
        };
        if network.out_degree(ego) == 0 {
            return 0.0;
        }

        self.extreme(network.out_ties(ego).map(|tie| current_values[tie.actor.index()]))
            .map_or(0.0, |extreme| extreme * current_values[ego.index()])
    }
}
