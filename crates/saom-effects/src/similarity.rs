//! Average similarity effect.

use saom_core::ActorId;

use crate::{BehaviorEffect, EffectContext, EffectInfo};

/// Homophily on behavior: `s_i = mean_j sim(z_i, z_j)` over the alters of
/// `i`, where `sim` is the variable's similarity centered by the constant
/// stored for the effect's network.
///
/// Actors without outgoing ties contribute 0.
#[derive(Clone, Debug)]
pub struct AverageSimilarityEffect {
    info: EffectInfo,
}

impl AverageSimilarityEffect {
    pub fn new(info: EffectInfo) -> Self {
        Self { info }
    }
}

impl BehaviorEffect for AverageSimilarityEffect {
    fn info(&self) -> &EffectInfo {
        &self.info
    }

    fn change_contribution(&self, actor: ActorId, difference: i32, ctx: &EffectContext<'_>) -> f64 {
        let Some(network) = ctx.network else {
            return 0.0;
        };
        let alters = network.alters(actor);
        if difference == 0 || alters.is_empty() {
            return 0.0;
        }

        let data = ctx.data;
        let name = network.name();
        let before = ctx.centered_value(actor);
        let after = before + f64::from(difference);
        let sum: f64 = alters
            .iter()
            .map(|&alter| {
                let z = ctx.centered_value(alter);
                data.similarity_network(after, z, name) - data.similarity_network(before, z, name)
            })
            .sum();
        sum / alters.len() as f64
    }

    fn ego_statistic(&self, ego: ActorId, current_values: &[f64], ctx: &EffectContext<'_>) -> f64 {
        let Some(network) = ctx.network else {
            return 0.0;
        };
        let alters = network.alters(ego);
        if alters.is_empty() {
            return 0.0;
        }

        let own = current_values[ego.index()];
        let sum: f64 = alters
            .iter()
            .map(|&alter| ctx.data.similarity_network(own, current_values[alter.index()], network.name()))
            .sum();
        sum / alters.len() as f64
    }
}
