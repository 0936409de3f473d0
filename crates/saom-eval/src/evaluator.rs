//! The `Evaluator` and its per-actor operations.

use saom_core::{ActorId, EvalConfig};
use saom_data::{BehaviorLongitudinalData, LongitudinalData};
use saom_effects::{BehaviorEffect, EffectContext};
use saom_network::Network;

use crate::{
    ActorMoves, CANDIDATE_DIFFERENCES, CandidateMove, EffectStatistic, EvalError, EvalResult,
    StatisticsReport,
};

/// Evaluates a fixed list of behavior effects against one behavior variable.
///
/// Holds the current behavior state (one value per actor) and the networks
/// the effects read.  The data object is borrowed read-only.
///
/// Create via [`EvaluatorBuilder`][crate::EvaluatorBuilder].
pub struct Evaluator<'a> {
    pub config: EvalConfig,

    pub(crate) data:     &'a BehaviorLongitudinalData,
    pub(crate) networks: Vec<Network>,
    pub(crate) effects:  Vec<Box<dyn BehaviorEffect>>,

    /// Index into `networks` for each effect, resolved at build time.
    pub(crate) effect_networks: Vec<Option<usize>>,

    /// Current behavior state, indexed by `ActorId`.
    pub(crate) values: Vec<i32>,
}

impl<'a> Evaluator<'a> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn data(&self) -> &'a BehaviorLongitudinalData {
        self.data
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn effects(&self) -> &[Box<dyn BehaviorEffect>] {
        &self.effects
    }

    /// Current behavior state.
    pub fn current_values(&self) -> &[i32] {
        &self.values
    }

    /// Current state minus the variable's overall mean.
    pub fn centered_values(&self) -> Vec<f64> {
        let mean = self.data.overall_mean();
        self.values.iter().map(|&v| f64::from(v) - mean).collect()
    }

    /// Evaluation context of effect `k`.
    #[inline]
    fn context(&self, k: usize) -> EffectContext<'_> {
        let network = self.effect_networks[k].map(|i| &self.networks[i]);
        EffectContext::new(self.data, &self.values, network)
    }

    // ── Micro-steps ───────────────────────────────────────────────────────

    /// `true` if `actor` may change its behavior by `difference`.
    ///
    /// Staying put is always permitted.  Otherwise the new value must lie in
    /// `[min, max]`, the actor's value at the configured period must not be
    /// structurally determined, and with `respect_trends` the change must
    /// not go against an up-only or down-only period.
    pub fn is_permitted(&self, actor: ActorId, difference: i32) -> bool {
        if difference == 0 {
            return true;
        }
        let data = self.data;
        let period = self.config.period;
        if data.is_structural(period, actor) {
            return false;
        }

        let Some(target) = self.values[actor.index()].checked_add(difference) else {
            return false;
        };
        if target < data.min() || target > data.max() {
            return false;
        }

        if self.config.respect_trends && period + 1 < data.observation_count() {
            if difference < 0 && data.up_only(period) {
                return false;
            }
            if difference > 0 && data.down_only(period) {
                return false;
            }
        }
        true
    }

    /// Change contributions of every effect for each candidate move of
    /// `actor`.
    pub fn change_contributions(&self, actor: ActorId) -> ActorMoves {
        let contexts: Vec<EffectContext<'_>> = (0..self.effects.len()).map(|k| self.context(k)).collect();

        let moves = CANDIDATE_DIFFERENCES
            .iter()
            .map(|&difference| CandidateMove {
                difference,
                permitted: self.is_permitted(actor, difference),
                contributions: self
                    .effects
                    .iter()
                    .zip(&contexts)
                    .map(|(effect, ctx)| effect.change_contribution(actor, difference, ctx))
                    .collect(),
            })
            .collect();

        ActorMoves { actor, moves }
    }

    /// Apply a permitted micro-step to the current state.
    ///
    /// # Errors
    ///
    /// [`EvalError::MoveNotPermitted`] if [`is_permitted`](Self::is_permitted)
    /// rejects the change; the state is left untouched.
    pub fn apply_change(&mut self, actor: ActorId, difference: i32) -> EvalResult<()> {
        if !self.is_permitted(actor, difference) {
            log::warn!("rejected change of {difference} for {actor}");
            return Err(EvalError::MoveNotPermitted { actor, difference });
        }
        self.values[actor.index()] += difference;
        Ok(())
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Ego statistic of every effect for `ego`, given a full assignment of
    /// values to all actors.
    pub fn ego_statistics(&self, ego: ActorId, current_values: &[f64]) -> Vec<f64> {
        self.effects
            .iter()
            .enumerate()
            .map(|(k, effect)| effect.ego_statistic(ego, current_values, &self.context(k)))
            .collect()
    }

    /// Total statistic of every effect for the current state: the sum of
    /// ego statistics over all actors, using centered values.
    pub fn statistics(&self) -> Vec<f64> {
        let centered = self.centered_values();
        (0..self.effects.len())
            .map(|k| self.effect_statistic(k, &centered))
            .collect()
    }

    /// Sum of one effect's ego statistics.
    ///
    /// With the `parallel` feature the actors are evaluated on Rayon; the
    /// per-actor values are summed in actor order either way, so both builds
    /// give bit-identical totals.
    fn effect_statistic(&self, k: usize, centered: &[f64]) -> f64 {
        let effect = &self.effects[k];
        let ctx = self.context(k);
        let n = self.values.len() as u32;

        #[cfg(not(feature = "parallel"))]
        {
            (0..n)
                .map(|i| effect.ego_statistic(ActorId(i), centered, &ctx))
                .sum()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let per_actor: Vec<f64> = (0..n)
                .into_par_iter()
                .map(|i| effect.ego_statistic(ActorId(i), centered, &ctx))
                .collect();
            per_actor.iter().sum()
        }
    }

    /// Totals for the current state, labelled by effect and network.
    pub fn report(&self) -> StatisticsReport {
        let effects = self
            .effects
            .iter()
            .zip(self.statistics())
            .map(|(effect, statistic)| EffectStatistic {
                effect:  effect.name().to_owned(),
                network: effect.info().network_name.clone(),
                statistic,
            })
            .collect();

        StatisticsReport {
            variable:     self.data.name().to_owned(),
            period:       self.config.period,
            overall_mean: self.data.overall_mean(),
            effects,
        }
    }
}
