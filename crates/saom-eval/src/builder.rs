//! Fluent builder for constructing an [`Evaluator`].

use saom_core::EvalConfig;
use saom_data::{BehaviorLongitudinalData, LongitudinalData};
use saom_effects::BehaviorEffect;
use saom_network::Network;

use crate::{EvalError, EvalResult, Evaluator};

/// Fluent builder for [`Evaluator<'a>`].
///
/// # Required inputs
///
/// - [`EvalConfig`]: period and trend handling
/// - `&BehaviorLongitudinalData`: calculated (and centered) data
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                    |
/// |-------------------------|--------------------------------------------|
/// | `.network(n)`           | no networks                                |
/// | `.effect(e)`            | no effects                                 |
/// | `.current_values(v)`    | observed values at `config.period`, missing cells imputed with the rounded overall mean |
///
/// # Example
///
/// ```rust,ignore
/// let mut eval = EvaluatorBuilder::new(EvalConfig::new(0), &data)
///     .network(friendship)
///     .effect(create_effect(EffectInfo::on_network("maxAlt", "friendship"))?)
///     .build()?;
/// let moves = eval.change_contributions(ActorId(3));
/// ```
pub struct EvaluatorBuilder<'a> {
    config:   EvalConfig,
    data:     &'a BehaviorLongitudinalData,
    networks: Vec<Network>,
    effects:  Vec<Box<dyn BehaviorEffect>>,
    values:   Option<Vec<i32>>,
}

impl<'a> EvaluatorBuilder<'a> {
    pub fn new(config: EvalConfig, data: &'a BehaviorLongitudinalData) -> Self {
        Self {
            config,
            data,
            networks: Vec::new(),
            effects:  Vec::new(),
            values:   None,
        }
    }

    /// Register a network; effects find it by [`Network::name`].
    pub fn network(mut self, network: Network) -> Self {
        self.networks.push(network);
        self
    }

    /// Append an effect.  Statistics are reported in insertion order.
    pub fn effect(mut self, effect: Box<dyn BehaviorEffect>) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn effects(mut self, effects: impl IntoIterator<Item = Box<dyn BehaviorEffect>>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Start from this behavior state instead of the observed one (one value
    /// per actor).
    pub fn current_values(mut self, values: Vec<i32>) -> Self {
        self.values = Some(values);
        self
    }

    /// Validate inputs, resolve each effect's network, and return a ready
    /// [`Evaluator`].
    pub fn build(self) -> EvalResult<Evaluator<'a>> {
        let data = self.data;
        let n = data.n();

        // ── Validate data and configuration ───────────────────────────────
        if !data.is_calculated() {
            return Err(EvalError::PropertiesNotCalculated { variable: data.name().to_owned() });
        }
        self.config.validate(data.observation_count())?;

        for (i, network) in self.networks.iter().enumerate() {
            if network.n() != n {
                return Err(EvalError::ActorCountMismatch {
                    expected: n,
                    got:      network.n(),
                    what:     format!("network '{}'", network.name()),
                });
            }
            if self.networks[..i].iter().any(|other| other.name() == network.name()) {
                return Err(EvalError::DuplicateNetwork(network.name().to_owned()));
            }
        }

        // ── Resolve effect networks ───────────────────────────────────────
        let effect_networks = self
            .effects
            .iter()
            .map(|effect| match &effect.info().network_name {
                None => Ok(None),
                Some(name) => self
                    .networks
                    .iter()
                    .position(|network| network.name() == name)
                    .map(Some)
                    .ok_or_else(|| EvalError::UnknownNetwork {
                        effect:  effect.name().to_owned(),
                        network: name.clone(),
                    }),
            })
            .collect::<EvalResult<Vec<Option<usize>>>>()?;

        // ── Initial behavior state ────────────────────────────────────────
        let values = match self.values {
            Some(v) => {
                if v.len() != n {
                    return Err(EvalError::ActorCountMismatch {
                        expected: n,
                        got:      v.len(),
                        what:     "current values".to_owned(),
                    });
                }
                v
            }
            None => observed_state(data, self.config.period),
        };

        log::debug!(
            "evaluator for '{}': {} actors, {} networks, {} effects, period {}",
            data.name(),
            n,
            self.networks.len(),
            self.effects.len(),
            self.config.period
        );

        Ok(Evaluator {
            config:   self.config,
            data,
            networks: self.networks,
            effects:  self.effects,
            effect_networks,
            values,
        })
    }
}

/// Observed values at `period`, with missing cells replaced by the rounded
/// overall mean.
fn observed_state(data: &BehaviorLongitudinalData, period: usize) -> Vec<i32> {
    let imputed = (data.overall_mean().round() as i32).clamp(data.min(), data.max());
    data.actor_set()
        .actor_ids()
        .map(|actor| {
            if data.is_missing(period, actor) {
                imputed
            } else {
                data.value(period, actor)
            }
        })
        .collect()
}
