//! Read-only state passed to every effect evaluation.

use saom_core::ActorId;
use saom_data::BehaviorLongitudinalData;
use saom_network::Network;

/// A read-only snapshot of everything an effect may look at.
///
/// Built by the evaluator for each effect (so `network` is that effect's
/// network) and shared immutably across all actor evaluations.
///
/// # Lifetimes
///
/// All borrows live for one evaluation pass.  The evaluator never hands out
/// mutable access to the data object or the behavior state while a context
/// is alive.
#[derive(Clone, Copy)]
pub struct EffectContext<'a> {
    /// The observed variable; supplies the overall mean and similarity.
    pub data: &'a BehaviorLongitudinalData,

    /// Current behavior state, indexed by `ActorId`.
    pub values: &'a [i32],

    /// The effect's network, `None` for effects without one.
    pub network: Option<&'a Network>,
}

impl<'a> EffectContext<'a> {
    #[inline]
    pub fn new(
        data:    &'a BehaviorLongitudinalData,
        values:  &'a [i32],
        network: Option<&'a Network>,
    ) -> Self {
        Self { data, values, network }
    }

    /// Current value of `actor` minus the variable's overall mean.
    #[inline]
    pub fn centered_value(&self, actor: ActorId) -> f64 {
        f64::from(self.values[actor.index()]) - self.data.overall_mean()
    }

    /// Out-degree of `actor` in the effect's network; 0 without a network.
    #[inline]
    pub fn out_degree(&self, actor: ActorId) -> usize {
        self.network.map_or(0, |network| network.out_degree(actor))
    }

    /// Alters of `actor` in the effect's network; empty without a network.
    #[inline]
    pub fn alters(&self, actor: ActorId) -> &'a [ActorId] {
        match self.network {
            Some(network) => network.alters(actor),
            None => &[],
        }
    }
}
