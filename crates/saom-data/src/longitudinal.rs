//! The common contract of variables observed over several time points.

use std::sync::Arc;

use saom_core::{ActorSet, VariableId};

/// A variable observed at `observation_count()` time points over the actors
/// of one [`ActorSet`].
pub trait LongitudinalData {
    /// Identifier, unique among the variables of one data set.
    fn id(&self) -> VariableId;

    fn name(&self) -> &str;

    /// The actors this variable is observed on.
    fn actor_set(&self) -> &Arc<ActorSet>;

    /// Number of observation moments.
    fn observation_count(&self) -> usize;

    /// Number of actors.
    #[inline]
    fn n(&self) -> usize {
        self.actor_set().n()
    }
}
