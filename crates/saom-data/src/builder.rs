//! Loading-phase builder for [`BehaviorLongitudinalData`].
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use saom_core::{ActorId, ActorSet, VariableId};
//! use saom_data::BehaviorDataBuilder;
//!
//! let actors = Arc::new(ActorSet::new("pupils", 2));
//! let mut b = BehaviorDataBuilder::new(VariableId(0), "smoking", actors, 2);
//! b.row(0, &[1, 3]).unwrap();
//! b.row(1, &[2, 4]).unwrap();
//! let data = b.similarity_mean(0.25).build().unwrap();
//!
//! assert_eq!(data.range(), 3);
//! assert_eq!(data.overall_mean(), 2.5);
//! assert_eq!(data.similarity(1.0, 1.0), 0.75);
//! ```

use std::sync::Arc;

use saom_core::{ActorId, ActorSet, VariableId};
use saom_network::Network;

use crate::{BehaviorLongitudinalData, DataError, DataResult, LongitudinalData};

/// Collects cells and centering constants, then produces a
/// [`BehaviorLongitudinalData`] whose properties are already calculated.
///
/// Unlike the raw setters on the data object, every setter here checks its
/// indices, so loaders can report bad input instead of panicking.
///
/// Centering constants resolve in this order: computed from the observations
/// (if requested), then explicitly supplied values, which win.
pub struct BehaviorDataBuilder<'n> {
    data:                    BehaviorLongitudinalData,
    compute_similarity_mean: bool,
    similarity_mean:         Option<f64>,
    alter_networks:          Vec<&'n Network>,
    network_means:           Vec<(String, f64)>,
}

impl<'n> BehaviorDataBuilder<'n> {
    pub fn new(
        id:                VariableId,
        name:              impl Into<String>,
        actor_set:         Arc<ActorSet>,
        observation_count: usize,
    ) -> Self {
        Self {
            data: BehaviorLongitudinalData::new(id, name, actor_set, observation_count),
            compute_similarity_mean: false,
            similarity_mean:         None,
            alter_networks:          Vec::new(),
            network_means:           Vec::new(),
        }
    }

    fn check(&self, observation: usize, actor: ActorId) -> DataResult<()> {
        let observations = self.data.observation_count();
        if observation >= observations {
            return Err(self.out_of_range("observation", observation, observations));
        }
        let n = self.data.n();
        if actor.index() >= n {
            return Err(self.out_of_range("actor", actor.index(), n));
        }
        Ok(())
    }

    fn out_of_range(&self, what: &'static str, index: usize, len: usize) -> DataError {
        DataError::OutOfRange {
            variable: self.data.name().to_owned(),
            what,
            index,
            len,
        }
    }

    // ── Cells ─────────────────────────────────────────────────────────────

    /// Store an observed value.
    pub fn set(&mut self, observation: usize, actor: ActorId, value: i32) -> DataResult<()> {
        self.check(observation, actor)?;
        self.data.set_value(observation, actor, value);
        Ok(())
    }

    /// Mark a cell as not observed.
    pub fn set_missing(&mut self, observation: usize, actor: ActorId) -> DataResult<()> {
        self.check(observation, actor)?;
        self.data.set_missing(observation, actor, true);
        Ok(())
    }

    /// Mark a cell as structurally determined.
    pub fn set_structural(&mut self, observation: usize, actor: ActorId) -> DataResult<()> {
        self.check(observation, actor)?;
        self.data.set_structural(observation, actor, true);
        Ok(())
    }

    /// Store a whole observation; `values` must hold exactly one value per
    /// actor.
    pub fn row(&mut self, observation: usize, values: &[i32]) -> DataResult<()> {
        if values.len() != self.data.n() {
            return Err(self.out_of_range("row length", values.len(), self.data.n()));
        }
        for (i, &value) in values.iter().enumerate() {
            self.set(observation, ActorId(i as u32), value)?;
        }
        Ok(())
    }

    // ── Centering constants ───────────────────────────────────────────────

    /// Supply the global similarity centering constant.
    pub fn similarity_mean(mut self, similarity_mean: f64) -> Self {
        self.similarity_mean = Some(similarity_mean);
        self
    }

    /// Supply the alter-similarity centering constant for `network_name`.
    pub fn network_similarity_mean(mut self, network_name: impl Into<String>, similarity_mean: f64) -> Self {
        self.network_means.push((network_name.into(), similarity_mean));
        self
    }

    /// Derive the global centering constant from the observations at build
    /// time.
    pub fn compute_similarity_mean(mut self) -> Self {
        self.compute_similarity_mean = true;
        self
    }

    /// Derive the alter-similarity centering constant of `network` from the
    /// observations at build time.
    pub fn center_on(mut self, network: &'n Network) -> Self {
        self.alter_networks.push(network);
        self
    }

    /// Calculate properties, resolve centering constants, and hand over the
    /// data object.
    ///
    /// # Errors
    ///
    /// Any data-integrity failure of
    /// [`calculate_properties`](BehaviorLongitudinalData::calculate_properties),
    /// or [`DataError::ActorCountMismatch`] for a centering network over a
    /// different actor count.
    pub fn build(self) -> DataResult<BehaviorLongitudinalData> {
        let mut data = self.data;
        data.calculate_properties()?;

        if self.compute_similarity_mean {
            data.center_similarity()?;
        }
        for network in self.alter_networks {
            data.center_on_network(network)?;
        }

        if let Some(mean) = self.similarity_mean {
            data.set_similarity_mean(mean);
        }
        for (name, mean) in self.network_means {
            data.set_network_similarity_mean(name, mean);
        }

        Ok(data)
    }
}
