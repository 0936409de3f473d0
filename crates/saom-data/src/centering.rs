//! Similarity centering constants derived from the observed data.
//!
//! Similarity-based effects subtract a centering constant so that their
//! statistics have mean zero over the observed data.  The constants are the
//! mean of the uncentered similarity `1 - |v_i - v_j| / range`:
//!
//! - **global**: over every ordered pair of distinct actors observed at the
//!   same observation, averaged per observation and then over observations;
//! - **per network**: over every tie `i -> j` of the network at every
//!   observation where both ends are observed.

use saom_core::ActorId;
use saom_network::Network;

use crate::{BehaviorLongitudinalData, DataError, DataResult, LongitudinalData};

impl BehaviorLongitudinalData {
    fn ensure_calculated(&self) -> DataResult<()> {
        if self.is_calculated() {
            Ok(())
        } else {
            Err(DataError::NotCalculated { variable: self.name().to_owned() })
        }
    }

    /// `1 - |a - b| / range`, without any centering.
    #[inline]
    fn raw_similarity(&self, a: i32, b: i32) -> f64 {
        1.0 - (i64::from(a) - i64::from(b)).abs() as f64 / self.range() as f64
    }

    /// Mean pairwise similarity of the observed values.
    ///
    /// Observations with fewer than two observed actors do not contribute;
    /// 0 if no observation qualifies.
    pub fn observed_similarity_mean(&self) -> DataResult<f64> {
        self.ensure_calculated()?;

        let mut total = 0.0;
        let mut observations = 0usize;
        let mut observed: Vec<i32> = Vec::with_capacity(self.n());

        for observation in 0..self.observation_count() {
            observed.clear();
            observed.extend(
                self.actor_set()
                    .actor_ids()
                    .filter(|&a| !self.is_missing(observation, a))
                    .map(|a| self.value(observation, a)),
            );
            let count = observed.len();
            if count < 2 {
                continue;
            }

            let mut sum = 0.0;
            for (i, &a) in observed.iter().enumerate() {
                for &b in &observed[i + 1..] {
                    sum += self.raw_similarity(a, b);
                }
            }
            // Each unordered pair stands for two ordered pairs.
            total += 2.0 * sum / (count * (count - 1)) as f64;
            observations += 1;
        }

        Ok(if observations == 0 { 0.0 } else { total / observations as f64 })
    }

    /// Mean similarity between egos and their alters in `network`.
    ///
    /// 0 if no tie connects two observed actors.
    pub fn observed_alter_similarity_mean(&self, network: &Network) -> DataResult<f64> {
        self.ensure_calculated()?;
        if network.n() != self.n() {
            return Err(DataError::ActorCountMismatch {
                variable: self.name().to_owned(),
                network:  network.name().to_owned(),
                expected: self.n(),
                got:      network.n(),
            });
        }

        let mut sum = 0.0;
        let mut pairs = 0usize;
        for observation in 0..self.observation_count() {
            for (ego, tie) in network.ties() {
                if let Some(similarity) = self.observed_pair_similarity(observation, ego, tie.actor) {
                    sum += similarity;
                    pairs += 1;
                }
            }
        }

        Ok(if pairs == 0 { 0.0 } else { sum / pairs as f64 })
    }

    fn observed_pair_similarity(&self, observation: usize, a: ActorId, b: ActorId) -> Option<f64> {
        if self.is_missing(observation, a) || self.is_missing(observation, b) {
            return None;
        }
        Some(self.raw_similarity(self.value(observation, a), self.value(observation, b)))
    }

    /// Compute [`observed_similarity_mean`](Self::observed_similarity_mean)
    /// and store it as the global centering constant.
    pub fn center_similarity(&mut self) -> DataResult<f64> {
        let mean = self.observed_similarity_mean()?;
        self.set_similarity_mean(mean);
        log::debug!("behavior '{}': similarity mean {mean:.4}", self.name());
        Ok(mean)
    }

    /// Compute [`observed_alter_similarity_mean`](Self::observed_alter_similarity_mean)
    /// and store it under the network's name.
    pub fn center_on_network(&mut self, network: &Network) -> DataResult<f64> {
        let mean = self.observed_alter_similarity_mean(network)?;
        self.set_network_similarity_mean(network.name(), mean);
        log::debug!(
            "behavior '{}': alter similarity mean {mean:.4} for network '{}'",
            self.name(),
            network.name()
        );
        Ok(mean)
    }
}
