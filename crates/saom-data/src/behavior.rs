//! Observed values of one behavior variable.
//!
//! # Data layout
//!
//! The three planes (`value`, `missing`, `structural`) are dense row-major
//! `Vec`s of length `observation_count * n`.  Cell `(o, a)` lives at index
//! `o * n + a`, so one observation's values form a contiguous slice:
//!
//! ```text
//! values[ o * n .. (o + 1) * n ]
//! ```
//!
//! Indices are caller preconditions.  Out-of-range access panics through
//! slice indexing; it is never silently clamped.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use saom_core::{ActorId, ActorSet, VariableId};

use crate::{DataError, DataResult, LongitudinalData};

/// Observed values of a behavior variable for all actors at every
/// observation, plus statistics derived from them.
///
/// All cells start as `(value 0, not missing, not structural)`.  Missingness
/// and structural determination are independent flags.
///
/// [`min`](Self::min), [`max`](Self::max), [`overall_mean`](Self::overall_mean)
/// and [`range`](Self::range) are meaningful only after
/// [`calculate_properties`](Self::calculate_properties) has succeeded; see
/// [`is_calculated`](Self::is_calculated).
#[derive(Clone, Debug)]
pub struct BehaviorLongitudinalData {
    id:                VariableId,
    name:              String,
    actor_set:         Arc<ActorSet>,
    observation_count: usize,

    // ── Planes ────────────────────────────────────────────────────────────
    values:     Vec<i32>,
    missing:    Vec<bool>,
    structural: Vec<bool>,

    // ── Derived by calculate_properties ──────────────────────────────────
    calculated:   bool,
    min:          i32,
    max:          i32,
    overall_mean: f64,
    range:        i64,
    /// `up_only[p]`: nobody decreases from observation `p` to `p + 1`.
    up_only:      Vec<bool>,
    /// `down_only[p]`: nobody increases from observation `p` to `p + 1`.
    down_only:    Vec<bool>,

    // ── Centering constants (set after derivation) ────────────────────────
    similarity_mean:  f64,
    similarity_means: FxHashMap<String, f64>,
}

impl BehaviorLongitudinalData {
    /// Allocate zeroed planes for `observation_count` observations of every
    /// actor in `actor_set`.
    pub fn new(
        id:                VariableId,
        name:              impl Into<String>,
        actor_set:         Arc<ActorSet>,
        observation_count: usize,
    ) -> Self {
        let cells = observation_count * actor_set.n();
        Self {
            id,
            name: name.into(),
            actor_set,
            observation_count,
            values:           vec![0; cells],
            missing:          vec![false; cells],
            structural:       vec![false; cells],
            calculated:       false,
            min:              0,
            max:              0,
            overall_mean:     0.0,
            range:            0,
            up_only:          Vec::new(),
            down_only:        Vec::new(),
            similarity_mean:  0.0,
            similarity_means: FxHashMap::default(),
        }
    }

    #[inline(always)]
    fn cell(&self, observation: usize, actor: ActorId) -> usize {
        observation * self.actor_set.n() + actor.index()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// Observed value of `actor` at `observation`.
    #[inline]
    pub fn value(&self, observation: usize, actor: ActorId) -> i32 {
        self.values[self.cell(observation, actor)]
    }

    #[inline]
    pub fn set_value(&mut self, observation: usize, actor: ActorId, value: i32) {
        let i = self.cell(observation, actor);
        self.values[i] = value;
    }

    /// All actors' values at `observation`, indexed by `ActorId`.
    #[inline]
    pub fn values(&self, observation: usize) -> &[i32] {
        let n = self.actor_set.n();
        &self.values[observation * n..(observation + 1) * n]
    }

    /// `true` if the value of `actor` at `observation` was not observed.
    #[inline]
    pub fn is_missing(&self, observation: usize, actor: ActorId) -> bool {
        self.missing[self.cell(observation, actor)]
    }

    #[inline]
    pub fn set_missing(&mut self, observation: usize, actor: ActorId, missing: bool) {
        let i = self.cell(observation, actor);
        self.missing[i] = missing;
    }

    /// `true` if the value of `actor` at `observation` is fixed by process
    /// rules rather than chosen by the actor.
    #[inline]
    pub fn is_structural(&self, observation: usize, actor: ActorId) -> bool {
        self.structural[self.cell(observation, actor)]
    }

    #[inline]
    pub fn set_structural(&mut self, observation: usize, actor: ActorId, structural: bool) {
        let i = self.cell(observation, actor);
        self.structural[i] = structural;
    }

    // ── Derived statistics ────────────────────────────────────────────────

    /// `true` once [`calculate_properties`](Self::calculate_properties) has
    /// succeeded.  Writing a cell afterwards does not reset this flag.
    #[inline]
    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    /// Smallest non-missing value over all observations.
    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest non-missing value over all observations.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Mean over observations of each observation's non-missing mean.
    #[inline]
    pub fn overall_mean(&self) -> f64 {
        self.overall_mean
    }

    /// `max - min`; strictly positive once calculated.  Wider than a cell so
    /// that the extremes of `i32` fit.
    #[inline]
    pub fn range(&self) -> i64 {
        self.range
    }

    /// `true` if no actor observed at both `period` and `period + 1`
    /// decreases in between.
    ///
    /// # Panics
    ///
    /// Before [`calculate_properties`](Self::calculate_properties) has
    /// succeeded, and for `period >= observation_count - 1`.
    #[inline]
    pub fn up_only(&self, period: usize) -> bool {
        self.up_only[period]
    }

    /// `true` if no actor observed at both `period` and `period + 1`
    /// increases in between.
    ///
    /// # Panics
    ///
    /// As [`up_only`](Self::up_only).
    #[inline]
    pub fn down_only(&self, period: usize) -> bool {
        self.down_only[period]
    }

    /// `true` if at least one period is up-only.
    pub fn any_up_only(&self) -> bool {
        self.up_only.iter().any(|&u| u)
    }

    /// `true` if at least one period is down-only.
    pub fn any_down_only(&self) -> bool {
        self.down_only.iter().any(|&d| d)
    }

    // ── Similarity ────────────────────────────────────────────────────────

    /// Centered similarity `1 - |a - b| / range - similarity_mean`.
    ///
    /// Defined for any real `a`, `b`, including centered values.
    #[inline]
    pub fn similarity(&self, a: f64, b: f64) -> f64 {
        1.0 - (a - b).abs() / self.range as f64 - self.similarity_mean
    }

    /// Centered similarity using the constant stored for `network_name`
    /// (0 when none was stored).
    #[inline]
    pub fn similarity_network(&self, a: f64, b: f64, network_name: &str) -> f64 {
        let mean = self.similarity_means.get(network_name).copied().unwrap_or(0.0);
        1.0 - (a - b).abs() / self.range as f64 - mean
    }

    /// Global similarity centering constant.
    #[inline]
    pub fn similarity_mean(&self) -> f64 {
        self.similarity_mean
    }

    pub fn set_similarity_mean(&mut self, similarity_mean: f64) {
        self.similarity_mean = similarity_mean;
    }

    /// Centering constant stored for `network_name`, if any.
    pub fn network_similarity_mean(&self, network_name: &str) -> Option<f64> {
        self.similarity_means.get(network_name).copied()
    }

    /// Store (or overwrite) the alter-similarity centering constant for
    /// `network_name`.
    pub fn set_network_similarity_mean(&mut self, network_name: impl Into<String>, similarity_mean: f64) {
        self.similarity_means.insert(network_name.into(), similarity_mean);
    }

    // ── Property derivation ───────────────────────────────────────────────

    /// Derive min, max, overall mean, range, and the per-period trend flags
    /// from the current planes.
    ///
    /// O(T·N).  Call once after loading, never from an evaluation loop.
    ///
    /// # Errors
    ///
    /// - [`DataError::NoObservations`] if the variable has no observations.
    /// - [`DataError::NoValidData`] if some observation has no non-missing
    ///   cell.
    /// - [`DataError::AllValuesEqual`] if every non-missing value is equal.
    pub fn calculate_properties(&mut self) -> DataResult<()> {
        if self.observation_count == 0 {
            return Err(DataError::NoObservations { variable: self.name.clone() });
        }

        let n = self.actor_set.n();
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        let mut mean_total = 0.0;

        for observation in 0..self.observation_count {
            let row = observation * n..(observation + 1) * n;
            let mut count = 0usize;
            let mut sum = 0i64;

            for (&value, &missing) in self.values[row.clone()].iter().zip(&self.missing[row]) {
                if !missing {
                    min = min.min(value);
                    max = max.max(value);
                    sum += i64::from(value);
                    count += 1;
                }
            }

            if count == 0 {
                return Err(DataError::NoValidData {
                    variable: self.name.clone(),
                    observation,
                });
            }

            mean_total += sum as f64 / count as f64;
        }

        let range = i64::from(max) - i64::from(min);
        if range == 0 {
            return Err(DataError::AllValuesEqual { variable: self.name.clone() });
        }

        let (up_only, down_only) = self.trend_flags();

        self.min = min;
        self.max = max;
        self.range = range;
        self.overall_mean = mean_total / self.observation_count as f64;
        self.up_only = up_only;
        self.down_only = down_only;
        self.calculated = true;

        log::debug!(
            "behavior '{}': min {} max {} range {} overall mean {:.4}",
            self.name, self.min, self.max, self.range, self.overall_mean
        );
        Ok(())
    }

    /// Per-period up-only / down-only flags over actors observed at both
    /// ends of the period.
    fn trend_flags(&self) -> (Vec<bool>, Vec<bool>) {
        let periods = self.observation_count.saturating_sub(1);
        let mut up_only = vec![true; periods];
        let mut down_only = vec![true; periods];

        for period in 0..periods {
            for actor in self.actor_set.actor_ids() {
                if self.is_missing(period, actor) || self.is_missing(period + 1, actor) {
                    continue;
                }
                let before = self.value(period, actor);
                let after = self.value(period + 1, actor);
                if after < before {
                    up_only[period] = false;
                }
                if after > before {
                    down_only[period] = false;
                }
            }
        }

        (up_only, down_only)
    }
}

impl LongitudinalData for BehaviorLongitudinalData {
    fn id(&self) -> VariableId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn actor_set(&self) -> &Arc<ActorSet> {
        &self.actor_set
    }

    fn observation_count(&self) -> usize {
        self.observation_count
    }
}
