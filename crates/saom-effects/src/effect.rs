//! The `BehaviorEffect` trait.

use saom_core::ActorId;

use crate::{EffectContext, EffectInfo};

/// One term of a behavior objective function.
///
/// # Contract
///
/// - [`change_contribution`](Self::change_contribution) returns exactly 0
///   for `difference == 0` whenever the statistic is linear in the ego's own
///   value.
/// - Neither method fails.  An actor without alters yields 0, not an error.
/// - Indices are caller preconditions; `current_values` has one entry per
///   actor.
///
/// # Thread safety
///
/// Implementations hold only fixed configuration, so they must be
/// `Send + Sync`; the evaluator may call them for many actors in parallel.
pub trait BehaviorEffect: Send + Sync {
    fn info(&self) -> &EffectInfo;

    /// Change in this effect's statistic if `actor` changed its behavior by
    /// `difference` from the state in `ctx`.
    fn change_contribution(&self, actor: ActorId, difference: i32, ctx: &EffectContext<'_>) -> f64;

    /// This effect's statistic for `ego`, given a full assignment of
    /// (usually centered) values to all actors.
    fn ego_statistic(&self, ego: ActorId, current_values: &[f64], ctx: &EffectContext<'_>) -> f64;

    /// Short effect name from the metadata.
    fn name(&self) -> &str {
        &self.info().effect_name
    }
}
