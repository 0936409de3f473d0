//! `saom-eval`: the surface a simulation or estimation driver calls.
//!
//! # Evaluation model
//!
//! ```text
//! EvaluatorBuilder::new(config, &data)      ← data already calculated and centered
//!     .network(net) .effect(e) ...
//!     .build()?                             ← validates sizes, names, period
//!
//! per micro-step:
//!   change_contributions(actor)  → for d in {-1, 0, +1}: permitted?, Δ per effect
//!   apply_change(actor, d)       → mutate the current behavior state
//!
//! per statistic evaluation:
//!   statistics()                 → Σ_i ego_statistic(i) per effect
//!                                  (parallel over actors with `parallel`)
//! ```
//!
//! The evaluator borrows the data object immutably for its whole lifetime,
//! so loading and centering must be finished before it is built.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-actor ego statistics on Rayon.            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on reports.          |

pub mod builder;
pub mod error;
pub mod evaluator;
pub mod moves;
pub mod report;

#[cfg(test)]
mod tests;

pub use builder::EvaluatorBuilder;
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use moves::{ActorMoves, CANDIDATE_DIFFERENCES, CandidateMove};
pub use report::{EffectStatistic, StatisticsReport};
