//! `saom-effects`: behavior effects and the contract they share.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`effect`]     | `BehaviorEffect` trait                                      |
//! | [`context`]    | `EffectContext<'a>`: read-only evaluation snapshot         |
//! | [`info`]       | `EffectInfo`: effect name and network metadata             |
//! | [`shape`]      | `LinearShapeEffect`, `QuadraticShapeEffect`                 |
//! | [`alter`]      | `AlterEffect` (average / total alter)                       |
//! | [`max_alter`]  | `MaxAlterEffect` (maximum / minimum alter)                  |
//! | [`similarity`] | `AverageSimilarityEffect`                                   |
//! | [`factory`]    | `create_effect`: effect name → boxed effect                |
//! | [`error`]      | `EffectError`, `EffectResult<T>`                            |
//!
//! # Design notes
//!
//! Every effect answers two questions about an actor:
//!
//! 1. **Change contribution**: how much would this effect's statistic move
//!    if the actor changed its behavior by `difference`?  Called once per
//!    candidate micro-step, so it reads centered values straight from the
//!    [`EffectContext`] and never allocates.
//! 2. **Ego statistic**: the actor's share of the effect's statistic for a
//!    complete, caller-supplied assignment of (centered) values.
//!
//! Effects hold only construction-time configuration.  They are
//! `Send + Sync` and can be evaluated for many actors in any order, or in
//! parallel, as long as nobody mutates the data behind the context.

pub mod alter;
pub mod context;
pub mod effect;
pub mod error;
pub mod factory;
pub mod info;
pub mod max_alter;
pub mod shape;
pub mod similarity;


pub use alter::{AlterAggregate, AlterEffect};
pub use context::EffectContext;
pub use effect::BehaviorEffect;
pub use error::{EffectError, EffectResult};
pub use factory::create_effect;
pub use info::EffectInfo;
pub use max_alter::MaxAlterEffect;
pub use shape::{LinearShapeEffect, QuadraticShapeEffect};
pub use similarity::AverageSimilarityEffect;
