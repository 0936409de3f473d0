//! `saom-data`: observed behavior variables and their derived statistics.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`longitudinal`] | `LongitudinalData` trait (id, name, actors, observations) |
//! | [`behavior`]     | `BehaviorLongitudinalData`: value/missing/structural planes, min/max/mean/range, similarity |
//! | [`centering`]    | Similarity centering constants computed from the observations |
//! | [`builder`]      | `BehaviorDataBuilder` (loading phase → ready data object) |
//! | [`loader`]       | `load_behavior_csv`, `load_behavior_reader`               |
//! | [`error`]        | `DataError`, `DataResult<T>`                              |
//!
//! # Lifecycle
//!
//! 1. **Loading**: cells are written through [`BehaviorDataBuilder`] (or the
//!    `set_*` methods directly).
//! 2. **Derivation**: [`BehaviorLongitudinalData::calculate_properties`] scans
//!    the planes once and fixes min, max, overall mean, range, and the
//!    per-period trend flags.  Centering constants are set afterwards.
//! 3. **Evaluation**: effects and the evaluator only hold `&BehaviorLongitudinalData`,
//!    so nothing can mutate the planes while statistics are computed.

pub mod behavior;
pub mod builder;
pub mod centering;
pub mod error;
pub mod loader;
pub mod longitudinal;


pub use behavior::BehaviorLongitudinalData;
pub use builder::BehaviorDataBuilder;
pub use error::{DataError, DataResult};
pub use loader::{load_behavior_csv, load_behavior_reader};
pub use longitudinal::LongitudinalData;
