//! `saom-core`: foundational types for the `saom` behavior statistic engine.
//!
//! This crate is a dependency of every other `saom-*` crate.  It has no
//! `saom-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `ActorId`, `VariableId`                               |
//! | [`actors`]  | `ActorSet`: the ordered actor universe               |
//! | [`config`]  | `EvalConfig`                                          |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod actors;
pub mod config;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use actors::ActorSet;
pub use config::EvalConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ActorId, VariableId};
