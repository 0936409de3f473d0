//! `saom-network`: dependency networks and their tie iteration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Network` (CSR out-adjacency), `NetworkBuilder`, `IncidentTie` |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`                   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! Behavior effects only ever ask two things of a network: an actor's
//! out-degree and the alters at the far end of its outgoing ties.  Both are
//! answered from a contiguous slice, so the per-actor evaluation loop never
//! allocates.

pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{IncidentTie, Network, NetworkBuilder};
