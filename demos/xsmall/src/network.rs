//! Friendship network of the xsmall classroom.
//!
//! Two friendship groups of four pupils joined by a single tie (3 → 4).
//! Pupil 7 names nobody.

use saom_core::ActorId;
use saom_network::{Network, NetworkBuilder, NetworkResult};

/// Network name the alter effects refer to.
pub const FRIENDSHIP: &str = "friendship";

/// Build the 8-pupil friendship network.
pub fn build_network(n: usize) -> NetworkResult<Network> {
    let mut b = NetworkBuilder::with_capacity(FRIENDSHIP, n, 14);

    // Group A: pupils 0-3, mostly reciprocated.
    for (ego, alter) in [(0, 1), (1, 0), (0, 2), (2, 0), (1, 3), (3, 1), (2, 3)] {
        b.add_tie(ActorId(ego), ActorId(alter));
    }
    // Bridge.
    b.add_tie(ActorId(3), ActorId(4));
    // Group B: pupils 4-6.
    for (ego, alter) in [(4, 5), (5, 4), (5, 6), (6, 5), (6, 4), (4, 7)] {
        b.add_tie(ActorId(ego), ActorId(alter));
    }

    b.build()
}
