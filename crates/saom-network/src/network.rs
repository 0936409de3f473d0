//! One-mode network representation and builder.
//!
//! # Data layout
//!
//! Outgoing ties are stored in **Compressed Sparse Row (CSR)** format.  Given
//! an `ActorId a`, its outgoing ties occupy the slice:
//!
//! ```text
//! tie_to[ out_start[a] .. out_start[a+1] ]
//! ```
//!
//! Ties are sorted by `(ego, alter)`, so iterating an actor's ties visits its
//! alters in ascending id order.  The order is fixed at build time and is
//! identical on every pass, which keeps tie-breaking in effects reproducible.

use saom_core::ActorId;

use crate::{NetworkError, NetworkResult};

// ── IncidentTie ───────────────────────────────────────────────────────────────

/// One outgoing tie as seen from its ego.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IncidentTie {
    /// The alter at the far end of the tie.
    pub actor: ActorId,
    /// Tie value; 1 for dichotomous networks.
    pub value: i32,
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Directed one-mode network over `n` actors in CSR format.
///
/// Do not construct directly; use [`NetworkBuilder`].
#[derive(Clone, Debug)]
pub struct Network {
    name: String,
    n:    usize,

    /// CSR row pointer.  Length = `n + 1`.
    out_start: Vec<u32>,

    /// Alter of each tie, grouped by ego.
    tie_to: Vec<ActorId>,

    /// Value of each tie, parallel to `tie_to`.
    tie_value: Vec<i32>,
}

impl Network {
    /// A network over `n` actors without any ties.
    pub fn empty(name: impl Into<String>, n: usize) -> Self {
        Self {
            name:      name.into(),
            n,
            out_start: vec![0; n + 1],
            tie_to:    Vec::new(),
            tie_value: Vec::new(),
        }
    }

    /// Name under which behavior data stores this network's centering
    /// constant.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of actors.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn tie_count(&self) -> usize {
        self.tie_to.len()
    }

    // ── Tie traversal ─────────────────────────────────────────────────────

    /// Number of outgoing ties of `actor`.
    #[inline]
    pub fn out_degree(&self, actor: ActorId) -> usize {
        let start = self.out_start[actor.index()] as usize;
        let end   = self.out_start[actor.index() + 1] as usize;
        end - start
    }

    /// Outgoing ties of `actor` in ascending alter order.
    #[inline]
    pub fn out_ties(&self, actor: ActorId) -> impl ExactSizeIterator<Item = IncidentTie> + '_ {
        let start = self.out_start[actor.index()] as usize;
        let end   = self.out_start[actor.index() + 1] as usize;
        self.tie_to[start..end]
            .iter()
            .zip(&self.tie_value[start..end])
            .map(|(&actor, &value)| IncidentTie { actor, value })
    }

    /// Alters of `actor` as a contiguous slice.
    #[inline]
    pub fn alters(&self, actor: ActorId) -> &[ActorId] {
        let start = self.out_start[actor.index()] as usize;
        let end   = self.out_start[actor.index() + 1] as usize;
        &self.tie_to[start..end]
    }

    /// `true` if the tie `ego -> alter` is present.
    pub fn has_tie(&self, ego: ActorId, alter: ActorId) -> bool {
        self.alters(ego).binary_search(&alter).is_ok()
    }

    /// Iterator over every tie as `(ego, tie)`, ordered by ego then alter.
    pub fn ties(&self) -> impl Iterator<Item = (ActorId, IncidentTie)> + '_ {
        (0..self.n as u32)
            .map(ActorId)
            .flat_map(move |ego| self.out_ties(ego).map(move |tie| (ego, tie)))
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// Ties may be added in any order; `build()` sorts them and constructs the
/// CSR arrays.
///
/// # Example
///
/// ```
/// use saom_core::ActorId;
/// use saom_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new("friendship", 3);
/// b.add_tie(ActorId(0), ActorId(2));
/// b.add_tie(ActorId(0), ActorId(1));
/// let net = b.build().unwrap();
/// assert_eq!(net.out_degree(ActorId(0)), 2);
/// assert_eq!(net.alters(ActorId(0)), &[ActorId(1), ActorId(2)]);
/// ```
pub struct NetworkBuilder {
    name:     String,
    n:        usize,
    raw_ties: Vec<RawTie>,
}

struct RawTie {
    ego:   ActorId,
    alter: ActorId,
    value: i32,
}

impl NetworkBuilder {
    pub fn new(name: impl Into<String>, n: usize) -> Self {
        Self { name: name.into(), n, raw_ties: Vec::new() }
    }

    /// Pre-allocate for the expected number of ties.
    pub fn with_capacity(name: impl Into<String>, n: usize, ties: usize) -> Self {
        Self { name: name.into(), n, raw_ties: Vec::with_capacity(ties) }
    }

    /// Add a dichotomous tie `ego -> alter` (value 1).
    pub fn add_tie(&mut self, ego: ActorId, alter: ActorId) {
        self.add_valued_tie(ego, alter, 1);
    }

    /// Add a tie `ego -> alter` carrying `value`.
    pub fn add_valued_tie(&mut self, ego: ActorId, alter: ActorId, value: i32) {
        self.raw_ties.push(RawTie { ego, alter, value });
    }

    pub fn tie_count(&self) -> usize {
        self.raw_ties.len()
    }

    /// Validate the ties and produce a [`Network`].
    ///
    /// Fails on endpoints outside `0..n`, self ties, and repeated ties.
    pub fn build(self) -> NetworkResult<Network> {
        let n = self.n;
        let mut raw = self.raw_ties;

        for t in &raw {
            for actor in [t.ego, t.alter] {
                if actor.index() >= n {
                    return Err(NetworkError::ActorOutOfRange {
                        network: self.name,
                        actor,
                        n,
                    });
                }
            }
            if t.ego == t.alter {
                return Err(NetworkError::SelfTie { network: self.name, actor: t.ego });
            }
        }

        raw.sort_unstable_by_key(|t| (t.ego, t.alter));
        if let Some(pair) = raw
            .windows(2)
            .find(|w| w[0].ego == w[1].ego && w[0].alter == w[1].alter)
        {
            return Err(NetworkError::DuplicateTie {
                network: self.name,
                ego:     pair[0].ego,
                alter:   pair[0].alter,
            });
        }

        let tie_to:    Vec<ActorId> = raw.iter().map(|t| t.alter).collect();
        let tie_value: Vec<i32>     = raw.iter().map(|t| t.value).collect();

        let mut out_start = vec![0u32; n + 1];
        for t in &raw {
            out_start[t.ego.index() + 1] += 1;
        }
        for i in 1..=n {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[n] as usize, tie_to.len());

        log::debug!("network '{}': {} actors, {} ties", self.name, n, tie_to.len());

        Ok(Network { name: self.name, n, out_start, tie_to, tie_value })
    }
}
