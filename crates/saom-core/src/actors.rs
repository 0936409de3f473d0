//! The actor universe shared by every variable observed on the same actors.

use crate::ActorId;

/// An ordered set of `n` actors.
///
/// Variables and networks only ever ask for the actor count; identities are
/// the dense indices `ActorId(0) .. ActorId(n - 1)`.  Typically wrapped in an
/// `Arc` and shared by all behavior variables and networks of one data set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSet {
    name: String,
    n:    usize,
}

impl ActorSet {
    pub fn new(name: impl Into<String>, n: usize) -> Self {
        Self { name: name.into(), n }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of actors.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `true` if `actor` indexes into this set.
    #[inline]
    pub fn contains(&self, actor: ActorId) -> bool {
        actor.index() < self.n
    }

    /// Iterator over all `ActorId`s in ascending index order.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        (0..self.n as u32).map(ActorId)
    }
}
