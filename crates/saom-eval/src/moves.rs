//! Candidate micro-steps of one actor.

use saom_core::ActorId;

/// Behavior changes considered in one micro-step: down one, stay, up one.
pub const CANDIDATE_DIFFERENCES: [i32; 3] = [-1, 0, 1];

/// One candidate change of an actor's behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateMove {
    pub difference: i32,

    /// `false` if the change would leave the observed range, the value is
    /// structurally determined, or the period's trend forbids it.
    pub permitted: bool,

    /// Change contribution of every effect, in evaluator order.
    pub contributions: Vec<f64>,
}

/// All candidate moves of one actor, ordered as [`CANDIDATE_DIFFERENCES`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActorMoves {
    pub actor: ActorId,
    pub moves: Vec<CandidateMove>,
}

impl ActorMoves {
    /// The move with the given `difference`, if it is a candidate.
    pub fn get(&self, difference: i32) -> Option<&CandidateMove> {
        self.moves.iter().find(|m| m.difference == difference)
    }

    /// Moves the actor may actually make.
    pub fn permitted(&self) -> impl Iterator<Item = &CandidateMove> + '_ {
        self.moves.iter().filter(|m| m.permitted)
    }
}
