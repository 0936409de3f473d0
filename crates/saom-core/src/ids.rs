//! Typed indices for actors and longitudinal variables.
//!
//! Both are plain positions: an `ActorId` is the row of an actor in every
//! dense per-actor plane, a `VariableId` the registration order of a
//! variable.  The inner integer is `pub` so tests and loaders can write
//! `ActorId(3)`.

use std::fmt;

/// Declare a `u32` position newtype that displays as `"<label> <n>"`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident, $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Position as a slice index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The id at position `index`; `None` past `u32::MAX`.
            pub fn from_index(index: usize) -> Option<Self> {
                u32::try_from(index).ok().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Position of an actor in its [`ActorSet`](crate::ActorSet).
    ActorId, "actor"
}

typed_id! {
    /// Identifier of a longitudinal variable.
    VariableId, "variable"
}
