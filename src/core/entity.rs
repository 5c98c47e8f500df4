//! Entity identification for cards and molecules.
//!
//! Every drawable card and every synthesized molecule has a unique
//! `EntityId`. Two cards carrying the same element are interchangeable for
//! recipe matching, but they keep distinct ids so a synthesis can remove
//! exactly the instances that were selected.
//!
//! ## Usage
//!
//! ```
//! use elemental_synth::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(a, EntityId(0));
//! ```

use serde::{Deserialize, Serialize};

use super::error::SynthError;

/// Unique identifier for a card or molecule instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic id source.
///
/// Ids are never reused within one allocator, so a molecule minted after a
/// synthesis can't collide with a card still sitting in a hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocate the next id, or fail once the id space is used up.
    ///
    /// `u32::MAX` is never handed out.
    pub fn try_alloc(&mut self) -> Result<EntityId, SynthError> {
        let following = self.next.checked_add(1).ok_or(SynthError::IdsExhausted)?;
        let id = EntityId(self.next);
        self.next = following;
        Ok(id)
    }

    /// Allocate the next id.
    ///
    /// # Panics
    ///
    /// Panics once the id space is used up. Long-lived owners such as a
    /// duel use [`try_alloc`](Self::try_alloc) instead.
    pub fn alloc(&mut self) -> EntityId {
        match self.try_alloc() {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Peek at the id the next `alloc` call will return.
    #[must_use]
    pub fn peek(&self) -> EntityId {
        EntityId(self.next)
    }
}
