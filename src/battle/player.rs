//! Per-side duel state.
//!
//! ## Side
//!
//! A duel is always the player against one scripted opponent.
//!
//! ## PlayerState
//!
//! Health, shield, stun flag, hand and field for one side. Hands and fields
//! are persistent vectors so the whole state clones in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::molecule::Molecule;
use crate::cards::Hand;
use crate::core::config::DuelConfig;

/// One of the two duel participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Opponent => f.write_str("Opponent"),
        }
    }
}

/// State of one duel side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hp: i64,
    pub max_hp: i64,
    pub hand: Hand,
    /// Synthesized units, in synthesis order.
    pub molecules: Vector<Molecule>,
    pub is_stunned: bool,
    /// Absorbs incoming damage; reset at the start of each own turn.
    pub shield: i64,
}

impl PlayerState {
    #[must_use]
    pub fn new(config: &DuelConfig) -> Self {
        Self {
            hp: config.starting_hp,
            max_hp: config.max_hp,
            hand: Hand::new(),
            molecules: Vector::new(),
            is_stunned: false,
            shield: 0,
        }
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Field molecules that deal damage.
    pub fn attackers(&self) -> impl Iterator<Item = &Molecule> {
        self.molecules.iter().filter(|m| m.is_attacker())
    }

    /// Take damage, flooring health at 0.
    pub fn take_damage(&mut self, amount: i64) {
        self.hp = (self.hp - amount).max(0);
    }
}
