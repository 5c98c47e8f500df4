//! Duel configuration parameters.

use serde::{Deserialize, Serialize};

/// Duel configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Health each side starts with.
    pub starting_hp: i64,

    /// Health cap.
    pub max_hp: i64,

    /// Opening hand size. Dealing is done by the host.
    pub starting_hand_size: usize,

    /// Cards drawn at the start of each turn after the first.
    pub cards_per_draw: usize,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            starting_hp: 200,
            max_hp: 200,
            starting_hand_size: 6,
            cards_per_draw: 2,
        }
    }
}

impl DuelConfig {
    /// Set starting health (also raises the cap if needed).
    pub fn with_starting_hp(mut self, hp: i64) -> Self {
        self.starting_hp = hp;
        self.max_hp = self.max_hp.max(hp);
        self
    }

    /// Set the opening hand size.
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the per-turn draw count.
    pub fn with_cards_per_draw(mut self, count: usize) -> Self {
        self.cards_per_draw = count;
        self
    }
}
