//! # elemental-synth
//!
//! Recipe-matching core for a chemistry-themed card duel.
//!
//! Players hold element cards (H, O, Na, ...) and condition cards (heat,
//! spark, water). Selecting the right multiset of cards synthesizes a
//! molecule that fights on the player's side.
//!
//! ## Design Principles
//!
//! 1. **Pure Matching**: Recipe matching, feasibility scanning and hints are
//!    synchronous functions of a hand snapshot. They never mutate state and
//!    report "nothing found" as `None`.
//!
//! 2. **Ordered Catalog**: Recipes are checked in catalog order and the first
//!    match wins. Hosts get reproducible answers for the same hand.
//!
//! 3. **Data Over Code**: Recipes, card sets and display labels are plain
//!    serde data. The built-in set is just the default.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Hands, fields and the game log use
//!   `im-rs` so snapshots are O(1).
//!
//! - **Injected Commentary**: Flavor text comes from a `Commentator`. A
//!   failing commentator falls back to static explanations.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, element and condition tokens, labels, config, errors
//! - `cards`: Card instances, templates and hands
//! - `recipes`: Recipe definitions and the ordered catalog
//! - `synthesis`: Exact matching, feasibility scan, hints
//! - `battle`: Molecules, combat and the duel state machine
//! - `commentary`: Commentator trait and fallbacks

pub mod core;
pub mod cards;
pub mod recipes;
pub mod synthesis;
pub mod battle;
pub mod commentary;

// Re-export commonly used types
pub use crate::core::{
    EntityId, EntityAllocator,
    Element, Condition,
    DisplayLabels, Messages,
    DuelConfig, SynthError,
};

pub use crate::cards::{Card, CardCategory, CardFactory, CardTemplate, Hand};

pub use crate::recipes::{MoleculeRole, MoleculeTemplate, Recipe, RecipeCatalog, SpecialEffect};

pub use crate::synthesis::{
    multiset_equal, matches_recipe_exactly,
    find_feasible_recipe, feasible_recipes, FeasibleRecipe,
    hint_text, guidance_text, closest_recipe, Progress,
};

pub use crate::battle::{
    Molecule, PlayerState, Side,
    calculate_damage, AttackReport,
    LogEntry, LogKind,
    Duel, DuelResult,
};

pub use crate::commentary::{Commentator, CommentaryError, StaticCommentary};
