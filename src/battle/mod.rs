//! Duel rules: molecules, combat, per-side state, and the duel itself.
//!
//! The matching core decides *what* can be synthesized; this module applies
//! those decisions to game state.

pub mod molecule;
pub mod player;
pub mod combat;
pub mod log;
pub mod duel;

pub use molecule::Molecule;
pub use player::{PlayerState, Side};
pub use combat::{calculate_damage, resolve_attacks, AttackReport};
pub use log::{LogEntry, LogKind};
pub use duel::{Duel, DuelResult};
