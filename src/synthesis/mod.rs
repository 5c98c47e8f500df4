//! Recipe matching: the pure core of the game.
//!
//! Everything here is a synchronous function of its input snapshot. Absence
//! of a match is `None`, never an error.
//!
//! ## Operations
//!
//! - `multiset_equal`: Order-independent token comparison
//! - `matches_recipe_exactly`: Which recipe a selection forms, if any
//! - `find_feasible_recipe`: Which recipe a hand can make, and with which cards
//! - `hint_text`: What the closest unfinished recipe still needs

pub mod multiset;
pub mod checker;
pub mod scanner;
pub mod hint;

pub use multiset::multiset_equal;
pub use checker::{matches_recipe_exactly, SelectionTokens};
pub use scanner::{consume_for, enables_recipe, feasible_recipes, find_feasible_recipe, FeasibleRecipe};
pub use hint::{closest_recipe, completion_score, guidance_text, hint_text, progress_toward, Progress};
