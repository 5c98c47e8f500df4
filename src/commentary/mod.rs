//! Narrative commentary on syntheses.
//!
//! Flavor text comes from an injected `Commentator`. Hosts may back it with
//! a text-generation service; the duel never depends on that succeeding,
//! because [`narrate`] falls back to the recipe's static explanation.

use thiserror::Error;
use tracing::warn;

use crate::recipes::Recipe;

/// Why a commentator produced nothing.
#[derive(Debug, Error)]
pub enum CommentaryError {
    #[error("commentary service unavailable")]
    Unavailable,

    #[error("commentary request failed: {0}")]
    Failed(String),
}

/// Source of flavor text.
pub trait Commentator {
    /// One-line remark on a completed synthesis.
    fn commentary(&self, recipe: &Recipe, turn: u32) -> Result<String, CommentaryError>;

    /// Short taunt for an opponent action. Empty by default.
    fn opponent_remark(&self, _action: &str) -> Result<String, CommentaryError> {
        Ok(String::new())
    }
}

/// Returns each recipe's built-in explanation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCommentary;

impl Commentator for StaticCommentary {
    fn commentary(&self, recipe: &Recipe, _turn: u32) -> Result<String, CommentaryError> {
        Ok(recipe.explanation.clone())
    }
}

/// Commentary for `recipe`, falling back to its explanation on failure or
/// empty output.
pub fn narrate(commentator: &dyn Commentator, recipe: &Recipe, turn: u32) -> String {
    match commentator.commentary(recipe, turn) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => recipe.explanation.clone(),
        Err(err) => {
            warn!(error = %err, formula = %recipe.result.formula, "commentary failed, using explanation");
            recipe.explanation.clone()
        }
    }
}

/// Opponent remark, or an empty string on failure.
pub fn opponent_remark(commentator: &dyn Commentator, action: &str) -> String {
    commentator.opponent_remark(action).unwrap_or_else(|err| {
        warn!(error = %err, "opponent remark failed");
        String::new()
    })
}
