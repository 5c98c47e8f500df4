//! Error type for the fallible, state-changing operations.
//!
//! The matching core is total and reports absence with `Option`. Errors
//! only arise when applying a decision to game state or loading data.

use thiserror::Error;

use super::entity::EntityId;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("card {0} is not in the hand")]
    CardNotInHand(EntityId),

    #[error("card {0} was selected more than once")]
    DuplicateCard(EntityId),

    #[error("selected cards do not match any recipe")]
    NoMatchingRecipe,

    #[error("recipe #{index} is invalid: {reason}")]
    InvalidRecipe { index: usize, reason: String },

    #[error("malformed data: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    #[error("the duel is already over")]
    GameOver,

    #[error("no entity ids left to allocate")]
    IdsExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SynthError::CardNotInHand(EntityId(7)).to_string(),
            "card Entity(7) is not in the hand"
        );
        let err = SynthError::InvalidRecipe {
            index: 2,
            reason: "no inputs".to_string(),
        };
        assert_eq!(err.to_string(), "recipe #2 is invalid: no inputs");
    }
}
