//! Hand feasibility scan.
//!
//! Finds a recipe some subset of a hand can make, and which card instances
//! that subset is. Drives the hint button (auto-select the ids) and the
//! scripted opponent (synthesize the first thing it can).

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::entity::EntityId;
use crate::recipes::{Recipe, RecipeCatalog};

/// A recipe the hand can make, with the card ids it would consume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeasibleRecipe<'a> {
    pub recipe: &'a Recipe,
    /// Element card ids in recipe input order, then the condition card id.
    pub consumed: SmallVec<[EntityId; 6]>,
}

/// Try to satisfy one recipe from `hand`.
///
/// Each required element takes the first unused element card carrying it,
/// so one card never fills two slots. The condition is looked up in the
/// full hand; condition cards never compete with element slots.
#[must_use]
pub fn consume_for(recipe: &Recipe, hand: &[Card]) -> Option<SmallVec<[EntityId; 6]>> {
    let mut remaining: SmallVec<[&Card; 12]> = hand.iter().collect();
    let mut consumed: SmallVec<[EntityId; 6]> = SmallVec::new();

    for &needed in &recipe.inputs {
        let pos = remaining
            .iter()
            .position(|card| card.element_token() == Some(needed))?;
        consumed.push(remaining.remove(pos).id);
    }

    if let Some(required) = recipe.condition {
        let card = hand
            .iter()
            .find(|card| card.condition_token() == Some(required))?;
        consumed.push(card.id);
    }

    Some(consumed)
}

/// First recipe in catalog order that `hand` can make.
///
/// ```
/// use elemental_synth::cards::CardFactory;
/// use elemental_synth::core::{Condition, Element};
/// use elemental_synth::recipes::RecipeCatalog;
/// use elemental_synth::synthesis::find_feasible_recipe;
///
/// let mut factory = CardFactory::new();
/// let hand = vec![
///     factory.element_card(Element::Ag),
///     factory.element_card(Element::Cl),
///     factory.element_card(Element::Na),
///     factory.condition_card(Condition::Heat),
/// ];
///
/// let catalog = RecipeCatalog::standard();
/// let found = find_feasible_recipe(&catalog, &hand).unwrap();
/// assert_eq!(found.recipe.result.formula, "AgCl");
/// assert_eq!(found.consumed.as_slice(), &[hand[0].id, hand[1].id]);
/// ```
#[must_use]
pub fn find_feasible_recipe<'a>(catalog: &'a RecipeCatalog, hand: &[Card]) -> Option<FeasibleRecipe<'a>> {
    catalog.iter().find_map(|recipe| {
        consume_for(recipe, hand).map(|consumed| FeasibleRecipe { recipe, consumed })
    })
}

/// Every recipe `hand` can make, in catalog order.
pub fn feasible_recipes<'a, 'h>(
    catalog: &'a RecipeCatalog,
    hand: &'h [Card],
) -> impl Iterator<Item = FeasibleRecipe<'a>> + 'h
where
    'a: 'h,
{
    catalog.iter().filter_map(move |recipe| {
        consume_for(recipe, hand).map(|consumed| FeasibleRecipe { recipe, consumed })
    })
}

/// Whether adding `candidate` turns a hand with no feasible recipe into
/// one with a feasible recipe. Draw-biasing hosts use this to pick helpful
/// cards.
#[must_use]
pub fn enables_recipe(catalog: &RecipeCatalog, hand: &[Card], candidate: &Card) -> bool {
    if find_feasible_recipe(catalog, hand).is_some() {
        return false;
    }
    let mut extended = hand.to_vec();
    extended.push(candidate.clone());
    find_feasible_recipe(catalog, &extended).is_some()
}
