//! Exact synthesis check for a selected set of cards.

use smallvec::SmallVec;

use super::multiset::multiset_equal;
use crate::cards::Card;
use crate::core::token::{Condition, Element};
use crate::recipes::{Recipe, RecipeCatalog};

/// Element and condition tokens pulled out of a card selection.
///
/// Cards whose payload doesn't fit their category contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionTokens {
    pub elements: SmallVec<[Element; 8]>,
    pub conditions: SmallVec<[Condition; 2]>,
}

impl SelectionTokens {
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut tokens = Self::default();
        for card in cards {
            if let Some(element) = card.element_token() {
                tokens.elements.push(element);
            } else if let Some(condition) = card.condition_token() {
                tokens.conditions.push(condition);
            }
        }
        tokens
    }

    #[must_use]
    pub fn has_condition(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    /// Whether these tokens form `recipe` exactly.
    ///
    /// Elements must match as a multiset, so extra or missing elements both
    /// disqualify. A required condition must be present; a contact reaction
    /// accepts any conditions that happen to be selected.
    #[must_use]
    pub fn satisfies(&self, recipe: &Recipe) -> bool {
        if !multiset_equal(&recipe.inputs, &self.elements) {
            return false;
        }
        match recipe.condition {
            Some(required) => self.has_condition(required),
            None => true,
        }
    }
}

/// Find the recipe the selection forms exactly, first match in catalog order.
///
/// ```
/// use elemental_synth::cards::CardFactory;
/// use elemental_synth::core::{Condition, Element};
/// use elemental_synth::recipes::RecipeCatalog;
/// use elemental_synth::synthesis::matches_recipe_exactly;
///
/// let mut factory = CardFactory::new();
/// let selection = vec![
///     factory.element_card(Element::H),
///     factory.element_card(Element::Cl),
///     factory.condition_card(Condition::Heat),
/// ];
///
/// let catalog = RecipeCatalog::standard();
/// let recipe = matches_recipe_exactly(&catalog, &selection).unwrap();
/// assert_eq!(recipe.result.formula, "HCl");
/// ```
#[must_use]
pub fn matches_recipe_exactly<'a>(catalog: &'a RecipeCatalog, selection: &[Card]) -> Option<&'a Recipe> {
    let tokens = SelectionTokens::from_cards(selection);
    catalog.iter().find(|recipe| tokens.satisfies(recipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCategory, CardFactory};
    use crate::recipes::{MoleculeRole, MoleculeTemplate};
    use crate::core::token::Element::{Ag, Cl, Fe, Na, H, O, S};

    fn cards(elements: &[Element], conditions: &[Condition]) -> Vec<Card> {
        let mut factory = CardFactory::new();
        let mut out: Vec<Card> = elements.iter().map(|&e| factory.element_card(e)).collect();
        out.extend(conditions.iter().map(|&c| factory.condition_card(c)));
        out
    }

    fn check(elements: &[Element], conditions: &[Condition]) -> Option<String> {
        let catalog = RecipeCatalog::standard();
        matches_recipe_exactly(&catalog, &cards(elements, conditions)).map(|r| r.result.formula.clone())
    }

    #[test]
    fn test_spark_gates_steam_blast() {
        assert_eq!(check(&[H, H, O], &[Condition::Spark]).as_deref(), Some("H₂O"));
        assert_eq!(check(&[H, O, H], &[Condition::Spark]).as_deref(), Some("H₂O"));
        assert_eq!(check(&[H, H, O], &[Condition::Heat]), None);
        assert_eq!(check(&[H, H, O], &[]), None);
    }

    #[test]
    fn test_steam_blast_result() {
        let catalog = RecipeCatalog::standard();
        let recipe = matches_recipe_exactly(&catalog, &cards(&[H, H, O], &[Condition::Spark])).unwrap();
        assert_eq!(recipe.result.power, 40);
        assert_eq!(recipe.result.role, MoleculeRole::Attacker);
    }

    #[test]
    fn test_contact_reaction_ignores_conditions() {
        assert_eq!(check(&[H, Cl], &[]).as_deref(), Some("HCl"));
        assert_eq!(check(&[H, Cl], &[Condition::Heat]).as_deref(), Some("HCl"));
        assert_eq!(check(&[Cl, Ag], &[Condition::Water, Condition::Spark]).as_deref(), Some("AgCl"));
    }

    #[test]
    fn test_extra_element_rejects() {
        assert_eq!(check(&[H, Cl, Fe], &[]), None);
        assert_eq!(check(&[Na, Na], &[Condition::Water]), None);
        assert_eq!(check(&[Fe, S, S], &[Condition::Heat]), None);
    }

    #[test]
    fn test_missing_element_rejects() {
        assert_eq!(check(&[H, O], &[Condition::Spark]), None);
        assert_eq!(check(&[], &[Condition::Water]), None);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(check(&[], &[]), None);
    }

    #[test]
    fn test_malformed_cards_are_ignored() {
        let mut selection = cards(&[H, Cl], &[]);
        let mut broken = Card::condition(crate::core::EntityId(500), "?", Condition::Heat);
        broken.condition = None;
        selection.push(broken);

        let mut support = Card::element(crate::core::EntityId(501), "?", Fe);
        support.category = CardCategory::Support;
        selection.push(support);

        let catalog = RecipeCatalog::standard();
        assert_eq!(
            matches_recipe_exactly(&catalog, &selection).map(|r| r.result.formula.as_str()),
            Some("HCl")
        );
    }

    #[test]
    fn test_first_match_wins() {
        let first = Recipe::new([H, Cl], None, MoleculeTemplate::new("first", "A", MoleculeRole::Attacker, 1));
        let second = Recipe::new([Cl, H], None, MoleculeTemplate::new("second", "B", MoleculeRole::Attacker, 2));
        let catalog = RecipeCatalog::new(vec![first, second]).unwrap();

        let recipe = matches_recipe_exactly(&catalog, &cards(&[H, Cl], &[])).unwrap();
        assert_eq!(recipe.result.name, "first");
    }

    #[test]
    fn test_selection_tokens() {
        let tokens = SelectionTokens::from_cards(&cards(&[H, O], &[Condition::Spark]));
        assert_eq!(tokens.elements.as_slice(), &[H, O]);
        assert!(tokens.has_condition(Condition::Spark));
        assert!(!tokens.has_condition(Condition::Heat));
    }
}
