//! Synthesized battle units.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::recipes::{MoleculeRole, Recipe, SpecialEffect};

/// A molecule on a player's field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molecule {
    pub id: EntityId,
    pub name: String,
    pub formula: String,
    pub role: MoleculeRole,
    pub power: i64,
    pub effect_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_effect: Option<SpecialEffect>,
}

impl Molecule {
    /// Instantiate a recipe's result with a fresh id.
    #[must_use]
    pub fn from_recipe(recipe: &Recipe, id: EntityId) -> Self {
        let t = &recipe.result;
        Self {
            id,
            name: t.name.clone(),
            formula: t.formula.clone(),
            role: t.role,
            power: t.power,
            effect_description: t.effect_description.clone(),
            special_effect: t.special_effect,
        }
    }

    #[must_use]
    pub fn is_attacker(&self) -> bool {
        self.role == MoleculeRole::Attacker
    }

    #[must_use]
    pub fn has_effect(&self, effect: SpecialEffect) -> bool {
        self.special_effect == Some(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::RecipeCatalog;

    #[test]
    fn test_from_recipe() {
        let catalog = RecipeCatalog::standard();
        let recipe = catalog.by_formula("AgCl").unwrap();
        let molecule = Molecule::from_recipe(recipe, EntityId(77));

        assert_eq!(molecule.id, EntityId(77));
        assert_eq!(molecule.name, "塩化銀");
        assert_eq!(molecule.power, 50);
        assert!(!molecule.is_attacker());
        assert!(molecule.has_effect(SpecialEffect::Wall));
    }

    #[test]
    fn test_serialization() {
        let catalog = RecipeCatalog::standard();
        let molecule = Molecule::from_recipe(catalog.by_formula("HCl").unwrap(), EntityId(1));
        let json = serde_json::to_string(&molecule).unwrap();
        let back: Molecule = serde_json::from_str(&json).unwrap();
        assert_eq!(molecule, back);
    }
}
