//! Recipe definitions.
//!
//! A `Recipe` maps an element multiset plus an optional condition to a
//! molecule template. Recipes are static data and never mutated.

use serde::{Deserialize, Serialize};

use crate::core::token::{Condition, Element};

/// Battle role of a synthesized molecule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoleculeRole {
    Attacker,
    Defender,
    Effect,
}

/// Optional special behavior of a molecule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialEffect {
    /// Skips the target's next action.
    Stun,
    Poison,
    /// Ignores shields.
    Piercing,
    /// Power is added to the owner's shield on synthesis.
    Wall,
    DirectDmg,
}

/// What a recipe produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoleculeTemplate {
    pub name: String,
    pub formula: String,
    pub role: MoleculeRole,
    /// Attack or defense points.
    pub power: i64,
    pub effect_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_effect: Option<SpecialEffect>,
}

/// Static reaction rule.
///
/// ## Example
///
/// ```
/// use elemental_synth::core::{Condition, Element};
/// use elemental_synth::recipes::{MoleculeRole, MoleculeTemplate, Recipe};
///
/// let steam = Recipe::new(
///     [Element::H, Element::H, Element::O],
///     Some(Condition::Spark),
///     MoleculeTemplate::new("Steam Blast", "H₂O", MoleculeRole::Attacker, 40),
/// );
/// assert_eq!(steam.ingredient_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Required elements. Order is irrelevant to matching.
    pub inputs: Vec<Element>,
    /// Required condition. `None` means the reaction happens on contact.
    #[serde(default)]
    pub condition: Option<Condition>,
    pub result: MoleculeTemplate,
    /// Static explanation, also the commentary fallback.
    #[serde(default)]
    pub explanation: String,
}

impl MoleculeTemplate {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        formula: impl Into<String>,
        role: MoleculeRole,
        power: i64,
    ) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            role,
            power,
            effect_description: String::new(),
            special_effect: None,
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: SpecialEffect) -> Self {
        self.special_effect = Some(effect);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.effect_description = description.into();
        self
    }
}

impl Recipe {
    #[must_use]
    pub fn new(
        inputs: impl IntoIterator<Item = Element>,
        condition: Option<Condition>,
        result: MoleculeTemplate,
    ) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            condition,
            result,
            explanation: String::new(),
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Total ingredients: every input element plus one for a required condition.
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.inputs.len() + usize::from(self.condition.is_some())
    }

    /// Contact reactions need no condition card.
    #[must_use]
    pub fn is_contact(&self) -> bool {
        self.condition.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_count() {
        let contact = Recipe::new(
            [Element::H, Element::Cl],
            None,
            MoleculeTemplate::new("HCl", "HCl", MoleculeRole::Attacker, 60),
        );
        assert_eq!(contact.ingredient_count(), 2);
        assert!(contact.is_contact());

        let heated = Recipe::new(
            [Element::Fe, Element::S],
            Some(Condition::Heat),
            MoleculeTemplate::new("FeS", "FeS", MoleculeRole::Defender, 40),
        );
        assert_eq!(heated.ingredient_count(), 3);
        assert!(!heated.is_contact());
    }

    #[test]
    fn test_template_builder() {
        let t = MoleculeTemplate::new("AgCl", "AgCl", MoleculeRole::Defender, 50)
            .with_effect(SpecialEffect::Wall)
            .with_description("白い壁で守る！");
        assert_eq!(t.special_effect, Some(SpecialEffect::Wall));
        assert_eq!(t.effect_description, "白い壁で守る！");
    }

    #[test]
    fn test_serialization_format() {
        let t = MoleculeTemplate::new("X", "X", MoleculeRole::Attacker, 1)
            .with_effect(SpecialEffect::DirectDmg);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"ATTACKER\""));
        assert!(json.contains("\"DIRECT_DMG\""));
    }
}
