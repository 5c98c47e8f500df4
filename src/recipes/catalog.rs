//! The recipe catalog.
//!
//! An ordered, read-only list of recipes. Order is a priority list: every
//! scan walks the catalog front to back and the first hit wins. The
//! standard catalog has no two recipes sharing an input multiset, so the
//! priority only decides which of several *feasible* recipes a hand scan
//! reports.

use serde::{Deserialize, Serialize};

use super::recipe::{MoleculeRole, MoleculeTemplate, Recipe, SpecialEffect};
use crate::core::error::SynthError;
use crate::core::token::{Condition, Element};

/// Upper bound on recipe inputs.
pub const MAX_INPUTS: usize = 5;

/// Ordered recipe table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RecipeCatalog {
    /// Build a catalog, validating every recipe.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, SynthError> {
        for (index, recipe) in recipes.iter().enumerate() {
            validate(index, recipe)?;
        }
        Ok(Self { recipes })
    }

    /// Load a catalog from a JSON array of recipes.
    pub fn from_json(json: &str) -> Result<Self, SynthError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// The game's shipped recipe table, in priority order.
    #[must_use]
    pub fn standard() -> Self {
        use Element::{Ag, Cl, Fe, Na, H, N, O, S};

        let recipes = vec![
            Recipe::new(
                [H, H, O],
                Some(Condition::Spark),
                MoleculeTemplate::new("水蒸気爆発", "H₂O", MoleculeRole::Attacker, 40)
                    .with_description("ドカン！と爆発攻撃"),
            )
            .with_explanation("水素と酸素に「点火」！(2H₂ + O₂)"),
            Recipe::new(
                [Na],
                Some(Condition::Water),
                MoleculeTemplate::new("水酸化ナトリウム", "NaOH", MoleculeRole::Attacker, 50)
                    .with_description("ドロドロに溶かす攻撃"),
            )
            .with_explanation("ナトリウムを「水」に入れるだけ！(Na + H₂O)"),
            Recipe::new(
                [H, Cl],
                None,
                MoleculeTemplate::new("塩化水素", "HCl", MoleculeRole::Attacker, 60)
                    .with_description("強力な酸で攻撃！"),
            )
            .with_explanation("水素と塩素を混ぜるだけ。(H + Cl)"),
            Recipe::new(
                [Ag, Cl],
                None,
                MoleculeTemplate::new("塩化銀", "AgCl", MoleculeRole::Defender, 50)
                    .with_effect(SpecialEffect::Wall)
                    .with_description("白い壁で守る！"),
            )
            .with_explanation("銀と塩素で白い壁ができる。(Ag + Cl)"),
            Recipe::new(
                [H, N, O, O],
                Some(Condition::Water),
                MoleculeTemplate::new("硝酸", "HNO₃", MoleculeRole::Attacker, 80)
                    .with_effect(SpecialEffect::Piercing)
                    .with_description("全てを溶かす最強の酸！"),
            )
            .with_explanation("たくさんの材料を水に溶かす難しい実験！"),
            Recipe::new(
                [Fe, S],
                Some(Condition::Heat),
                MoleculeTemplate::new("硫化鉄", "FeS", MoleculeRole::Defender, 40)
                    .with_effect(SpecialEffect::Wall)
                    .with_description("黒い壁で防御！"),
            )
            .with_explanation("鉄と硫黄を「加熱」して合体！(Fe + S)"),
        ];

        Self { recipes }
    }

    /// Recipes in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Find a recipe by result formula.
    #[must_use]
    pub fn by_formula(&self, formula: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.result.formula == formula)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate(index: usize, recipe: &Recipe) -> Result<(), SynthError> {
    let invalid = |reason: &str| SynthError::InvalidRecipe {
        index,
        reason: reason.to_string(),
    };

    if recipe.inputs.is_empty() {
        return Err(invalid("no input elements"));
    }
    if recipe.inputs.len() > MAX_INPUTS {
        return Err(invalid("too many input elements"));
    }
    if recipe.condition == Some(Condition::None) {
        return Err(invalid("use no condition instead of Condition::None"));
    }
    if recipe.result.power <= 0 {
        return Err(invalid("power must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = RecipeCatalog::standard();
        let formulas: Vec<_> = catalog.iter().map(|r| r.result.formula.as_str()).collect();
        assert_eq!(formulas, vec!["H₂O", "NaOH", "HCl", "AgCl", "HNO₃", "FeS"]);
    }

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = RecipeCatalog::standard();
        let revalidated = RecipeCatalog::new(catalog.iter().cloned().collect()).unwrap();
        assert_eq!(revalidated, catalog);
    }

    #[test]
    fn test_by_formula() {
        let catalog = RecipeCatalog::standard();
        let agcl = catalog.by_formula("AgCl").unwrap();
        assert_eq!(agcl.result.role, MoleculeRole::Defender);
        assert_eq!(agcl.result.power, 50);
        assert_eq!(agcl.result.special_effect, Some(SpecialEffect::Wall));
        assert!(catalog.by_formula("NaCl").is_none());
    }

    #[test]
    fn test_rejects_empty_inputs() {
        let bad = Recipe::new(Vec::<Element>::new(), None, MoleculeTemplate::new("x", "x", MoleculeRole::Effect, 1));
        let err = RecipeCatalog::new(vec![bad]).unwrap_err();
        assert!(matches!(err, SynthError::InvalidRecipe { index: 0, .. }));
    }

    #[test]
    fn test_rejects_oversized_and_powerless() {
        let big = Recipe::new(
            [Element::H; 6],
            None,
            MoleculeTemplate::new("x", "x", MoleculeRole::Effect, 1),
        );
        assert!(RecipeCatalog::new(vec![big]).is_err());

        let weak = Recipe::new(
            [Element::H],
            None,
            MoleculeTemplate::new("x", "x", MoleculeRole::Effect, 0),
        );
        assert!(RecipeCatalog::new(vec![weak]).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let catalog = RecipeCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['));

        let loaded = RecipeCatalog::from_json(&json).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"[{"inputs":[],"condition":null,"result":{"name":"x","formula":"x","role":"EFFECT","power":1,"effect_description":""}}]"#;
        assert!(matches!(
            RecipeCatalog::from_json(json),
            Err(SynthError::InvalidRecipe { .. })
        ));
        assert!(matches!(
            RecipeCatalog::from_json("{"),
            Err(SynthError::CatalogFormat(_))
        ));
    }
}
