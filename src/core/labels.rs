//! Localized display labels.
//!
//! Maps element and condition tokens to player-facing names and holds the
//! message templates used by the hint estimator and guidance line. The
//! default table is Japanese; `english()` is provided for tooling and tests.
//!
//! Tables can be loaded from JSON:
//!
//! ```
//! use elemental_synth::core::{DisplayLabels, Element};
//!
//! let labels = DisplayLabels::default();
//! assert_eq!(labels.element(Element::H), "水素");
//!
//! let json = serde_json::to_string(&labels).unwrap();
//! let loaded = DisplayLabels::from_json(&json).unwrap();
//! assert_eq!(loaded.element(Element::Cl), "塩素");
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::SynthError;
use super::token::{Condition, Element};

/// Fixed player-facing message lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Hint template. `{missing}` and `{target}` are substituted.
    pub hint: String,
    /// Joins missing ingredient names inside `{missing}`.
    pub or_separator: String,
    /// Selection already forms a recipe.
    pub ready: String,
    /// Nothing selected, but the hand can make something.
    pub recipe_available: String,
    /// Nothing selected, and the hand can't make anything.
    pub nothing_possible: String,
    /// Something selected, no partial match to report.
    pub keep_selecting: String,
}

/// Token → label lookup plus message templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLabels {
    elements: FxHashMap<Element, String>,
    conditions: FxHashMap<Condition, String>,
    pub messages: Messages,
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self::japanese()
    }
}

impl DisplayLabels {
    /// The game's shipped Japanese table.
    #[must_use]
    pub fn japanese() -> Self {
        let elements = [
            (Element::H, "水素"),
            (Element::C, "炭素"),
            (Element::N, "窒素"),
            (Element::O, "酸素"),
            (Element::S, "硫黄"),
            (Element::Cl, "塩素"),
            (Element::Na, "ナトリウム"),
            (Element::Mg, "マグネシウム"),
            (Element::Al, "アルミニウム"),
            (Element::Fe, "鉄"),
            (Element::Cu, "銅"),
            (Element::Ag, "銀"),
        ];
        let conditions = [
            (Condition::Heat, "加熱"),
            (Condition::Spark, "点火"),
            (Condition::FeCatalyst, "鉄触媒"),
            (Condition::PtCatalyst, "白金触媒"),
            (Condition::Water, "水 (溶媒)"),
            (Condition::None, "なし"),
        ];

        Self::from_pairs(
            &elements,
            &conditions,
            Messages {
                hint: "あと {missing} で「{target}」が作れそう！".to_string(),
                or_separator: " か ".to_string(),
                ready: "合成できます！真ん中のボタンを押してね！".to_string(),
                recipe_available:
                    "作れるレシピがあります！まずは「レシピ」を見てみよう。分からなかったら「ヒント」を押してね！"
                        .to_string(),
                nothing_possible: "今は作れるものがなさそう... 「攻撃開始」でターンを終わろう。"
                    .to_string(),
                keep_selecting: "あと少し...！他のカードも選んでみよう。".to_string(),
            },
        )
    }

    /// English table.
    #[must_use]
    pub fn english() -> Self {
        let elements = [
            (Element::H, "Hydrogen"),
            (Element::C, "Carbon"),
            (Element::N, "Nitrogen"),
            (Element::O, "Oxygen"),
            (Element::S, "Sulfur"),
            (Element::Cl, "Chlorine"),
            (Element::Na, "Sodium"),
            (Element::Mg, "Magnesium"),
            (Element::Al, "Aluminium"),
            (Element::Fe, "Iron"),
            (Element::Cu, "Copper"),
            (Element::Ag, "Silver"),
        ];
        let conditions = [
            (Condition::Heat, "Heat"),
            (Condition::Spark, "Spark"),
            (Condition::FeCatalyst, "Fe Catalyst"),
            (Condition::PtCatalyst, "Pt Catalyst"),
            (Condition::Water, "Water (Solvent)"),
            (Condition::None, "None"),
        ];

        Self::from_pairs(
            &elements,
            &conditions,
            Messages {
                hint: "Add {missing} to make {target}!".to_string(),
                or_separator: " or ".to_string(),
                ready: "Ready to synthesize!".to_string(),
                recipe_available: "Your hand can make something. Check the recipes or ask for a hint."
                    .to_string(),
                nothing_possible: "Nothing to make right now. End your turn.".to_string(),
                keep_selecting: "Almost... try selecting other cards.".to_string(),
            },
        )
    }

    fn from_pairs(
        elements: &[(Element, &str)],
        conditions: &[(Condition, &str)],
        messages: Messages,
    ) -> Self {
        Self {
            elements: elements.iter().map(|(e, s)| (*e, (*s).to_string())).collect(),
            conditions: conditions.iter().map(|(c, s)| (*c, (*s).to_string())).collect(),
            messages,
        }
    }

    /// Load a label table from JSON.
    pub fn from_json(json: &str) -> Result<Self, SynthError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Label for an element. Falls back to the symbol if the table lacks it.
    #[must_use]
    pub fn element(&self, element: Element) -> &str {
        self.elements
            .get(&element)
            .map_or(element.symbol(), String::as_str)
    }

    /// Label for a condition. Falls back to the token key if the table lacks it.
    #[must_use]
    pub fn condition(&self, condition: Condition) -> &str {
        self.conditions
            .get(&condition)
            .map_or(condition.key(), String::as_str)
    }

    /// Override one element label.
    pub fn set_element(&mut self, element: Element, label: impl Into<String>) {
        self.elements.insert(element, label.into());
    }

    /// Render the hint template.
    #[must_use]
    pub fn format_hint(&self, missing: &[String], target: &str) -> String {
        let joined = missing.join(&self.messages.or_separator);
        self.messages
            .hint
            .replace("{missing}", &joined)
            .replace("{target}", target)
    }
}
