//! Card templates and the standard card set.
//!
//! `CardTemplate` holds the static properties shared by every copy of a
//! card (name, payload, flavor text). `CardFactory` stamps out `Card`
//! instances with fresh ids. Shuffling and drawing are left to the host.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardCategory};
use crate::core::entity::{EntityAllocator, EntityId};
use crate::core::token::{Condition, Element};

/// Static card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub name: String,
    pub category: CardCategory,
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub description: String,
}

impl CardTemplate {
    /// Element card template.
    #[must_use]
    pub fn element(name: impl Into<String>, element: Element, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: CardCategory::Element,
            element: Some(element),
            condition: None,
            description: description.into(),
        }
    }

    /// Condition card template.
    #[must_use]
    pub fn condition(
        name: impl Into<String>,
        condition: Condition,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: CardCategory::Condition,
            element: None,
            condition: Some(condition),
            description: description.into(),
        }
    }

    /// Create a card instance with the given id.
    #[must_use]
    pub fn instantiate(&self, id: EntityId) -> Card {
        Card {
            id,
            name: self.name.clone(),
            category: self.category,
            element: self.element,
            condition: self.condition,
            description: self.description.clone(),
        }
    }
}

/// Element cards of the standard set, one entry per copy.
#[must_use]
pub fn standard_element_cards() -> Vec<CardTemplate> {
    let hydrogen = || CardTemplate::element("水素", Element::H, "基本の元素。まずはこれを集めよう。");
    let oxygen = || CardTemplate::element("酸素", Element::O, "燃やすのに必要。");

    vec![
        hydrogen(),
        hydrogen(),
        hydrogen(),
        hydrogen(),
        oxygen(),
        oxygen(),
        CardTemplate::element("窒素", Element::N, "空気の主成分。"),
        CardTemplate::element("塩素", Element::Cl, "刺激臭のある気体。"),
        CardTemplate::element("硫黄", Element::S, "火山の近くにある黄色い石。"),
        CardTemplate::element("ナトリウム", Element::Na, "水に入れると爆発する金属。"),
        CardTemplate::element("銀", Element::Ag, "キラキラした貴金属。"),
        CardTemplate::element("鉄", Element::Fe, "頑丈な金属。"),
    ]
}

/// Condition cards of the standard set.
#[must_use]
pub fn standard_condition_cards() -> Vec<CardTemplate> {
    vec![
        CardTemplate::condition("加熱", Condition::Heat, "温めて反応させる。"),
        CardTemplate::condition("点火", Condition::Spark, "バチッ！と火をつける。"),
        CardTemplate::condition("水 (溶媒)", Condition::Water, "水に溶かす。"),
    ]
}

/// Mints card instances with unique ids.
#[derive(Clone, Debug, Default)]
pub struct CardFactory {
    ids: EntityAllocator,
}

impl CardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing id source, so cards and molecules share one id space.
    #[must_use]
    pub fn with_allocator(ids: EntityAllocator) -> Self {
        Self { ids }
    }

    /// Give back the id source.
    #[must_use]
    pub fn into_allocator(self) -> EntityAllocator {
        self.ids
    }

    /// Create one card from a template.
    pub fn mint(&mut self, template: &CardTemplate) -> Card {
        template.instantiate(self.ids.alloc())
    }

    /// Create `copies` cards from each template, in template order.
    pub fn mint_set(&mut self, templates: &[CardTemplate], copies: usize) -> Vec<Card> {
        (0..copies)
            .flat_map(|_| templates.iter())
            .map(|t| self.mint(t))
            .collect()
    }

    /// The full unshuffled card pool: five copies of the element set and
    /// four of the condition set.
    pub fn standard_pool(&mut self) -> Vec<Card> {
        let mut pool = self.mint_set(&standard_element_cards(), 5);
        pool.extend(self.mint_set(&standard_condition_cards(), 4));
        pool
    }

    /// Create an element card using the standard name for that element.
    pub fn element_card(&mut self, element: Element) -> Card {
        match standard_element_cards().into_iter().find(|t| t.element == Some(element)) {
            Some(template) => self.mint(&template),
            None => Card::element(self.ids.alloc(), element.symbol(), element),
        }
    }

    /// Create a condition card using the standard name for that condition.
    pub fn condition_card(&mut self, condition: Condition) -> Card {
        match standard_condition_cards()
            .into_iter()
            .find(|t| t.condition == Some(condition))
        {
            Some(template) => self.mint(&template),
            None => Card::condition(self.ids.alloc(), condition.key(), condition),
        }
    }
}
