//! Card instances.
//!
//! A `Card` is one physical card in a hand. Its category says which payload
//! it is supposed to carry; the payload fields are optional so that data
//! arriving from a host with a missing payload can still be represented.
//! Matching code reads payloads only through [`Card::element_token`] and
//! [`Card::condition_token`], which ignore mismatched or empty payloads.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::token::{Condition, Element};

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardCategory {
    Element,
    Condition,
    /// Never dealt by the standard card set. Ignored by matching.
    Support,
}

/// A card instance.
///
/// ## Example
///
/// ```
/// use elemental_synth::cards::Card;
/// use elemental_synth::core::{Element, EntityId};
///
/// let h = Card::element(EntityId(1), "水素", Element::H);
/// assert_eq!(h.element_token(), Some(Element::H));
/// assert_eq!(h.condition_token(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance id.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    pub category: CardCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,

    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Create an element card.
    #[must_use]
    pub fn element(id: EntityId, name: impl Into<String>, element: Element) -> Self {
        Self {
            id,
            name: name.into(),
            category: CardCategory::Element,
            element: Some(element),
            condition: None,
            description: String::new(),
        }
    }

    /// Create a condition card.
    #[must_use]
    pub fn condition(id: EntityId, name: impl Into<String>, condition: Condition) -> Self {
        Self {
            id,
            name: name.into(),
            category: CardCategory::Condition,
            element: None,
            condition: Some(condition),
            description: String::new(),
        }
    }

    /// Set the flavor text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The element this card contributes to a reaction, if any.
    ///
    /// `None` unless the card is in the `Element` category and carries an
    /// element payload.
    #[must_use]
    pub fn element_token(&self) -> Option<Element> {
        match self.category {
            CardCategory::Element => self.element,
            _ => None,
        }
    }

    /// The condition this card contributes to a reaction, if any.
    #[must_use]
    pub fn condition_token(&self) -> Option<Condition> {
        match self.category {
            CardCategory::Condition => self.condition,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_card() {
        let card = Card::element(EntityId(3), "酸素", Element::O).with_description("燃やすのに必要。");
        assert_eq!(card.category, CardCategory::Element);
        assert_eq!(card.element_token(), Some(Element::O));
        assert_eq!(card.condition_token(), None);
        assert_eq!(card.description, "燃やすのに必要。");
    }

    #[test]
    fn test_condition_card() {
        let card = Card::condition(EntityId(4), "点火", Condition::Spark);
        assert_eq!(card.condition_token(), Some(Condition::Spark));
        assert_eq!(card.element_token(), None);
    }

    #[test]
    fn test_mismatched_payload_is_ignored() {
        let mut card = Card::condition(EntityId(5), "broken", Condition::Heat);
        card.condition = None;
        assert_eq!(card.condition_token(), None);

        let mut odd = Card::element(EntityId(6), "odd", Element::H);
        odd.category = CardCategory::Support;
        assert_eq!(odd.element_token(), None);
    }

    #[test]
    fn test_serialization() {
        let card = Card::element(EntityId(1), "水素", Element::H);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"ELEMENT\""));
        assert!(!json.contains("condition"));

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
