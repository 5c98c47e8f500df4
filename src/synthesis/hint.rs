//! Progress hints for a partial selection.
//!
//! Scores every recipe by how much of it the selection already covers and
//! names what is missing from the closest unfinished one. Purely advisory:
//! nothing here touches game state.

use smallvec::SmallVec;

use super::checker::{matches_recipe_exactly, SelectionTokens};
use super::scanner::find_feasible_recipe;
use crate::cards::Card;
use crate::core::labels::DisplayLabels;
use crate::core::token::{Condition, Element};
use crate::recipes::{Recipe, RecipeCatalog};

/// How far a selection is from one recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct Progress<'a> {
    pub recipe: &'a Recipe,
    /// Completion score. Contact recipes can exceed 1.
    pub score: f64,
    /// Required elements not covered, in recipe input order (repeats kept).
    pub missing_elements: SmallVec<[Element; 5]>,
    /// Required condition, if it is not in the selection.
    pub missing_condition: Option<Condition>,
}

impl Progress<'_> {
    /// All ingredients present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_elements.is_empty() && self.missing_condition.is_none()
    }

    /// De-duplicated missing ingredient labels, elements first.
    #[must_use]
    pub fn missing_labels(&self, labels: &DisplayLabels) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let element_names = self.missing_elements.iter().map(|&e| labels.element(e));
        let condition_name = self.missing_condition.map(|c| labels.condition(c));

        for name in element_names.chain(condition_name) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}

/// Measure how much of `recipe` the selection covers.
///
/// Each required element occurrence is matched against at most one selected
/// card. The numerator adds one for the condition when it is present or not
/// required; the denominator counts the condition only when it is required.
/// A contact recipe can therefore reach 1 before it is complete, and goes
/// above 1 once it is.
#[must_use]
pub fn progress_toward<'a>(recipe: &'a Recipe, tokens: &SelectionTokens) -> Progress<'a> {
    let mut available: SmallVec<[Element; 8]> = tokens.elements.clone();
    let mut missing_elements: SmallVec<[Element; 5]> = SmallVec::new();

    for &needed in &recipe.inputs {
        match available.iter().position(|&e| e == needed) {
            Some(pos) => {
                available.remove(pos);
            }
            None => missing_elements.push(needed),
        }
    }

    let missing_condition = recipe
        .condition
        .filter(|&required| !tokens.has_condition(required));

    let matched_elements = recipe.inputs.len() - missing_elements.len();
    let numerator = matched_elements + usize::from(missing_condition.is_none());
    let denominator = recipe.ingredient_count();
    let score = if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    };

    Progress {
        recipe,
        score,
        missing_elements,
        missing_condition,
    }
}

/// Completion score of `recipe` for a card selection.
#[must_use]
pub fn completion_score(recipe: &Recipe, selection: &[Card]) -> f64 {
    progress_toward(recipe, &SelectionTokens::from_cards(selection)).score
}

/// The unfinished recipe with the highest score strictly between 0 and 1.
///
/// Ties go to the earlier recipe in catalog order.
#[must_use]
pub fn closest_recipe<'a>(catalog: &'a RecipeCatalog, selection: &[Card]) -> Option<Progress<'a>> {
    if selection.is_empty() {
        return None;
    }

    let tokens = SelectionTokens::from_cards(selection);
    let mut best: Option<Progress<'a>> = None;

    for recipe in catalog.iter() {
        let progress = progress_toward(recipe, &tokens);
        if progress.score <= 0.0 || progress.score >= 1.0 {
            continue;
        }
        if best.as_ref().map_or(true, |b| progress.score > b.score) {
            best = Some(progress);
        }
    }

    best
}

/// Hint naming the missing ingredients of the closest unfinished recipe.
///
/// ```
/// use elemental_synth::cards::CardFactory;
/// use elemental_synth::core::{DisplayLabels, Element};
/// use elemental_synth::recipes::RecipeCatalog;
/// use elemental_synth::synthesis::hint_text;
///
/// let mut factory = CardFactory::new();
/// let selection = vec![
///     factory.element_card(Element::H),
///     factory.element_card(Element::H),
///     factory.element_card(Element::O),
/// ];
///
/// let text = hint_text(&RecipeCatalog::standard(), &DisplayLabels::english(), &selection);
/// assert_eq!(text.as_deref(), Some("Add Spark to make 水蒸気爆発!"));
/// ```
#[must_use]
pub fn hint_text(catalog: &RecipeCatalog, labels: &DisplayLabels, selection: &[Card]) -> Option<String> {
    let best = closest_recipe(catalog, selection)?;
    let missing = best.missing_labels(labels);
    Some(labels.format_hint(&missing, &best.recipe.result.name))
}

/// One-line instruction for the current hand and selection.
///
/// Ready beats partial hint; with nothing selected it says whether the hand
/// can make anything at all.
#[must_use]
pub fn guidance_text(
    catalog: &RecipeCatalog,
    labels: &DisplayLabels,
    hand: &[Card],
    selection: &[Card],
) -> String {
    let messages = &labels.messages;

    if matches_recipe_exactly(catalog, selection).is_some() {
        return messages.ready.clone();
    }
    if let Some(hint) = hint_text(catalog, labels, selection) {
        return hint;
    }
    if selection.is_empty() {
        return if find_feasible_recipe(catalog, hand).is_some() {
            messages.recipe_available.clone()
        } else {
            messages.nothing_possible.clone()
        };
    }
    messages.keep_selecting.clone()
}
