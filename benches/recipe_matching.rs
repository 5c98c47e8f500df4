use criterion::{black_box, criterion_group, criterion_main, Criterion};

use elemental_synth::cards::{Card, CardFactory};
use elemental_synth::core::{Condition, DisplayLabels, Element};
use elemental_synth::recipes::RecipeCatalog;
use elemental_synth::synthesis::{find_feasible_recipe, hint_text, matches_recipe_exactly};

fn hand(factory: &mut CardFactory, elements: &[Element], conditions: &[Condition]) -> Vec<Card> {
    let mut cards: Vec<Card> = elements.iter().map(|&e| factory.element_card(e)).collect();
    cards.extend(conditions.iter().map(|&c| factory.condition_card(c)));
    cards
}

fn bench_matching(c: &mut Criterion) {
    let catalog = RecipeCatalog::standard();
    let labels = DisplayLabels::default();
    let mut factory = CardFactory::new();

    // Last recipe in the catalog, so every earlier one is tried first.
    let selection = hand(&mut factory, &[Element::S, Element::Fe], &[Condition::Heat]);
    c.bench_function("matches_recipe_exactly", |b| {
        b.iter(|| matches_recipe_exactly(black_box(&catalog), black_box(&selection)))
    });

    // Eight cards that make nothing.
    let dead_hand = hand(
        &mut factory,
        &[Element::H, Element::O, Element::N, Element::S, Element::Fe, Element::Cu],
        &[Condition::Spark, Condition::Heat],
    );
    c.bench_function("find_feasible_recipe_miss", |b| {
        b.iter(|| find_feasible_recipe(black_box(&catalog), black_box(&dead_hand)))
    });

    let partial = hand(&mut factory, &[Element::H, Element::N], &[]);
    c.bench_function("hint_text", |b| {
        b.iter(|| hint_text(black_box(&catalog), &labels, black_box(&partial)))
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
