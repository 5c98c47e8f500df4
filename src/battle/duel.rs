//! A duel between the player and the scripted opponent.
//!
//! `Duel` owns both sides and applies decisions to them: synthesizing,
//! attacking, starting turns. Choosing *when* to call these (phases,
//! timers, animation) belongs to the host. Every read the matching core
//! needs is taken from a snapshot of the current hand.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info};

use super::combat::{resolve_attacks, AttackReport};
use super::log::{LogEntry, LogKind};
use super::molecule::Molecule;
use super::player::{PlayerState, Side};
use crate::cards::{Card, CardTemplate};
use crate::commentary::{narrate, opponent_remark, Commentator, StaticCommentary};
use crate::core::config::DuelConfig;
use crate::core::entity::{EntityAllocator, EntityId};
use crate::core::error::SynthError;
use crate::core::labels::DisplayLabels;
use crate::recipes::{Recipe, RecipeCatalog, SpecialEffect};
use crate::synthesis::{find_feasible_recipe, guidance_text, hint_text, matches_recipe_exactly, FeasibleRecipe};

/// How a finished duel ended.
///
/// Sides attack one at a time, so a duel always has exactly one winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuelResult {
    pub winner: Side,
}

impl DuelResult {
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }

    #[must_use]
    pub fn loser(&self) -> Side {
        self.winner.other()
    }
}

/// Duel state and rules.
///
/// Cloning is cheap: hands, fields and the log are persistent vectors and
/// the commentator is shared.
#[derive(Clone)]
pub struct Duel {
    config: DuelConfig,
    catalog: RecipeCatalog,
    labels: DisplayLabels,
    commentator: Arc<dyn Commentator>,
    ids: EntityAllocator,
    sides: [PlayerState; 2],
    turn: u32,
    log: Vector<LogEntry>,
    result: Option<DuelResult>,
}

impl Duel {
    /// New duel with the standard catalog, Japanese labels and static
    /// commentary.
    #[must_use]
    pub fn new(config: DuelConfig) -> Self {
        let sides = [PlayerState::new(&config), PlayerState::new(&config)];
        Self {
            config,
            catalog: RecipeCatalog::standard(),
            labels: DisplayLabels::default(),
            commentator: Arc::new(StaticCommentary),
            ids: EntityAllocator::new(),
            sides,
            turn: 1,
            log: Vector::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: RecipeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: DisplayLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_commentator(mut self, commentator: impl Commentator + 'static) -> Self {
        self.commentator = Arc::new(commentator);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &PlayerState {
        &self.sides[side.index()]
    }

    fn side_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.sides[side.index()]
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    #[must_use]
    pub fn result(&self) -> Option<DuelResult> {
        self.result
    }

    fn push_log(&mut self, kind: LogKind, message: impl Into<String>) {
        self.log.push_back(LogEntry::new(self.turn, kind, message));
    }

    fn ensure_running(&self) -> Result<(), SynthError> {
        match self.result {
            Some(_) => Err(SynthError::GameOver),
            None => Ok(()),
        }
    }

    // === Cards ===

    /// Create a card from a template, with an id from the duel's id space.
    pub fn mint_card(&mut self, template: &CardTemplate) -> Result<Card, SynthError> {
        Ok(template.instantiate(self.ids.try_alloc()?))
    }

    /// Put drawn cards into a side's hand.
    pub fn deal(&mut self, side: Side, cards: impl IntoIterator<Item = Card>) {
        self.side_mut(side).hand.extend(cards);
    }

    // === Queries ===

    /// Recipe the side's hand can make, with the cards to select.
    #[must_use]
    pub fn hint(&self, side: Side) -> Option<FeasibleRecipe<'_>> {
        find_feasible_recipe(&self.catalog, &self.side(side).hand.snapshot())
    }

    /// Partial-progress hint for a selection from the side's hand.
    pub fn hint_for(&self, side: Side, selection: &[EntityId]) -> Result<Option<String>, SynthError> {
        let cards = self.side(side).hand.select(selection)?;
        Ok(hint_text(&self.catalog, &self.labels, &cards))
    }

    /// Instruction line for a selection from the side's hand.
    pub fn guidance(&self, side: Side, selection: &[EntityId]) -> Result<String, SynthError> {
        let hand = self.side(side).hand.snapshot();
        let cards = self.side(side).hand.select(selection)?;
        Ok(guidance_text(&self.catalog, &self.labels, &hand, &cards))
    }

    /// Whether the selection forms a recipe.
    pub fn can_synthesize(&self, side: Side, selection: &[EntityId]) -> Result<bool, SynthError> {
        let cards = self.side(side).hand.select(selection)?;
        Ok(matches_recipe_exactly(&self.catalog, &cards).is_some())
    }

    // === Actions ===

    /// Start a side's turn.
    ///
    /// The shield resets. Returns `false` if the side is stunned; the stun
    /// is consumed and the side skips its action.
    pub fn begin_turn(&mut self, side: Side) -> Result<bool, SynthError> {
        self.ensure_running()?;

        let state = self.side_mut(side);
        state.shield = 0;
        if state.is_stunned {
            state.is_stunned = false;
            debug!(%side, turn = self.turn, "stunned, skipping action");
            self.push_log(LogKind::Combat, format!("{} は気絶していて動けない！", side_name(side)));
            return Ok(false);
        }

        self.push_log(LogKind::Info, format!("{} のターン。", side_name(side)));
        Ok(true)
    }

    /// Synthesize the selected cards from a side's hand.
    ///
    /// The selection must form a recipe exactly. On success the cards leave
    /// the hand, the molecule joins the field, and a wall adds its power to
    /// the shield.
    pub fn synthesize(&mut self, side: Side, selection: &[EntityId]) -> Result<Molecule, SynthError> {
        self.ensure_running()?;

        let cards = self.side(side).hand.select(selection)?;
        let Some(recipe) = matches_recipe_exactly(&self.catalog, &cards).cloned() else {
            debug!(%side, selected = selection.len(), "selection matches no recipe");
            self.push_log(LogKind::Info, "失敗... 組み合わせが間違っています。");
            return Err(SynthError::NoMatchingRecipe);
        };

        self.apply_recipe(side, &recipe, selection)
    }

    /// Let the scripted opponent synthesize the first recipe it can.
    ///
    /// Returns `None` if its hand makes nothing.
    pub fn opponent_act(&mut self) -> Result<Option<Molecule>, SynthError> {
        self.ensure_running()?;

        let plan = find_feasible_recipe(&self.catalog, &self.side(Side::Opponent).hand.snapshot())
            .map(|found| (found.recipe.clone(), found.consumed));

        let Some((recipe, consumed)) = plan else {
            debug!("opponent has no feasible recipe");
            self.push_log(LogKind::Info, "相手は何もできなかったようだ。");
            return Ok(None);
        };

        info!(formula = %recipe.result.formula, cards = consumed.len(), "opponent synthesizes");
        self.apply_recipe(Side::Opponent, &recipe, &consumed).map(Some)
    }

    fn apply_recipe(&mut self, side: Side, recipe: &Recipe, cards: &[EntityId]) -> Result<Molecule, SynthError> {
        let molecule = Molecule::from_recipe(recipe, self.ids.try_alloc()?);
        let turn = self.turn;

        let state = self.side_mut(side);
        state.hand.remove_all(cards);
        state.molecules.push_back(molecule.clone());
        if molecule.has_effect(SpecialEffect::Wall) {
            state.shield += molecule.power;
        }

        info!(%side, formula = %molecule.formula, power = molecule.power, "synthesis");

        match side {
            Side::Player => {
                self.push_log(LogKind::Synthesis, format!("合成成功！ {} が完成！", molecule.name));
                let text = narrate(self.commentator.as_ref(), recipe, turn);
                self.push_log(LogKind::Commentary, format!("先生: 「{text}」"));
            }
            Side::Opponent => {
                self.push_log(LogKind::Synthesis, format!("相手が「{}」を合成！", molecule.name));
                let remark = opponent_remark(self.commentator.as_ref(), &molecule.name);
                if !remark.is_empty() {
                    self.push_log(LogKind::Commentary, remark);
                }
            }
        }

        Ok(molecule)
    }

    /// `attacker`'s field attacks the other side.
    pub fn resolve_battle(&mut self, attacker: Side) -> Result<AttackReport, SynthError> {
        self.ensure_running()?;

        let defender = attacker.other();
        let [player, opponent] = &mut self.sides;
        let report = match attacker {
            Side::Player => resolve_attacks(player, opponent),
            Side::Opponent => resolve_attacks(opponent, player),
        };

        if report.damage > 0 {
            info!(%attacker, damage = report.damage, "attack");
            let message = match attacker {
                Side::Player => format!("攻撃！ 相手に {} のダメージ！", report.damage),
                Side::Opponent => format!("相手の攻撃！ {} のダメージ！", report.damage),
            };
            self.push_log(LogKind::Combat, message);
        }

        if report.defeated {
            self.result = Some(DuelResult { winner: attacker });
            info!(winner = %attacker, turn = self.turn, "duel over");
            let message = match attacker {
                Side::Player => "勝利！おめでとうございます！",
                Side::Opponent => "敗北... 次回こそ頑張ろう！",
            };
            self.push_log(LogKind::Info, message);
        } else if report.stunned {
            self.push_log(LogKind::Combat, format!("{} は怯んでいる！", side_name(defender)));
        }

        Ok(report)
    }

    /// Move to the next round once both sides have acted.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }
}

impl std::fmt::Debug for Duel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Duel")
            .field("turn", &self.turn)
            .field("player", &self.sides[0])
            .field("opponent", &self.sides[1])
            .field("result", &self.result)
            .field("log_len", &self.log.len())
            .finish_non_exhaustive()
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Player => "あなた",
        Side::Opponent => "相手",
    }
}
