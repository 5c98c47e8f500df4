//! Damage calculation and attack resolution.

use super::molecule::Molecule;
use super::player::PlayerState;
use crate::recipes::SpecialEffect;

/// Damage one attacker deals through `shield`.
///
/// Piercing attackers ignore the shield entirely.
#[must_use]
pub fn calculate_damage(attacker: &Molecule, shield: i64) -> i64 {
    if attacker.has_effect(SpecialEffect::Piercing) {
        return attacker.power;
    }
    (attacker.power - shield).max(0)
}

/// What one attack step did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackReport {
    /// Total damage dealt.
    pub damage: i64,
    /// The defender was stunned by this attack.
    pub stunned: bool,
    /// The defender's health reached 0.
    pub defeated: bool,
}

/// Every attacker on `attacker`'s field hits `defender` once.
///
/// Each attacker is measured against the shield as it stood before the
/// attack. The shield then wears down by the total dealt. A stunning
/// molecule stuns the defender unless the attack was lethal.
pub fn resolve_attacks(attacker: &PlayerState, defender: &mut PlayerState) -> AttackReport {
    let shield = defender.shield;
    let damage: i64 = attacker.attackers().map(|m| calculate_damage(m, shield)).sum();

    let mut report = AttackReport {
        damage,
        ..AttackReport::default()
    };

    if damage > 0 {
        defender.take_damage(damage);
        defender.shield = (defender.shield - damage).max(0);
    }

    if defender.is_defeated() {
        report.defeated = true;
        return report;
    }

    if attacker
        .molecules
        .iter()
        .any(|m| m.has_effect(SpecialEffect::Stun))
    {
        defender.is_stunned = true;
        report.stunned = true;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DuelConfig;
    use crate::core::entity::EntityId;
    use crate::recipes::{MoleculeRole, MoleculeTemplate, Recipe, RecipeCatalog};
    use crate::core::token::Element;

    fn molecule(formula: &str) -> Molecule {
        let catalog = RecipeCatalog::standard();
        Molecule::from_recipe(catalog.by_formula(formula).unwrap(), EntityId(0))
    }

    fn custom(role: MoleculeRole, power: i64, effect: Option<SpecialEffect>) -> Molecule {
        let mut template = MoleculeTemplate::new("x", "x", role, power);
        template.special_effect = effect;
        Molecule::from_recipe(&Recipe::new([Element::C], None, template), EntityId(1))
    }

    #[test]
    fn test_shield_absorbs_damage() {
        assert_eq!(calculate_damage(&molecule("HCl"), 0), 60);
        assert_eq!(calculate_damage(&molecule("HCl"), 50), 10);
        assert_eq!(calculate_damage(&molecule("H₂O"), 50), 0);
    }

    #[test]
    fn test_piercing_ignores_shield() {
        assert_eq!(calculate_damage(&molecule("HNO₃"), 500), 80);
    }

    #[test]
    fn test_resolve_attacks_sums_attackers_only() {
        let config = DuelConfig::default();
        let mut attacker = PlayerState::new(&config);
        attacker.molecules.push_back(molecule("HCl"));
        attacker.molecules.push_back(molecule("H₂O"));
        attacker.molecules.push_back(molecule("AgCl"));

        let mut defender = PlayerState::new(&config);
        defender.shield = 30;

        let report = resolve_attacks(&attacker, &mut defender);
        assert_eq!(report.damage, 30 + 10);
        assert_eq!(defender.hp, 160);
        assert_eq!(defender.shield, 0);
        assert!(!report.defeated);
        assert!(!report.stunned);
    }

    #[test]
    fn test_shield_wears_down() {
        let config = DuelConfig::default();
        let mut attacker = PlayerState::new(&config);
        attacker.molecules.push_back(custom(MoleculeRole::Attacker, 10, Some(SpecialEffect::Piercing)));

        let mut defender = PlayerState::new(&config);
        defender.shield = 50;

        let report = resolve_attacks(&attacker, &mut defender);
        assert_eq!(report.damage, 10);
        assert_eq!(defender.shield, 40);
    }

    #[test]
    fn test_stun_applies_when_not_lethal() {
        let config = DuelConfig::default();
        let mut attacker = PlayerState::new(&config);
        attacker.molecules.push_back(custom(MoleculeRole::Effect, 1, Some(SpecialEffect::Stun)));

        let mut defender = PlayerState::new(&config);
        let report = resolve_attacks(&attacker, &mut defender);
        assert_eq!(report.damage, 0);
        assert!(report.stunned);
        assert!(defender.is_stunned);
    }

    #[test]
    fn test_lethal_attack() {
        let config = DuelConfig::default().with_starting_hp(50);
        let mut attacker = PlayerState::new(&config);
        attacker.molecules.push_back(molecule("HCl"));
        attacker.molecules.push_back(custom(MoleculeRole::Effect, 1, Some(SpecialEffect::Stun)));

        let mut defender = PlayerState::new(&config);
        let report = resolve_attacks(&attacker, &mut defender);
        assert!(report.defeated);
        assert!(!report.stunned);
        assert_eq!(defender.hp, 0);
    }
}
