//! Ingredient tokens: chemical elements and reaction conditions.
//!
//! Tokens are closed enumerations compared by value. They carry no display
//! text; localized labels live in [`DisplayLabels`](super::DisplayLabels) so
//! matching never depends on presentation strings.
//!
//! Both enums derive `Ord`. The multiset matcher sorts by this order, so
//! the declaration order is load-bearing only in that it must be total.

use serde::{Deserialize, Serialize};

/// A chemical element symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    H,
    C,
    N,
    O,
    S,
    Cl,
    Na,
    Mg,
    Al,
    Fe,
    Cu,
    Ag,
}

impl Element {
    /// Every element, in declaration order.
    pub const ALL: [Element; 12] = [
        Element::H,
        Element::C,
        Element::N,
        Element::O,
        Element::S,
        Element::Cl,
        Element::Na,
        Element::Mg,
        Element::Al,
        Element::Fe,
        Element::Cu,
        Element::Ag,
    ];

    /// Periodic-table symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Fe => "Fe",
            Element::Cu => "Cu",
            Element::Ag => "Ag",
        }
    }

    /// Atomic number, shown in the card corner.
    #[must_use]
    pub const fn atomic_number(self) -> u8 {
        match self {
            Element::H => 1,
            Element::C => 6,
            Element::N => 7,
            Element::O => 8,
            Element::Na => 11,
            Element::Mg => 12,
            Element::Al => 13,
            Element::S => 16,
            Element::Cl => 17,
            Element::Fe => 26,
            Element::Cu => 29,
            Element::Ag => 47,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An environmental trigger some reactions require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    Heat,
    Spark,
    FeCatalyst,
    PtCatalyst,
    Water,
    None,
}

impl Condition {
    /// Every condition, in declaration order.
    pub const ALL: [Condition; 6] = [
        Condition::Heat,
        Condition::Spark,
        Condition::FeCatalyst,
        Condition::PtCatalyst,
        Condition::Water,
        Condition::None,
    ];

    /// Stable ASCII key, used in logs and JSON label tables.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Condition::Heat => "Heat",
            Condition::Spark => "Spark",
            Condition::FeCatalyst => "FeCatalyst",
            Condition::PtCatalyst => "PtCatalyst",
            Condition::Water => "Water",
            Condition::None => "None",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
