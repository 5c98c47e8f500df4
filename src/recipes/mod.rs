//! Recipe definitions and the ordered catalog.

pub mod recipe;
pub mod catalog;

pub use recipe::{MoleculeRole, MoleculeTemplate, Recipe, SpecialEffect};
pub use catalog::{RecipeCatalog, MAX_INPUTS};
