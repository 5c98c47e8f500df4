//! Core types: ids, ingredient tokens, display labels, configuration, errors.

pub mod entity;
pub mod token;
pub mod labels;
pub mod config;
pub mod error;

pub use entity::{EntityAllocator, EntityId};
pub use token::{Condition, Element};
pub use labels::{DisplayLabels, Messages};
pub use config::DuelConfig;
pub use error::SynthError;
