//! Card system: instances, templates, and hands.
//!
//! ## Key Types
//!
//! - `Card`: One physical card with a unique id and an element or condition payload
//! - `CardTemplate`: Static card data shared by every copy
//! - `CardFactory`: Mints cards from templates with fresh ids
//! - `Hand`: A player's ordered cards, cheap to snapshot

pub mod card;
pub mod template;
pub mod hand;

pub use card::{Card, CardCategory};
pub use template::{standard_condition_cards, standard_element_cards, CardFactory, CardTemplate};
pub use hand::Hand;
