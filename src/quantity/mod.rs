//! Physical quantities and the set of currently known values.
//!
//! The calculator works over a closed vocabulary of eight [`Quantity`]
//! variants. A [`KnownSet`] maps each solved quantity to its value and is
//! what every other module passes around.

mod known;
mod types;

pub use known::{KnownSet, Scientific};
pub use types::*;
