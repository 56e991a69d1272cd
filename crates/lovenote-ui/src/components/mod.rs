//! Reusable UI components for the card.

mod button;
mod icons;

pub use button::*;
pub use icons::*;
