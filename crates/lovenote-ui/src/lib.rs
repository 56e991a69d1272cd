//! Lovenote UI Components
//!
//! Small presentational Dioxus components shared by the card:
//! - **Buttons**: pill-shaped text buttons and round icon buttons
//! - **Icons**: inline SVG heart, expand and close glyphs
//!
//! All components are styled through CSS classes defined in the desktop
//! crate's theme; nothing here carries state.

pub mod components;

pub use components::*;
