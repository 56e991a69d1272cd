//! Page components for Lovenote.

mod home;

pub use home::Home;
