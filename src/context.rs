//! Card context for Lovenote.
//!
//! The card and the confetti launcher are provided once by `App` and read by
//! any component through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let card = use_card();
//! let mut confetti = use_confetti();
//! envelope.write().open(&mut confetti);
//! ```

use dioxus::prelude::*;
use lovenote_core::CardConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::ConfettiLauncher;

/// Salt separating the heart field's random stream from the confetti's.
pub const HEART_SALT: u64 = 0x4845_4152_5453;
pub const CONFETTI_SALT: u64 = 0x434f_4e46_4554;

/// Get the card set from the command line.
pub fn get_card() -> CardConfig {
    crate::get_card()
}

/// Random source for one consumer.
///
/// Seeded runs derive a stable stream per salt; otherwise the OS seeds it.
pub fn make_rng(salt: u64) -> StdRng {
    match crate::get_seed() {
        Some(seed) => StdRng::seed_from_u64(seed ^ salt),
        None => StdRng::from_os_rng(),
    }
}

/// Hook to access the card from context.
pub fn use_card() -> CardConfig {
    use_context::<CardConfig>()
}

/// Hook to access the confetti launcher from context.
pub fn use_confetti() -> ConfettiLauncher {
    use_context::<ConfettiLauncher>()
}
