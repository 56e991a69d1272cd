//! Lovenote Core Library
//!
//! The UI-free logic behind the animated greeting card.
//!
//! ## Overview
//!
//! The card shows a splash screen, then two envelopes over a field of
//! floating hearts. Opening an envelope fires a confetti burst and reveals a
//! photo that can be viewed fullscreen. Everything here is plain data and
//! small state machines; the desktop crate renders it with Dioxus.
//!
//! ## Modules
//!
//! - [`envelope`]: per-recipient `Closed` / `Open` / `OpenFullscreen` machine
//! - [`particles`]: ambient heart field generation
//! - [`burst`]: confetti burst configuration and generation
//! - [`motion`]: animations described as data and rendered to CSS
//! - [`shell`]: the one-shot splash gate and its scoped timer
//! - [`card`]: card configuration (texts, recipients, timings)
//!
//! ## Quick Start
//!
//! ```ignore
//! use lovenote_core::{Envelope, Recipient, RecordingBurst};
//!
//! let mut envelope = Envelope::new(Recipient::new("Gunjan", "/3.jpg"));
//! let mut burst = RecordingBurst::default();
//!
//! envelope.open(&mut burst);
//! envelope.toggle_fullscreen();
//! assert!(envelope.state().is_fullscreen());
//! ```

pub mod burst;
pub mod card;
pub mod envelope;
pub mod error;
pub mod motion;
pub mod particles;
pub mod shell;

// Re-exports
pub use burst::{
    generate_burst, BurstConfig, BurstEffect, BurstOrigin, ConfettiPiece, RecordingBurst,
    MAX_PARTICLE_COUNT,
};
pub use card::{CardConfig, Recipient};
pub use envelope::{hover_style, letter_reveal, Envelope, EnvelopeState, HOVER_CUE};
pub use error::{CardError, CardResult};
pub use motion::{Easing, Keyframe, Motion, Repeat};
pub use particles::{generate_particles, ParticleDescriptor, HEART_COUNT, MAX_HEART_COUNT};
pub use shell::{LoadPhase, ScopedTimer, SPLASH_DELAY};
