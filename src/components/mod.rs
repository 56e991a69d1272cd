//! UI Components for Lovenote.
//!
//! The envelope widget and the decorative layers around it.

mod confetti;
mod fullscreen_viewer;
mod heart_field;
mod letter;
mod splash;

pub use confetti::{ConfettiLauncher, ConfettiLayer};
pub use fullscreen_viewer::FullscreenViewer;
pub use heart_field::HeartField;
pub use letter::Letter;
pub use splash::Splash;
