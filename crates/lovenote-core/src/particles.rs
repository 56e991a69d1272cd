//! Ambient heart field.
//!
//! A fixed batch of hearts is generated once when the field mounts. Every
//! heart gets its own position, size and timing, drawn uniformly from the
//! ranges below, and loops forever on those values.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;

use crate::motion::{Easing, Motion, Repeat};

/// Number of hearts in the ambient field.
pub const HEART_COUNT: usize = 20;
/// Largest heart field a card may ask for.
pub const MAX_HEART_COUNT: usize = 200;

/// Horizontal position, in percent of the viewport width.
pub const POSITION_RANGE: Range<f64> = 0.0..100.0;
/// Glyph size in pixels.
pub const SIZE_RANGE: Range<f64> = 10.0..50.0;
/// Seconds for one rise across the screen.
pub const DURATION_RANGE: Range<f64> = 15.0..25.0;
/// Seconds before the first rise starts.
pub const DELAY_RANGE: Range<f64> = 0.0..5.0;
/// Horizontal sway waypoints, in pixels.
pub const SWAY_RANGE: Range<f64> = -50.0..50.0;

/// Peak opacity of a heart mid-flight.
const PEAK_OPACITY: &str = "0.4";

/// One floating heart.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleDescriptor {
    pub id: usize,
    pub left_percent: f64,
    pub size_px: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
    /// Horizontal offsets the heart sways through on its way up
    pub sway_px: [f64; 2],
}

impl ParticleDescriptor {
    /// Horizontal position as a CSS percentage (e.g. `"42.5%"`).
    pub fn left(&self) -> String {
        format!("{}%", self.left_percent)
    }

    /// Keyframes name unique to this heart.
    pub fn animation_name(&self) -> String {
        format!("heart-drift-{}", self.id)
    }

    /// The endless upward drift of this heart.
    ///
    /// Rises from below the viewport to above it, fading in and out, while
    /// swaying through its two waypoints.
    pub fn motion(&self) -> Motion {
        let [first, second] = self.sway_px;
        let start = "translate(0px, 110vh)".to_string();
        let sway = format!("translate({}px, 50vh)", first);
        let end = format!("translate({}px, -10vh)", second);
        // Opacity keys sit at thirds, sway keys at halves; the y travel is linear.
        let one_third = format!("translate({}px, 70vh)", first * 2.0 / 3.0);
        let two_thirds = format!("translate({}px, 30vh)", (2.0 * first + second) / 3.0);

        Motion::new(self.animation_name(), Duration::from_secs_f64(self.duration_secs))
            .keyframe(0.0, &[("transform", &start), ("opacity", "0")])
            .keyframe(1.0 / 3.0, &[("transform", &one_third), ("opacity", PEAK_OPACITY)])
            .keyframe(0.5, &[("transform", &sway)])
            .keyframe(2.0 / 3.0, &[("transform", &two_thirds), ("opacity", PEAK_OPACITY)])
            .keyframe(1.0, &[("transform", &end), ("opacity", "0")])
            .delay(Duration::from_secs_f64(self.delay_secs))
            .easing(Easing::Linear)
            .repeat(Repeat::Infinite)
    }

    /// Inline style placing and animating this heart.
    pub fn style(&self) -> String {
        format!(
            "left: {}; font-size: {}px; {}",
            self.left(),
            self.size_px,
            self.motion().style()
        )
    }
}

/// Generate `count` hearts with every field drawn independently from `rng`.
pub fn generate_particles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ParticleDescriptor> {
    let particles: Vec<ParticleDescriptor> = (0..count)
        .map(|id| ParticleDescriptor {
            id,
            left_percent: rng.random_range(POSITION_RANGE),
            size_px: rng.random_range(SIZE_RANGE),
            duration_secs: rng.random_range(DURATION_RANGE),
            delay_secs: rng.random_range(DELAY_RANGE),
            sway_px: [rng.random_range(SWAY_RANGE), rng.random_range(SWAY_RANGE)],
        })
        .collect();

    tracing::debug!("Generated {} ambient hearts", particles.len());
    particles
}
