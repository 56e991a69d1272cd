//! Celebratory confetti burst.
//!
//! Opening an envelope fires one burst through a [`BurstEffect`]. The
//! desktop app renders it with [`generate_burst`], which turns a
//! [`BurstConfig`] into pieces with precomputed flight paths.
//!
//! The physics follows the usual confetti model: each piece starts at a
//! random velocity along a random angle inside the spread, slows by a fixed
//! decay every frame, and falls under constant gravity.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};
use crate::motion::{Easing, Motion};

/// Frames a piece stays alive.
pub const TICKS: u32 = 200;
/// Mean start velocity, in pixels per frame.
pub const START_VELOCITY: f64 = 45.0;
/// Velocity multiplier applied every frame.
pub const DECAY: f64 = 0.9;
/// Downward pull, in pixels per frame.
pub const GRAVITY: f64 = 3.0;
/// Direction the burst is aimed at, in degrees (90 is straight up).
pub const LAUNCH_ANGLE: f64 = 90.0;
/// Time a burst stays on screen.
pub const BURST_LIFETIME: Duration = Duration::from_millis(TICKS as u64 * 1000 / 60);

/// Largest burst a card may ask for.
pub const MAX_PARTICLE_COUNT: usize = 1000;

const FALLBACK_COLOR: &str = "#ff4d6d";

/// Normalized viewport point a burst starts from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurstOrigin {
    pub x: f64,
    pub y: f64,
}

impl Default for BurstOrigin {
    fn default() -> Self {
        Self { x: 0.5, y: 0.6 }
    }
}

/// Fixed parameters of the celebratory burst.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub particle_count: usize,
    /// Full opening angle of the burst cone, in degrees
    pub spread_deg: f64,
    pub origin: BurstOrigin,
    /// Colors assigned to pieces in order, cycling
    pub colors: Vec<String>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            spread_deg: 80.0,
            origin: BurstOrigin::default(),
            colors: vec![
                "#ff4d6d".to_string(),
                "#ff8fa3".to_string(),
                "#ffccd5".to_string(),
            ],
        }
    }
}

impl BurstConfig {
    /// Reject configurations that cannot produce a visible burst.
    pub fn validate(&self) -> CardResult<()> {
        if self.particle_count == 0 {
            return Err(CardError::Invalid("burst particle_count must be positive".into()));
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(CardError::Invalid(format!(
                "burst particle_count {} exceeds {}",
                self.particle_count, MAX_PARTICLE_COUNT
            )));
        }
        if self.colors.is_empty() {
            return Err(CardError::Invalid("burst colors must not be empty".into()));
        }
        if !(0.0..=360.0).contains(&self.spread_deg) {
            return Err(CardError::Invalid(format!(
                "burst spread_deg {} outside 0..=360",
                self.spread_deg
            )));
        }
        let BurstOrigin { x, y } = self.origin;
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
            return Err(CardError::Invalid(format!(
                "burst origin ({}, {}) outside the unit square",
                x, y
            )));
        }
        Ok(())
    }
}

/// Something that can show a burst. Fire-and-forget.
pub trait BurstEffect {
    fn fire(&mut self, config: &BurstConfig);
}

/// Burst effect that only remembers what it was asked to fire.
#[derive(Clone, Debug, Default)]
pub struct RecordingBurst {
    pub fired: Vec<BurstConfig>,
}

impl RecordingBurst {
    pub fn count(&self) -> usize {
        self.fired.len()
    }
}

impl BurstEffect for RecordingBurst {
    fn fire(&mut self, config: &BurstConfig) {
        self.fired.push(config.clone());
    }
}

/// One piece of confetti with its flight path precomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    pub color: String,
    /// Launch direction in degrees, counter-clockwise from the positive x axis
    pub angle_deg: f64,
    /// Start velocity in pixels per frame
    pub velocity: f64,
    /// Displacement once the launch velocity has decayed
    pub peak_dx: f64,
    pub peak_dy: f64,
    /// Extra downward travel from gravity over the piece's life
    pub fall_px: f64,
    pub spin_deg: f64,
    pub size_px: f64,
}

impl ConfettiPiece {
    pub fn animation_name(&self) -> String {
        format!("confetti-{}", self.id)
    }

    /// Flight of this piece: shoot out to its peak, then drift down and fade.
    pub fn motion(&self) -> Motion {
        let peak = format!(
            "translate({:.1}px, {:.1}px) rotate({:.0}deg)",
            self.peak_dx,
            self.peak_dy,
            self.spin_deg / 4.0
        );
        let landing = format!(
            "translate({:.1}px, {:.1}px) rotate({:.0}deg)",
            self.peak_dx,
            self.peak_dy + self.fall_px,
            self.spin_deg
        );

        Motion::new(self.animation_name(), BURST_LIFETIME)
            .keyframe(0.0, &[("transform", "translate(0px, 0px) rotate(0deg)"), ("opacity", "1")])
            .keyframe(0.2, &[("transform", &peak), ("opacity", "1")])
            .keyframe(1.0, &[("transform", &landing), ("opacity", "0")])
            .easing(Easing::EaseOut)
    }
}

/// Distance a piece travels before its launch velocity is spent.
fn travel(velocity: f64) -> f64 {
    velocity * (1.0 - DECAY.powi(TICKS as i32)) / (1.0 - DECAY)
}

/// Generate the pieces of one burst.
pub fn generate_burst<R: Rng + ?Sized>(config: &BurstConfig, rng: &mut R) -> Vec<ConfettiPiece> {
    let half_spread = config.spread_deg / 2.0;

    (0..config.particle_count)
        .map(|id| {
            let offset = if half_spread > 0.0 {
                rng.random_range(-half_spread..half_spread)
            } else {
                0.0
            };
            let angle_deg = LAUNCH_ANGLE + offset;
            let velocity = START_VELOCITY * rng.random_range(0.5_f64..1.5);
            let distance = travel(velocity);
            let radians = angle_deg.to_radians();
            let color = if config.colors.is_empty() {
                FALLBACK_COLOR.to_string()
            } else {
                config.colors[id % config.colors.len()].clone()
            };

            ConfettiPiece {
                id,
                color,
                angle_deg,
                velocity,
                peak_dx: radians.cos() * distance,
                // Screen y grows downwards.
                peak_dy: -radians.sin() * distance,
                fall_px: GRAVITY * TICKS as f64 * rng.random_range(0.5_f64..1.0),
                spin_deg: rng.random_range(-720.0_f64..720.0),
                size_px: rng.random_range(6.0_f64..12.0),
            }
        })
        .collect()
}
