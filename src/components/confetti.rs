//! Confetti layer.
//!
//! [`ConfettiLauncher`] is the desktop [`BurstEffect`]: firing it generates
//! the burst's pieces and hands them to [`ConfettiLayer`], which draws every
//! live burst above the page. A burst removes itself once its pieces have
//! landed.

use dioxus::prelude::*;
use lovenote_core::burst::BURST_LIFETIME;
use lovenote_core::{generate_burst, BurstConfig, BurstEffect, BurstOrigin, ConfettiPiece, Motion};
use rand::rngs::StdRng;

use crate::context::{make_rng, use_confetti, CONFETTI_SALT};

/// One burst currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveBurst {
    pub id: u64,
    pub origin: BurstOrigin,
    pub pieces: Vec<ConfettiPiece>,
}

impl ActiveBurst {
    /// Motion of a piece, named uniquely across bursts.
    fn piece_motion(&self, piece: &ConfettiPiece) -> Motion {
        let mut motion = piece.motion();
        motion.name = format!("confetti-{}-{}", self.id, piece.id);
        motion
    }

    fn keyframes_css(&self) -> String {
        self.pieces
            .iter()
            .map(|piece| self.piece_motion(piece).keyframes_css())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Shared handle for firing bursts. Cheap to copy.
#[derive(Clone, Copy, PartialEq)]
pub struct ConfettiLauncher {
    bursts: Signal<Vec<ActiveBurst>>,
    next_id: Signal<u64>,
    rng: Signal<StdRng>,
}

impl ConfettiLauncher {
    /// Create the launcher. Must be called inside a component.
    pub fn new() -> Self {
        Self {
            bursts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
            rng: Signal::new(make_rng(CONFETTI_SALT)),
        }
    }

    pub fn bursts(&self) -> Signal<Vec<ActiveBurst>> {
        self.bursts
    }
}

impl BurstEffect for ConfettiLauncher {
    fn fire(&mut self, config: &BurstConfig) {
        let pieces = generate_burst(config, &mut *self.rng.write());
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);

        tracing::debug!("Firing burst {} with {} pieces", id, pieces.len());
        self.bursts.write().push(ActiveBurst {
            id,
            origin: config.origin,
            pieces,
        });

        // Remove the burst once every piece has landed
        let mut bursts = self.bursts;
        spawn(async move {
            tokio::time::sleep(BURST_LIFETIME).await;
            bursts.write().retain(|b| b.id != id);
        });
    }
}

/// Draws every live burst above the page.
#[component]
pub fn ConfettiLayer() -> Element {
    let launcher = use_confetti();
    let bursts: Vec<ActiveBurst> = launcher.bursts().read().clone();

    rsx! {
        div { class: "confetti-layer", "aria-hidden": "true",
            for burst in bursts.iter() {
                {
                    let anchor = format!(
                        "left: {}%; top: {}%;",
                        burst.origin.x * 100.0,
                        burst.origin.y * 100.0
                    );
                    rsx! {
                        div { key: "{burst.id}", class: "confetti-burst", style: anchor,
                            style { {burst.keyframes_css()} }
                            for piece in burst.pieces.iter() {
                                {
                                    let piece_style = format!(
                                        "background: {}; width: {}px; height: {}px; {}",
                                        piece.color,
                                        piece.size_px,
                                        piece.size_px * 0.6,
                                        burst.piece_motion(piece).style()
                                    );
                                    rsx! {
                                        div { key: "{piece.id}", class: "confetti-piece", style: piece_style }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
