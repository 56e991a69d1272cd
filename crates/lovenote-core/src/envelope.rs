//! Envelope state machine.
//!
//! Each recipient gets an [`Envelope`]. It moves between three states:
//!
//! | From | Event | To | Side effect |
//! |------|-------|----|-------------|
//! | Closed | activate | Open | one burst |
//! | Open | close | Closed | |
//! | Open | activate image | OpenFullscreen | |
//! | OpenFullscreen | activate image / close viewer / backdrop | Open | |
//!
//! There is no edge between `Closed` and `OpenFullscreen` in either
//! direction. Closing from fullscreen steps through `Open` first.

use std::time::Duration;

use crate::burst::{BurstConfig, BurstEffect};
use crate::card::Recipient;
use crate::motion::{Easing, Motion};

/// How long a closed envelope takes to grow under the pointer.
pub const HOVER_CUE: Duration = Duration::from_millis(250);

/// Where an envelope is in its open/close cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EnvelopeState {
    #[default]
    Closed,
    Open,
    /// Open, with the photo shown in the fullscreen viewer
    OpenFullscreen,
}

impl EnvelopeState {
    pub fn is_open(&self) -> bool {
        matches!(self, EnvelopeState::Open | EnvelopeState::OpenFullscreen)
    }

    pub fn is_fullscreen(&self) -> bool {
        matches!(self, EnvelopeState::OpenFullscreen)
    }

    /// CSS modifier class for the envelope body.
    pub fn class(&self) -> &'static str {
        match self {
            EnvelopeState::Closed => "envelope closed",
            EnvelopeState::Open | EnvelopeState::OpenFullscreen => "envelope open",
        }
    }
}

/// Inline style giving the envelope its springy hover cue.
pub fn hover_style() -> String {
    format!("transition: {};", Easing::Spring.transition("transform", HOVER_CUE))
}

/// The letter sliding up out of an opened envelope, once the flap is away.
pub fn letter_reveal() -> Motion {
    Motion::new("letter-reveal", Duration::from_millis(700))
        .keyframe(0.0, &[("bottom", "10%"), ("transform", "scale(0.8)"), ("opacity", "0")])
        .keyframe(1.0, &[("bottom", "45%"), ("transform", "scale(1)"), ("opacity", "1")])
        .delay(Duration::from_millis(300))
        .easing(Easing::Spring)
}

/// One recipient's envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    recipient: Recipient,
    burst: BurstConfig,
    state: EnvelopeState,
}

impl Envelope {
    /// A closed envelope using the default burst.
    pub fn new(recipient: Recipient) -> Self {
        Self::with_burst(recipient, BurstConfig::default())
    }

    pub fn with_burst(recipient: Recipient, burst: BurstConfig) -> Self {
        Self {
            recipient,
            burst,
            state: EnvelopeState::Closed,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    /// Open the envelope, firing one burst through `effect`.
    ///
    /// Does nothing if the envelope is already open. Returns `true` when the
    /// envelope actually opened. The burst fires again on every reopen after
    /// a close.
    pub fn open<E: BurstEffect + ?Sized>(&mut self, effect: &mut E) -> bool {
        if self.state.is_open() {
            return false;
        }

        self.transition(EnvelopeState::Open);
        effect.fire(&self.burst);
        true
    }

    /// Close the envelope.
    ///
    /// From fullscreen this leaves the viewer first, so the envelope ends up
    /// closed and not fullscreen. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        match self.state {
            EnvelopeState::Closed => false,
            EnvelopeState::OpenFullscreen => {
                self.transition(EnvelopeState::Open);
                self.transition(EnvelopeState::Closed);
                true
            }
            EnvelopeState::Open => {
                self.transition(EnvelopeState::Closed);
                true
            }
        }
    }

    /// Show or hide the fullscreen viewer.
    ///
    /// Only reachable while open; returns `false` when the envelope is
    /// closed and nothing changed.
    pub fn toggle_fullscreen(&mut self) -> bool {
        let next = match self.state {
            EnvelopeState::Closed => return false,
            EnvelopeState::Open => EnvelopeState::OpenFullscreen,
            EnvelopeState::OpenFullscreen => EnvelopeState::Open,
        };
        self.transition(next);
        true
    }

    /// Leave the fullscreen viewer, staying open.
    ///
    /// Unlike [`toggle_fullscreen`](Self::toggle_fullscreen) this never
    /// enters the viewer; returns `false` when it was not showing.
    pub fn close_viewer(&mut self) -> bool {
        if !self.state.is_fullscreen() {
            return false;
        }
        self.transition(EnvelopeState::Open);
        true
    }

    fn transition(&mut self, next: EnvelopeState) {
        tracing::debug!(
            recipient = %self.recipient.name,
            "Envelope {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burst::RecordingBurst;

    fn envelope() -> Envelope {
        Envelope::new(Recipient::new("Gunjan", "/3.jpg"))
    }

    #[test]
    fn starts_closed() {
        let env = envelope();
        assert_eq!(env.state(), EnvelopeState::Closed);
        assert!(!env.state().is_open());
        assert!(!env.state().is_fullscreen());
    }

    #[test]
    fn open_fires_exactly_one_burst() {
        let mut env = envelope();
        let mut burst = RecordingBurst::default();

        assert!(env.open(&mut burst));
        assert_eq!(env.state(), EnvelopeState::Open);
        assert_eq!(burst.count(), 1);
        assert_eq!(burst.fired[0], BurstConfig::default());

        assert!(!env.open(&mut burst));
        assert_eq!(burst.count(), 1);
    }

    #[test]
    fn open_while_fullscreen_is_a_no_op() {
        let mut env = envelope();
        let mut burst = RecordingBurst::default();
        env.open(&mut burst);
        env.toggle_fullscreen();

        assert!(!env.open(&mut burst));
        assert_eq!(env.state(), EnvelopeState::OpenFullscreen);
        assert_eq!(burst.count(), 1);
    }

    #[test]
    fn fullscreen_unreachable_from_closed() {
        let mut env = envelope();
        assert!(!env.toggle_fullscreen());
        assert_eq!(env.state(), EnvelopeState::Closed);
    }

    #[test]
    fn toggle_fullscreen_alternates() {
        let mut env = envelope();
        env.open(&mut RecordingBurst::default());

        let mut previous = env.state().is_fullscreen();
        for _ in 0..5 {
            assert!(env.toggle_fullscreen());
            assert_eq!(env.state().is_fullscreen(), !previous);
            assert!(env.state().is_open());
            previous = env.state().is_fullscreen();
        }
    }

    #[test]
    fn close_from_fullscreen_ends_closed_and_not_fullscreen() {
        let mut env = envelope();
        env.open(&mut RecordingBurst::default());
        env.toggle_fullscreen();

        assert!(env.close());
        assert_eq!(env.state(), EnvelopeState::Closed);
        assert!(!env.state().is_open());
        assert!(!env.state().is_fullscreen());
    }

    #[test]
    fn close_viewer_only_leaves_fullscreen() {
        let mut env = envelope();
        assert!(!env.close_viewer());

        env.open(&mut RecordingBurst::default());
        assert!(!env.close_viewer());
        assert_eq!(env.state(), EnvelopeState::Open);

        env.toggle_fullscreen();
        assert!(env.close_viewer());
        assert_eq!(env.state(), EnvelopeState::Open);
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut env = envelope();
        assert!(!env.close());
        assert_eq!(env.state(), EnvelopeState::Closed);
    }

    #[test]
    fn burst_rearms_after_close() {
        let mut env = envelope();
        let mut burst = RecordingBurst::default();

        env.open(&mut burst);
        env.close();
        env.open(&mut burst);
        assert_eq!(burst.count(), 2);
    }

    #[test]
    fn custom_burst_is_forwarded() {
        let config = BurstConfig {
            particle_count: 10,
            ..BurstConfig::default()
        };
        let mut env = Envelope::with_burst(Recipient::new("Bbhavesh", "/2.jpg"), config.clone());
        let mut burst = RecordingBurst::default();
        env.open(&mut burst);
        assert_eq!(burst.fired, vec![config]);
    }

    #[test]
    fn reveal_springs_up_after_the_flap() {
        let motion = letter_reveal();
        assert_eq!(motion.easing, Easing::Spring);
        assert_eq!(
            motion.animation(),
            "letter-reveal 0.7s cubic-bezier(0.34, 1.56, 0.64, 1) 0.3s 1 both"
        );
        assert!(motion.keyframes_css().contains("100% { bottom: 45%; transform: scale(1); opacity: 1; }"));
    }

    #[test]
    fn hover_cue_uses_spring_easing() {
        assert_eq!(
            hover_style(),
            "transition: transform 0.25s cubic-bezier(0.34, 1.56, 0.64, 1);"
        );
    }

    #[test]
    fn state_classes() {
        assert_eq!(EnvelopeState::Closed.class(), "envelope closed");
        assert_eq!(EnvelopeState::Open.class(), "envelope open");
        assert_eq!(EnvelopeState::OpenFullscreen.class(), "envelope open");
    }
}
