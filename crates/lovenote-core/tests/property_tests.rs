//! Property-based tests for the card's generators and state machine
//!
//! Uses proptest to verify invariants over arbitrary seeds and click
//! sequences.

use lovenote_core::particles::{DELAY_RANGE, DURATION_RANGE, POSITION_RANGE, SIZE_RANGE, SWAY_RANGE};
use lovenote_core::{
    generate_burst, generate_particles, BurstConfig, Envelope, EnvelopeState, Recipient,
    RecordingBurst, HEART_COUNT,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Clicks a user can make on one envelope
#[derive(Debug, Clone, Copy)]
enum Click {
    Envelope,
    Image,
    Backdrop,
    Close,
}

fn clicks_strategy(max: usize) -> impl Strategy<Value = Vec<Click>> {
    prop::collection::vec(
        prop_oneof![
            Just(Click::Envelope),
            Just(Click::Image),
            Just(Click::Backdrop),
            Just(Click::Close),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every mount produces exactly 20 hearts with every field in range
    #[test]
    fn hearts_stay_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let hearts = generate_particles(HEART_COUNT, &mut rng);

        prop_assert_eq!(hearts.len(), 20);
        for heart in &hearts {
            prop_assert!(POSITION_RANGE.contains(&heart.left_percent));
            prop_assert!(SIZE_RANGE.contains(&heart.size_px));
            prop_assert!(DURATION_RANGE.contains(&heart.duration_secs));
            prop_assert!(DELAY_RANGE.contains(&heart.delay_secs));
            prop_assert!(SWAY_RANGE.contains(&heart.sway_px[0]));
            prop_assert!(SWAY_RANGE.contains(&heart.sway_px[1]));
            prop_assert!(heart.left().ends_with('%'));
        }
    }

    /// The same seed always yields the same field
    #[test]
    fn hearts_are_deterministic_per_seed(seed in any::<u64>()) {
        let first = generate_particles(HEART_COUNT, &mut StdRng::seed_from_u64(seed));
        let second = generate_particles(HEART_COUNT, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }

    /// Bursts have one piece per particle and stay inside the cone
    #[test]
    fn burst_pieces_stay_in_cone(seed in any::<u64>(), spread in 0.0f64..180.0, count in 1usize..200) {
        let config = BurstConfig {
            particle_count: count,
            spread_deg: spread,
            ..BurstConfig::default()
        };
        let pieces = generate_burst(&config, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(pieces.len(), count);
        for piece in &pieces {
            prop_assert!((piece.angle_deg - 90.0).abs() <= spread / 2.0 + 1e-9);
            prop_assert!(config.colors.contains(&piece.color));
        }
    }

    /// No click sequence reaches fullscreen while closed, and every open
    /// from closed fires exactly one burst
    #[test]
    fn envelope_clicks_keep_invariants(clicks in clicks_strategy(50)) {
        let mut envelope = Envelope::new(Recipient::new("Gunjan", "/3.jpg"));
        let mut burst = RecordingBurst::default();
        let mut expected_bursts = 0;

        for click in clicks {
            let before = envelope.state();
            match click {
                Click::Envelope => {
                    envelope.open(&mut burst);
                    if before == EnvelopeState::Closed {
                        expected_bursts += 1;
                    }
                }
                Click::Image => {
                    envelope.toggle_fullscreen();
                    prop_assert_eq!(envelope.state().is_fullscreen(), before == EnvelopeState::Open);
                }
                Click::Backdrop => {
                    envelope.close_viewer();
                    let expected = if before.is_open() { EnvelopeState::Open } else { EnvelopeState::Closed };
                    prop_assert_eq!(envelope.state(), expected);
                }
                Click::Close => {
                    envelope.close();
                    prop_assert_eq!(envelope.state(), EnvelopeState::Closed);
                }
            }

            let state = envelope.state();
            prop_assert!(!(state.is_fullscreen() && !state.is_open()));
            prop_assert_eq!(burst.count(), expected_bursts);
        }
    }
}
