//! Letter - the envelope widget for one recipient.
//!
//! Closed, it shows the recipient's name tag and a heart seal and grows a
//! little on hover. Clicking it opens the flap, fires a confetti burst and
//! slides the letter (photo + name) up. The photo opens the fullscreen
//! viewer; "Close Letter" folds everything back.

use dioxus::prelude::*;
use lovenote_core::{hover_style, letter_reveal, Envelope, EnvelopeState, Recipient};
use lovenote_ui::{Button, ExpandIcon, HeartIcon};

use super::FullscreenViewer;
use crate::context::{use_card, use_confetti};

#[component]
pub fn Letter(recipient: Recipient) -> Element {
    let card = use_card();
    let mut confetti = use_confetti();
    let mut envelope = use_signal(|| Envelope::with_burst(recipient.clone(), card.burst.clone()));

    let state = envelope.read().state();
    let is_open = state.is_open();
    let name = recipient.name.clone();
    let image = recipient.image.clone();
    let alt = recipient.alt_text();
    let reveal = letter_reveal().style();

    let open_envelope = move |_| {
        if envelope.write().open(&mut confetti) {
            tracing::info!("Opened letter for {}", envelope.read().recipient().name);
        }
    };

    let toggle_photo = move |evt: MouseEvent| {
        // Never let a photo click reach the envelope underneath
        evt.stop_propagation();
        envelope.write().toggle_fullscreen();
    };

    rsx! {
        div { class: "letter-slot",
            div {
                class: state.class(),
                style: hover_style(),
                onclick: open_envelope,

                div { class: "envelope-body",
                    // Top flap, rotates away when opened
                    div { class: "envelope-flap",
                        div { class: "flap-triangle" }
                        if !is_open {
                            div { class: "envelope-seal",
                                HeartIcon { size: 24, filled: true }
                            }
                        }
                    }

                    if !is_open {
                        div { class: "name-tag",
                            p { "{name}" }
                        }
                    }

                    if is_open {
                        div { class: "letter-paper", style: "{reveal}",
                            div { class: "letter-photo", onclick: toggle_photo,
                                img { src: "{image}", alt: "{alt}" }
                                div { class: "photo-hover",
                                    div { class: "expand-badge",
                                        ExpandIcon { size: 20 }
                                    }
                                }
                            }
                            div { class: "letter-signature",
                                HeartIcon { size: 20, filled: true, class: "pulse".to_string() }
                                p { class: "letter-name", "{name}" }
                            }
                        }
                    }

                    // Side and bottom pockets
                    div { class: "envelope-pockets",
                        div { class: "pocket-bottom" }
                        div { class: "pocket-left" }
                        div { class: "pocket-right" }
                    }
                }

                div { class: "envelope-shadow" }
            }

            if is_open {
                Button {
                    class: "close-letter".to_string(),
                    onclick: move |_| {
                        envelope.write().close();
                    },
                    "Close Letter"
                }
            }
        }

        if state == EnvelopeState::OpenFullscreen {
            FullscreenViewer {
                image: recipient.image.clone(),
                on_close: move |_| {
                    envelope.write().close_viewer();
                },
            }
        }
    }
}
