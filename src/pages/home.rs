//! Home page - the page shell of the card.
//!
//! Shows the splash until the splash timer fires, then the title, one
//! envelope per recipient and the hint. The heart field, the confetti layer
//! and the footer stay up the whole time.

use std::time::Duration;

use dioxus::prelude::*;
use lovenote_core::{letter_reveal, LoadPhase, Motion, ScopedTimer};

use crate::components::{ConfettiLayer, HeartField, Letter, Splash};
use crate::context::use_card;

/// Home page component.
///
/// The splash is one-shot: once the content is up it stays up.
#[component]
pub fn Home() -> Element {
    let card = use_card();
    let mut phase = use_signal(LoadPhase::new);

    // Splash timer. The task belongs to this component, so unmounting drops
    // the timer, which cancels it.
    let delay = card.splash_delay();
    use_hook(move || {
        spawn(async move {
            let mut timer = ScopedTimer::start(delay);
            if timer.expired().await && phase.write().finish() {
                tracing::info!("Splash done after {:?}", delay);
            }
        })
    });

    let content = Motion::fade_in("content-rise", Duration::from_secs(1), 1.0, 20.0);
    let hint = Motion::fade_in("hint-fade", Duration::from_millis(500), 0.4, 0.0)
        .delay(Duration::from_millis(1500));
    let motion_css = format!(
        "{}\n{}\n{}",
        content.keyframes_css(),
        hint.keyframes_css(),
        letter_reveal().keyframes_css()
    );

    rsx! {
        main { class: "main-container",
            HeartField { count: card.heart_count }
            ConfettiLayer {}

            if phase().is_loading() {
                Splash { caption: card.splash_caption.clone() }
            } else {
                style { {motion_css} }
                div { class: "content", style: content.style(),
                    div { class: "title-block",
                        h1 { class: "title", "{card.title}" }
                    }

                    div { class: "letters-grid",
                        for (index, recipient) in card.recipients.iter().enumerate() {
                            Letter { key: "{index}", recipient: recipient.clone() }
                        }
                    }

                    div { class: "hint", style: hint.style(),
                        p { "{card.hint}" }
                    }
                }
            }

            footer { class: "footer", "{card.footer}" }
        }
    }
}
