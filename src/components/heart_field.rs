//! Ambient heart field.
//!
//! Hearts are generated once when the field mounts and loop forever on
//! their own timing. Purely decorative: no pointer events, behind everything.

use dioxus::prelude::*;
use lovenote_core::generate_particles;

use crate::context::{make_rng, HEART_SALT};

#[component]
pub fn HeartField(count: usize) -> Element {
    let hearts = use_hook(|| generate_particles(count, &mut make_rng(HEART_SALT)));

    let keyframes = hearts
        .iter()
        .map(|heart| heart.motion().keyframes_css())
        .collect::<Vec<_>>()
        .join("\n");

    rsx! {
        div { class: "heart-field", "aria-hidden": "true",
            style { {keyframes} }
            div { class: "heart-field-veil" }
            for heart in hearts.iter() {
                div {
                    key: "{heart.id}",
                    class: "floating-heart",
                    style: heart.style(),
                    "\u{2764}"
                }
            }
        }
    }
}
