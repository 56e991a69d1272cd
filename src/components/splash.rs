//! Splash shown while the card is "crafting".

use std::time::Duration;

use dioxus::prelude::*;
use lovenote_core::Motion;
use lovenote_ui::HeartIcon;

#[component]
pub fn Splash(caption: String) -> Element {
    let spin = Motion::spin("splash-spin", Duration::from_secs(2));
    let appear = Motion::fade_in("splash-appear", Duration::from_millis(400), 1.0, 0.0);

    rsx! {
        style { {format!("{}\n{}", spin.keyframes_css(), appear.keyframes_css())} }
        div { class: "splash", style: appear.style(),
            div { class: "splash-heart", style: spin.style(),
                HeartIcon { size: 64, filled: true }
            }
            p { class: "splash-caption", "{caption}" }
        }
    }
}
