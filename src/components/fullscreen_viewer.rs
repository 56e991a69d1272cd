//! Fullscreen photo viewer.
//!
//! Dark overlay above everything else. The close button and the backdrop
//! both dismiss it; clicks on the photo itself do not.

use dioxus::prelude::*;
use lovenote_ui::CloseButton;

#[component]
pub fn FullscreenViewer(image: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "viewer-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },

            div {
                class: "viewer-frame",
                onclick: move |evt| evt.stop_propagation(),

                img { class: "viewer-image", src: "{image}", alt: "Fullscreen" }
                CloseButton {
                    class: "viewer-close".to_string(),
                    onclick: move |_| on_close.call(()),
                }
            }
        }
    }
}
