use dioxus::prelude::*;

use crate::components::ConfettiLauncher;
use crate::context::get_card;
use crate::pages::Home;
use crate::theme::{css_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the card, and the shared confetti launcher.
#[component]
pub fn App() -> Element {
    use_context_provider(get_card);
    use_context_provider(ConfettiLauncher::new);

    rsx! {
        style { {css_variables()} }
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
