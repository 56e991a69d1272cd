//! Color constants for the card.
//!
//! Soft blush palette on an almost-white background.

// === BACKGROUND ===
pub const PAPER: &str = "#fffafb";
pub const PAPER_VEIL: &str = "rgba(255, 250, 251, 0.5)";
pub const ENVELOPE: &str = "#ffffff";

// === PINK (text, accents, seal) ===
pub const PINK_50: &str = "#fdf2f8";
pub const PINK_100: &str = "#fce7f3";
pub const PINK_200: &str = "#fbcfe8";
pub const PINK_300: &str = "#f9a8d4";
pub const PINK_400: &str = "#f472b6";
pub const PINK_500: &str = "#ec4899";
pub const PINK_600: &str = "#db2777";

// === HEARTS ===
pub const HEART_RED: &str = "#ff4d6d";

// === VIEWER ===
pub const VIEWER_BACKDROP: &str = "rgba(0, 0, 0, 0.95)";

/// Palette as CSS custom properties, one per constant.
pub fn css_variables() -> String {
    let palette = [
        ("paper", PAPER),
        ("paper-veil", PAPER_VEIL),
        ("envelope", ENVELOPE),
        ("pink-50", PINK_50),
        ("pink-100", PINK_100),
        ("pink-200", PINK_200),
        ("pink-300", PINK_300),
        ("pink-400", PINK_400),
        ("pink-500", PINK_500),
        ("pink-600", PINK_600),
        ("heart-red", HEART_RED),
        ("viewer-backdrop", VIEWER_BACKDROP),
    ];

    let mut css = String::from(":root {\n");
    for (name, value) in palette {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push('}');
    css
}
