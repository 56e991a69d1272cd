//! Inline SVG Icons
//!
//! Stroke icons drawn on a 24x24 grid. Color comes from `currentColor`, so
//! the surrounding text color applies.

use dioxus::prelude::*;

/// Heart outline path on the 24x24 grid.
pub const HEART_PATH: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

/// Properties shared by the icons
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    /// Width and height in pixels
    #[props(default = 24)]
    pub size: u32,
    /// Fill the shape instead of only stroking it
    #[props(default = false)]
    pub filled: bool,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn HeartIcon(props: IconProps) -> Element {
    let fill = if props.filled { "currentColor" } else { "none" };
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "icon heart-icon {class}",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: HEART_PATH }
        }
    }
}

/// Four outward corners.
#[component]
pub fn ExpandIcon(props: IconProps) -> Element {
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            polyline { points: "15 3 21 3 21 9" }
            polyline { points: "9 21 3 21 3 15" }
            line { x1: "21", y1: "3", x2: "14", y2: "10" }
            line { x1: "3", y1: "21", x2: "10", y2: "14" }
        }
    }
}

#[component]
pub fn CloseIcon(props: IconProps) -> Element {
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_props_hold_values() {
        let props = IconProps {
            size: 64,
            filled: true,
            class: Some("splash-heart".to_string()),
        };
        assert_eq!(props.size, 64);
        assert!(props.filled);
        assert_eq!(props.class.as_deref(), Some("splash-heart"));
    }
}
