//! Animations described as data.
//!
//! A [`Motion`] is a list of keyframes plus timing (duration, delay, easing,
//! repeat policy). The renderer turns it into a CSS `@keyframes` block and an
//! `animation` shorthand; nothing here knows how the frames get painted.

use std::fmt::Write as _;
use std::time::Duration;

/// Timing function for a motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
    EaseOut,
    /// Overshooting curve standing in for a physical spring
    Spring,
}

impl Easing {
    /// CSS timing function for this easing.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOut => "ease-out",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }

    /// CSS `transition` value easing `property` over `duration`.
    pub fn transition(&self, property: &str, duration: Duration) -> String {
        format!("{} {} {}", property, seconds(duration), self.css())
    }
}

/// How many times a motion plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    Infinite,
}

impl Repeat {
    /// CSS `animation-iteration-count` value.
    pub fn css(&self) -> &'static str {
        match self {
            Repeat::Once => "1",
            Repeat::Infinite => "infinite",
        }
    }
}

/// A single keyframe: an offset in `[0, 1]` and the style properties at it.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub offset: f64,
    pub properties: Vec<(String, String)>,
}

/// An animation from a start state to an end state, with optional
/// intermediate keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    pub name: String,
    pub keyframes: Vec<Keyframe>,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Motion {
    /// Create an empty motion with the given keyframes name and duration.
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            keyframes: Vec::new(),
            duration,
            delay: Duration::ZERO,
            easing: Easing::default(),
            repeat: Repeat::default(),
        }
    }

    /// Add a keyframe at `offset` (clamped to `[0, 1]`).
    ///
    /// Keyframes are kept sorted by offset; a later call at the same offset
    /// is placed after the earlier one.
    pub fn keyframe(mut self, offset: f64, properties: &[(&str, &str)]) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let frame = Keyframe {
            offset,
            properties: properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        let index = self.keyframes.partition_point(|k| k.offset <= offset);
        self.keyframes.insert(index, frame);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// A full turn around the z axis, forever.
    pub fn spin(name: impl Into<String>, duration: Duration) -> Self {
        Self::new(name, duration)
            .keyframe(0.0, &[("transform", "rotate(0deg)")])
            .keyframe(1.0, &[("transform", "rotate(360deg)")])
            .repeat(Repeat::Infinite)
    }

    /// Fade from transparent to `opacity` while rising `rise_px` pixels.
    ///
    /// Ends on `transform: none` so the element does not keep a containing
    /// block for fixed-position descendants.
    pub fn fade_in(name: impl Into<String>, duration: Duration, opacity: f64, rise_px: f64) -> Self {
        let start_shift = format!("translateY({}px)", rise_px);
        let end_opacity = opacity.to_string();
        Self::new(name, duration)
            .keyframe(0.0, &[("opacity", "0"), ("transform", &start_shift)])
            .keyframe(1.0, &[("opacity", &end_opacity), ("transform", "none")])
            .easing(Easing::EaseInOut)
    }

    /// Render the `@keyframes` block.
    pub fn keyframes_css(&self) -> String {
        let mut css = format!("@keyframes {} {{", self.name);
        for frame in &self.keyframes {
            let _ = write!(css, " {} {{", percent(frame.offset));
            for (property, value) in &frame.properties {
                let _ = write!(css, " {}: {};", property, value);
            }
            css.push_str(" }");
        }
        css.push_str(" }");
        css
    }

    /// Render the CSS `animation` shorthand value.
    pub fn animation(&self) -> String {
        format!(
            "{} {} {} {} {} both",
            self.name,
            seconds(self.duration),
            self.easing.css(),
            seconds(self.delay),
            self.repeat.css(),
        )
    }

    /// Inline style declaration applying this motion.
    pub fn style(&self) -> String {
        format!("animation: {};", self.animation())
    }
}

fn percent(offset: f64) -> String {
    let rounded = (offset * 10_000.0).round() / 100.0;
    format!("{}%", rounded)
}

fn seconds(duration: Duration) -> String {
    format!("{}s", duration.as_millis() as f64 / 1000.0)
}
