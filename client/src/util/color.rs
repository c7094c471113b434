//! Score-to-color mapping for rings, bars, and status labels.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

/// Hue at score 0 (red).
pub const RING_HUE_MIN: f64 = 0.0;
/// Hue at score 100 (green).
pub const RING_HUE_MAX: f64 = 120.0;
pub const RING_SATURATION_PCT: f64 = 100.0;
pub const RING_LIGHTNESS_PCT: f64 = 45.0;

/// A color in HSL space. Displays as a CSS `hsl(...)` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Map a 0–100 score onto the red→green gradient.
///
/// The hue is linear in the score and is not clamped: scores outside
/// `[0, 100]` extrapolate past red or green.
pub fn ring_color(score: f64) -> Hsl {
    Hsl {
        hue: RING_HUE_MIN + (score / 100.0) * (RING_HUE_MAX - RING_HUE_MIN),
        saturation: RING_SATURATION_PCT,
        lightness: RING_LIGHTNESS_PCT,
    }
}

/// CSS color string for an integer score.
pub fn ring_css(score: u8) -> String {
    ring_color(f64::from(score)).to_string()
}

/// CSS class for a status label such as "Strong Performer".
pub fn status_class(status: &str) -> &'static str {
    match status {
        "Strong Performer" => "status--green",
        "Below Average" => "status--yellow",
        "Underperformer" => "status--orange",
        "Critically Behind" => "status--red",
        _ => "status--gray",
    }
}
