use super::*;

// =============================================================
// ring_color
// =============================================================

#[test]
fn ring_color_endpoints_are_red_and_green() {
    assert_eq!(ring_color(0.0).hue, 0.0);
    assert_eq!(ring_color(100.0).hue, 120.0);
}

#[test]
fn ring_color_midpoint_is_yellow() {
    assert!((ring_color(50.0).hue - 60.0).abs() < 1e-9);
}

#[test]
fn ring_color_fixed_saturation_and_lightness() {
    let color = ring_color(37.0);
    assert_eq!(color.saturation, 100.0);
    assert_eq!(color.lightness, 45.0);
}

#[test]
fn ring_color_displays_as_css_hsl() {
    assert_eq!(ring_color(11.0).to_string(), "hsl(13.2, 100%, 45%)");
    assert_eq!(ring_color(0.0).to_string(), "hsl(0, 100%, 45%)");
    assert_eq!(ring_color(100.0).to_string(), "hsl(120, 100%, 45%)");
}

#[test]
fn ring_color_extrapolates_out_of_range_scores() {
    assert!((ring_color(150.0).hue - 180.0).abs() < 1e-9);
    assert!((ring_color(-10.0).hue + 12.0).abs() < 1e-9);
}

#[test]
fn ring_css_matches_float_variant() {
    assert_eq!(ring_css(50), ring_color(50.0).to_string());
}

// =============================================================
// status_class
// =============================================================

#[test]
fn status_class_maps_known_labels() {
    assert_eq!(status_class("Strong Performer"), "status--green");
    assert_eq!(status_class("Below Average"), "status--yellow");
    assert_eq!(status_class("Underperformer"), "status--orange");
    assert_eq!(status_class("Critically Behind"), "status--red");
}

#[test]
fn status_class_falls_back_to_gray() {
    assert_eq!(status_class("Market Leader"), "status--gray");
    assert_eq!(status_class(""), "status--gray");
}
