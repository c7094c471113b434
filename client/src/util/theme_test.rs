#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_business_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Business);
}

#[test]
fn toggle_flips_between_business_and_winter() {
    assert_eq!(toggle(Theme::Business), Theme::Winter);
    assert_eq!(toggle(Theme::Winter), Theme::Business);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Business);
    apply(Theme::Winter);
}

#[test]
fn parse_accepts_stored_names_only() {
    assert_eq!(Theme::parse("business"), Some(Theme::Business));
    assert_eq!(Theme::parse(" winter "), Some(Theme::Winter));
    assert_eq!(Theme::parse("dark"), None);
}

#[test]
fn business_is_the_dark_theme() {
    assert!(Theme::Business.is_dark());
    assert!(!Theme::Winter.is_dark());
}
