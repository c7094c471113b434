use super::*;

#[test]
fn catalog_has_unique_names() {
    for (i, a) in PLATFORMS.iter().enumerate() {
        for b in &PLATFORMS[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn find_platform_is_exact() {
    assert_eq!(find_platform("GitHub").map(|p| p.url_prefix), Some("https://github.com/"));
    assert!(find_platform("github").is_none());
}

#[test]
fn filter_platforms_empty_search_returns_all() {
    assert_eq!(filter_platforms("").len(), PLATFORMS.len());
    assert_eq!(filter_platforms("   ").len(), PLATFORMS.len());
}

#[test]
fn filter_platforms_is_case_insensitive_substring() {
    let names: Vec<_> = filter_platforms("IN").into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Instagram", "LinkedIn", "Pinterest"]);
}

#[test]
fn filter_platforms_no_match_is_empty() {
    assert!(filter_platforms("myspace").is_empty());
}

#[test]
fn url_prefix_for_falls_back_when_unselected() {
    assert_eq!(url_prefix_for(""), FALLBACK_URL_PREFIX);
    assert_eq!(url_prefix_for("TikTok"), "https://www.tiktok.com/@");
}

#[test]
fn build_profile_link_trims_handle() {
    assert_eq!(
        build_profile_link("Instagram", "  acme "),
        Some("https://www.instagram.com/acme".to_owned())
    );
}

#[test]
fn build_profile_link_rejects_blank_handle_or_unknown_platform() {
    assert_eq!(build_profile_link("Instagram", "   "), None);
    assert_eq!(build_profile_link("Myspace", "acme"), None);
}
