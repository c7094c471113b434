//! Social platform catalog for the "Add social media" dialog.

#[cfg(test)]
#[path = "social_test.rs"]
mod social_test;

/// A supported platform and the profile URL prefix a handle is appended to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialPlatform {
    pub name: &'static str,
    pub url_prefix: &'static str,
}

/// Prefix shown before a platform is selected.
pub const FALLBACK_URL_PREFIX: &str = "https://";

pub const PLATFORMS: &[SocialPlatform] = &[
    SocialPlatform { name: "Facebook", url_prefix: "https://www.facebook.com/" },
    SocialPlatform { name: "Instagram", url_prefix: "https://www.instagram.com/" },
    SocialPlatform { name: "Twitter", url_prefix: "https://twitter.com/" },
    SocialPlatform { name: "LinkedIn", url_prefix: "https://www.linkedin.com/company/" },
    SocialPlatform { name: "YouTube", url_prefix: "https://www.youtube.com/c/" },
    SocialPlatform { name: "TikTok", url_prefix: "https://www.tiktok.com/@" },
    SocialPlatform { name: "Pinterest", url_prefix: "https://www.pinterest.com/" },
    SocialPlatform { name: "Reddit", url_prefix: "https://www.reddit.com/user/" },
    SocialPlatform { name: "Medium", url_prefix: "https://medium.com/@" },
    SocialPlatform { name: "GitHub", url_prefix: "https://github.com/" },
    SocialPlatform { name: "Dribbble", url_prefix: "https://dribbble.com/" },
    SocialPlatform { name: "Behance", url_prefix: "https://www.behance.net/" },
    SocialPlatform { name: "Snapchat", url_prefix: "https://www.snapchat.com/add/" },
    SocialPlatform { name: "Discord", url_prefix: "https://discord.gg/" },
    SocialPlatform { name: "Twitch", url_prefix: "https://www.twitch.tv/" },
    SocialPlatform { name: "Vimeo", url_prefix: "https://vimeo.com/" },
    SocialPlatform { name: "Spotify", url_prefix: "https://open.spotify.com/user/" },
    SocialPlatform { name: "SoundCloud", url_prefix: "https://soundcloud.com/" },
];

/// Look up a platform by exact name.
pub fn find_platform(name: &str) -> Option<&'static SocialPlatform> {
    PLATFORMS.iter().find(|p| p.name == name)
}

/// Case-insensitive substring filter; an empty search returns every platform.
pub fn filter_platforms(search: &str) -> Vec<&'static SocialPlatform> {
    let needle = search.trim().to_lowercase();
    PLATFORMS
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

/// URL prefix to display for the current selection.
pub fn url_prefix_for(name: &str) -> &'static str {
    find_platform(name).map_or(FALLBACK_URL_PREFIX, |p| p.url_prefix)
}

/// Build a profile link from a platform name and handle.
///
/// Returns `None` for an unknown platform or a blank handle.
pub fn build_profile_link(platform: &str, handle: &str) -> Option<String> {
    let handle = handle.trim();
    if handle.is_empty() {
        return None;
    }
    find_platform(platform).map(|p| format!("{}{handle}", p.url_prefix))
}
