//! Build-time deployment configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app can be served from the domain root or from a path prefix (for
//! static hosting under a project sub-path). The prefix is baked in at build
//! time from `QBV_BASE_PATH`; the server reads the same variable at runtime so
//! both sides agree on route and asset URLs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the deployment path prefix.
pub const BASE_PATH_ENV: &str = "QBV_BASE_PATH";

/// Normalize a raw prefix to `/segment[/segment]` or the empty string.
///
/// Surrounding whitespace and slashes are stripped; a value that is empty
/// after trimming means a root deployment.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Path prefix compiled into this build (empty for a root deployment).
pub fn base_path() -> String {
    normalize_base_path(option_env!("QBV_BASE_PATH").unwrap_or_default())
}

/// Join `path` onto `base`, keeping exactly one slash between them.
pub fn join_path(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        if base.is_empty() { "/".to_owned() } else { base.to_owned() }
    } else {
        format!("{base}/{path}")
    }
}

/// Static asset path (`/pkg/...`), including the build's base path.
///
/// In-app navigation does not need this: the router resolves absolute route
/// paths against its `base`.
pub fn asset_path(path: &str) -> String {
    join_path(&base_path(), path)
}
