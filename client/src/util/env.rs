//! Build-environment lookups: API base path and static asset locations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server forwards `/api/*` to the generation backend, so the
//! default base is same-origin. Builds targeting a different origin set
//! `VC_API_BASE` at compile time.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// API base used when `VC_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Image shown until a request produces a preview or result.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.png";

/// Resolved API base without a trailing slash.
pub fn api_base() -> String {
    normalize_base(option_env!("VC_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

/// Join `path` onto the configured API base.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
