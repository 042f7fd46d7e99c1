//! Url helpers for the document graph.
//!
//! The parent/child relation is never stored. It is derived from url paths:
//! `/a/b/c` is an immediate child of `/a/b`, while `/a/b/c/d` is not.

/// Marker segment separating the locale prefix from a document slug.
const DOCS_SEGMENT: &str = "docs";

/// Lowercase a url and strip trailing slashes, producing a lookup key.
///
/// `/en-US/docs/Web/HTTP/` → `/en-us/docs/web/http`
pub fn key(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() && url.starts_with('/') {
        return "/".to_string();
    }
    trimmed.to_lowercase()
}

/// Check whether `candidate` is exactly one path segment below `parent`.
///
/// Both arguments must already be keys (see [`key`]).
pub fn is_immediate_child(parent: &str, candidate: &str) -> bool {
    let parent = parent.trim_end_matches('/');
    candidate
        .strip_prefix(parent)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
}

/// Build the url of a document in `locale` from its slug.
///
/// `("es", "Web/HTTP")` → `/es/docs/Web/HTTP`
pub fn docs_url(locale: &str, slug: &str) -> String {
    format!("/{locale}/{DOCS_SEGMENT}/{}", slug.trim_matches('/'))
}

/// Root-first ancestor chain of `url`, ending with `url` itself.
///
/// Only prefixes below the `/<locale>/docs/` root are produced, so
/// `/en-US/docs/Web/HTTP/Overview` yields
/// `/en-US/docs/Web`, `/en-US/docs/Web/HTTP`, `/en-US/docs/Web/HTTP/Overview`.
/// Urls without a docs root fall back to every path prefix.
pub fn ancestor_urls(url: &str) -> Vec<String> {
    let segments: Vec<&str> = url
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    let skip = match segments.get(1) {
        Some(s) if s.eq_ignore_ascii_case(DOCS_SEGMENT) => 2,
        _ => 0,
    };

    (skip + 1..=segments.len())
        .map(|end| format!("/{}", segments[..end].join("/")))
        .collect()
}
