//! Helpers for turning user input into safe directory names and for keeping
//! personal data out of tracing span attributes.

use std::path::Path;

/// Makes one component of a document directory name.
///
/// Whitespace becomes `_`, and so do path separators, so a single component
/// can never introduce a nested directory.
pub fn directory_component(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Returns only the filename component of a path (no directory).
///
/// Safe for span fields: reveals the file name, never the full path.
pub fn redact_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}

/// Strips userinfo and query string from a URL.
///
/// - `https://user:pw@jobs.example/p?token=x` → `https://****@jobs.example/p`
/// - `https://jobs.example/p` → `https://jobs.example/p` (no change)
pub fn redact_url(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);

    if let Some(scheme_end) = without_query.find("://") {
        let after_scheme = &without_query[scheme_end + 3..];
        let host_end = after_scheme.find('/').unwrap_or(after_scheme.len());
        if let Some(at_pos) = after_scheme[..host_end].rfind('@') {
            let scheme = &without_query[..scheme_end + 3];
            return format!("{}****@{}", scheme, &after_scheme[at_pos + 1..]);
        }
    }

    without_query.to_string()
}
