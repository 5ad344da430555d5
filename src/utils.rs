//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Render `path` relative to `root` with `/` separators.
///
/// Falls back to the full path when `path` is not under `root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use goog_deps::utils::relative_path;
///
/// assert_eq!(relative_path(Path::new("./goog/dom/dom.js"), Path::new(".")), "goog/dom/dom.js");
/// assert_eq!(relative_path(Path::new("/src/a/b.js"), Path::new("/src")), "a/b.js");
/// assert_eq!(relative_path(Path::new("/other/b.js"), Path::new("/src")), "/other/b.js");
/// ```
pub fn relative_path(path: &Path, root: &Path) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return path.to_string_lossy().replace('\\', "/");
    };

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Quote a string as a single-quoted JavaScript string literal.
///
/// # Examples
///
/// ```
/// use goog_deps::utils::js_single_quoted;
///
/// assert_eq!(js_single_quoted("goog.dom"), "'goog.dom'");
/// assert_eq!(js_single_quoted("it's"), r"'it\'s'");
/// ```
pub fn js_single_quoted(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
