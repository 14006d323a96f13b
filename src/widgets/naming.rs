//! Widget name sanitizing and default name generation.

use std::sync::OnceLock;

use regex::Regex;

/// Default upper bound on widget name length, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 30;

fn disallowed_chars() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("name charset regex must compile"))
}

/// Strip every character outside `[A-Za-z0-9_]` and cap the result at
/// `max_len` characters.
///
/// Applying it twice yields the same string as applying it once.
pub fn sanitize_widget_name(raw: &str, max_len: usize) -> String {
    let cleaned = disallowed_chars().replace_all(raw, "");
    cleaned.chars().take(max_len).collect()
}

/// First `{prefix}{n}` (n >= 1) that `is_taken` rejects.
pub fn next_widget_name(prefix: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut index = 1usize;
    loop {
        let candidate = format!("{prefix}{index}");
        if !is_taken(&candidate) {
            return candidate;
        }
        index += 1;
    }
}
