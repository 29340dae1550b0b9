// Sanitization utilities
use regex::Regex;
use std::sync::OnceLock;

fn non_alphanumeric() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)[^a-z0-9]").expect("static pattern is valid"))
}

/// Lowercased file stem with every non-alphanumeric character replaced by `_`
pub fn sanitize_filename(title: &str) -> String {
    non_alphanumeric()
        .replace_all(title, "_")
        .to_lowercase()
}

/// Truncate text to at most `max_chars` characters, ending with "..."
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
