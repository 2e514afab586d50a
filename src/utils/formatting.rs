//! Text formatting helpers for the touch pad demo.

/// Formats a pad timestamp as seconds with millisecond precision.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_timestamp(1_234), "1.234 s");
/// ```
pub fn format_timestamp(t_ms: u64) -> String {
    format!("{}.{:03} s", t_ms / 1000, t_ms % 1000)
}

/// Renders a JSON value on one line, cut to at most `max_chars` characters.
pub fn summarize_json(value: &serde_json::Value, max_chars: usize) -> String {
    let text = value.to_string();
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
