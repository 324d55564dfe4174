// ABOUTME: Shared string helpers for the CMS console
// ABOUTME: Blank checks used by validation and truncation used by table output

/// True when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Truncate to at most `max` characters, marking the cut with an ellipsis
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = value.chars().take(keep).collect();
    out.push('…');
    out
}
