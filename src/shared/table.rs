//! Text layout helpers used by the list view.
//! Keeps ANSI-aware width calculations in one place.

/// Labels are never squeezed below this many columns, even on very narrow
/// terminals.
pub const MIN_LABEL_WIDTH: usize = 12;

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut out =
        text.chars().take(max_width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

/// Fit `label` into what is left of `total` columns after a `prefix` that
/// may contain colour codes.
pub fn fit_label(prefix: &str, label: &str, total: usize) -> String {
    let room = total.saturating_sub(display_len(prefix)).max(MIN_LABEL_WIDTH);
    truncate_with_ellipsis(label, room)
}

/// Compute visible length of a string, ignoring ANSI escape sequences.
pub fn display_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        len += 1;
    }
    len
}
