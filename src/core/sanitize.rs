// src/core/sanitize.rs

/// Non-breaking space as decoded from `&nbsp;`.
pub const NBSP: char = '\u{a0}';

pub fn normalize_nbsp(s: &str) -> String {
    s.replace(NBSP, " ")
}

/// Collapse whitespace runs into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trimmed copy, or `None` when nothing is left.
pub fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

/// Digits at the very end of `s` (`".../node/view/12345"` → `"12345"`).
pub fn trailing_digits(s: &str) -> Option<&str> {
    let s = s.trim_end_matches('/');
    let start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    Some(&s[start..])
}
