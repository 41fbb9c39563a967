// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim. Approximates what a
/// browser reports as an element's visible text.
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

/// Last whitespace-delimited token, or "" for blank input.
/// `"ID de la credencial ABC-123"` → `"ABC-123"`.
pub fn last_token(s: &str) -> &str {
    s.split_whitespace().next_back().unwrap_or("")
}
