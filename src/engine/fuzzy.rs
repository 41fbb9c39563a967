// src/engine/fuzzy.rs
//
// Boolean approximate matcher. No scores, no ranking: a target either
// contains the query's characters in order or it does not.

/// Case-insensitive subsequence match. The empty query matches everything.
pub fn matches(query: &str, target: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    let t = target.to_lowercase();

    // Substring is a special case of subsequence; checked first because it is cheap.
    if t.contains(&q) {
        return true;
    }
    is_subsequence(&q, &t)
}

/// Greedy left-to-right scan of `target`, consuming `query` chars in order.
fn is_subsequence(query: &str, target: &str) -> bool {
    let mut wanted = query.chars().peekable();
    for ch in target.chars() {
        match wanted.peek() {
            Some(&w) if w == ch => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

/// Case-insensitive contiguous containment.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
