// src/core/sanitize.rs

/// Collapse runs of whitespace (including newlines) to one space and trim.
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

/// First `max` characters of `s`, cut on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_ix, _)) => &s[..byte_ix],
        None => s,
    }
}

/// One-line preview for table cells: whitespace collapsed, cut at `max` chars with '…'.
pub fn preview(s: &str, max: usize) -> String {
    let flat = normalize_ws(s);
    if flat.chars().count() <= max {
        return flat;
    }
    let mut out = truncate_chars(&flat, max.saturating_sub(1)).trim_end().to_string();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("ñandú", 3), "ñan");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn preview_ellipsizes() {
        assert_eq!(preview("hola   mundo", 20), "hola mundo");
        assert_eq!(preview("uno dos tres", 6), "uno d…");
    }
}
