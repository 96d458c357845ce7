// src/core/sanitize.rs

/// U+00AD, inserted by Duden as a hyphenation hint (`&shy;`).
pub const SOFT_HYPHEN: char = '\u{00AD}';

pub fn strip_soft_hyphens(s: &str) -> String {
    s.chars().filter(|&c| c != SOFT_HYPHEN).collect()
}

/// Collapse runs of whitespace (incl. NBSP) into one space and trim.
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

/// Drop empty strings from the end only. Interior gaps stay put.
pub fn trim_trailing_empty(v: &mut Vec<String>) {
    while v.last().is_some_and(|s| s.is_empty()) {
        v.pop();
    }
}
