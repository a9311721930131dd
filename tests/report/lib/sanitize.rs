use std::sync::LazyLock;

use regex::Regex;

static CURSOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches the cursor jump to the first column: ESC [ 1 G
    Regex::new(r"\x1b\[1G").unwrap()
});

static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches SGR sequences such as ESC [ 42 m or ESC [ 0 m
    Regex::new(r"\x1b\[[0-9;]*m").unwrap()
});

/// Turn colored output into what the reporter prints without colors.
pub fn sanitize_ansi(input: &str) -> String {
    // 1. The cursor jump is a carriage return in plain output
    let tmp = CURSOR_RE.replace_all(input, "\r");

    // 2. Drop all styling
    let tmp = STYLE_RE.replace_all(tmp.as_ref(), "");

    tmp.to_string()
}
