use crate::formatter::common::color::{Style, paint};

pub const DEFAULT_BANNER_STYLES: &[Style] = &[Style::BgBlue, Style::Bold];

/// Center `label` in `width` columns, preceded by a blank line.
///
/// Falls back to [`DEFAULT_BANNER_STYLES`] when `styles` is empty.
/// The returned string has no trailing newline.
pub fn banner(label: &str, width: usize, styles: &[Style], use_color: bool) -> String {
    let padding = " ".repeat(width.saturating_sub(label.chars().count()) / 2);
    let styles = match styles.is_empty() {
        true => DEFAULT_BANNER_STYLES,
        false => styles,
    };
    format!(
        "\n{}",
        paint(&format!("{padding}{label}{padding}"), styles, use_color)
    )
}
