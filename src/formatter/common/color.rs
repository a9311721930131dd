use std::io;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    #[default]
    Automatic,
    Always,
    Never,
}

pub(crate) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BG_RED: &str = "\x1b[41m";
    pub const BG_GREEN: &str = "\x1b[42m";
    pub const BG_BLUE: &str = "\x1b[44m";
    pub const BG_WHITE: &str = "\x1b[47m";
}

/// A single terminal style. Several styles compose by concatenating their codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Black,
    Red,
    Green,
    Yellow,
    BgRed,
    BgGreen,
    BgBlue,
    BgWhite,
}

impl Style {
    pub const fn code(self) -> &'static str {
        use colors::*;
        match self {
            Style::Bold => BOLD,
            Style::Black => BLACK,
            Style::Red => RED,
            Style::Green => GREEN,
            Style::Yellow => YELLOW,
            Style::BgRed => BG_RED,
            Style::BgGreen => BG_GREEN,
            Style::BgBlue => BG_BLUE,
            Style::BgWhite => BG_WHITE,
        }
    }
}

/// Wrap `text` in the codes of `styles` followed by a reset.
///
/// Without any styles the text is returned unchanged.
pub fn styled(text: &str, styles: &[Style]) -> String {
    if styles.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + styles.len() * 5 + colors::RESET.len());
    for style in styles {
        out.push_str(style.code());
    }
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Like [`styled`], but only when `use_color` is set.
pub fn paint(text: &str, styles: &[Style], use_color: bool) -> String {
    match use_color {
        true => styled(text, styles),
        false => text.to_string(),
    }
}

pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl<T: io::IsTerminal> SupportsColor for T {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}

impl ColorSetting {
    /// Resolve this setting against a concrete target.
    pub fn use_color(&self, target: &impl SupportsColor) -> bool {
        match self {
            ColorSetting::Automatic => target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}
