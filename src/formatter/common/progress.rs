//! A single line progress bar that spans the terminal width.

use crate::formatter::common::color::{Style, paint};

/// One part of a [`ProgressBar`]: a text and the styles it is drawn with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub styles: Vec<Style>,
}

impl Segment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    pub fn with_styles(self, styles: &[Style]) -> Self {
        Self {
            styles: styles.to_vec(),
            ..self
        }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Repeat the glyph so it covers `cells` columns.
    fn repeated(&self, cells: usize) -> String {
        match self.len() {
            0 => String::new(),
            len => self.text.repeat(cells / len),
        }
    }
}

/// Layout of a progress bar.
///
/// `start` and `end` are fixed labels around the bar, `done` is the glyph for
/// the filled part and `fill` the glyph for the remaining part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    pub start: Segment,
    pub end: Segment,
    pub done: Segment,
    pub fill: Segment,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            start: Segment::default(),
            end: Segment::default(),
            done: Segment::new("-"),
            fill: Segment::new(" "),
        }
    }
}

impl ProgressBar {
    pub fn with_start(self, start: Segment) -> Self {
        Self { start, ..self }
    }

    pub fn with_end(self, end: Segment) -> Self {
        Self { end, ..self }
    }

    pub fn with_done(self, done: Segment) -> Self {
        Self { done, ..self }
    }

    pub fn with_fill(self, fill: Segment) -> Self {
        Self { fill, ..self }
    }

    /// Split the usable width into `(filled, remaining)` cells.
    ///
    /// The filled part is rounded up. A `total` of zero fills nothing and
    /// `actual` above `total` fills everything.
    pub fn cells(&self, actual: usize, total: usize, width: usize) -> (usize, usize) {
        let usable = width.saturating_sub(self.start.len() + self.end.len());
        if total == 0 {
            return (0, usable);
        }

        let filled = actual.saturating_mul(usable).div_ceil(total).min(usable);
        (filled, usable - filled)
    }

    pub fn render(&self, actual: usize, total: usize, width: usize, use_color: bool) -> String {
        let (filled, remaining) = self.cells(actual, total, width);
        let mut out = String::new();
        out.push_str(&paint(&self.start.text, &self.start.styles, use_color));
        out.push_str(&paint(
            &self.done.repeated(filled),
            &self.done.styles,
            use_color,
        ));
        out.push_str(&paint(
            &self.fill.repeated(remaining),
            &self.fill.styles,
            use_color,
        ));
        out.push_str(&paint(&self.end.text, &self.end.styles, use_color));
        out
    }
}
