use std::{fmt::Debug, io, time::Duration};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::spinner::{Spinner, SpinnerProvider};

pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(80);

type DrawTargetFn = Box<dyn Fn() -> ProgressDrawTarget + Send + Sync>;

/// A [`Spinner`] backed by an [`indicatif`] spinner.
///
/// Every start draws a fresh bar, stopping finishes it and clears its line.
pub struct TerminalSpinner {
    text: String,
    use_color: bool,
    interval: Duration,
    draw_target: DrawTargetFn,
    bar: Option<ProgressBar>,
}

impl TerminalSpinner {
    /// A spinner on stderr, hidden when stderr is not a terminal.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_draw_target(text, ProgressDrawTarget::stderr)
    }

    /// A spinner that only tracks its state.
    pub fn hidden(text: impl Into<String>) -> Self {
        Self::from_draw_target(text, ProgressDrawTarget::hidden)
    }

    pub fn from_draw_target(
        text: impl Into<String>,
        draw_target: impl Fn() -> ProgressDrawTarget + Send + Sync + 'static,
    ) -> Self {
        Self {
            text: text.into(),
            use_color: true,
            interval: DEFAULT_INTERVAL,
            draw_target: Box::new(draw_target),
            bar: None,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    fn style(&self) -> ProgressStyle {
        let template = match self.use_color {
            true => "{spinner:.cyan} {msg}",
            false => "{spinner} {msg}",
        };
        ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(DOTS)
    }
}

impl Spinner for TerminalSpinner {
    fn start(&mut self) -> io::Result<()> {
        if self.bar.is_some() {
            return Ok(());
        }

        let bar = ProgressBar::with_draw_target(None, (self.draw_target)())
            .with_style(self.style())
            .with_message(self.text.clone());
        bar.enable_steady_tick(self.interval);
        self.bar = Some(bar);
        tracing::trace!(text = %self.text, "spinner started");
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
            tracing::trace!("spinner stopped");
        }
        Ok(())
    }

    fn set_text(&mut self, text: String) {
        if let Some(bar) = &self.bar {
            bar.set_message(text.clone());
        }
        self.text = text;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn is_spinning(&self) -> bool {
        self.bar.is_some()
    }
}

impl Drop for TerminalSpinner {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            tracing::warn!(%err, "failed to stop spinner");
        }
    }
}

impl Debug for TerminalSpinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSpinner")
            .field("text", &self.text)
            .field("use_color", &self.use_color)
            .field("interval", &self.interval)
            .field("spinning", &self.is_spinning())
            .finish_non_exhaustive()
    }
}

/// Provides [`TerminalSpinner`]s drawing on stderr.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSpinnerProvider;

impl SpinnerProvider for DefaultSpinnerProvider {
    type Spinner = TerminalSpinner;

    fn provide(&self, text: String, use_color: bool) -> Self::Spinner {
        TerminalSpinner::new(text).with_color(use_color)
    }
}
