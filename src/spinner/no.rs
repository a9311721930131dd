use std::io;

use crate::spinner::{Spinner, SpinnerProvider};

/// A [`Spinner`] that only tracks its state and never draws anything.
///
/// Useful when the output is not a terminal or when another system already
/// shows activity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoSpinner {
    text: String,
    spinning: bool,
}

impl NoSpinner {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spinning: false,
        }
    }
}

impl Spinner for NoSpinner {
    fn start(&mut self) -> io::Result<()> {
        self.spinning = true;
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        self.spinning = false;
        Ok(())
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn is_spinning(&self) -> bool {
        self.spinning
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoSpinnerProvider;

impl SpinnerProvider for NoSpinnerProvider {
    type Spinner = NoSpinner;

    fn provide(&self, text: String, _use_color: bool) -> Self::Spinner {
        NoSpinner::new(text)
    }
}
