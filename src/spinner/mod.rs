//! Spinners shown while the host launches test suites.
//!
//! A spinner is a small state machine with two states, stopped and spinning.
//! The reporter owns exactly one spinner per run and moves it between those
//! states with explicit calls. Whatever a spinner draws must be gone once
//! [`Spinner::stop`] returns, since the reporter writes its own lines right
//! after stopping it.
//!
//! Spinners are created through a [`SpinnerProvider`] at the start of every run.
//! Implement both traits to plug in a different spinner.

use std::io;

mod default;
pub use default::*;

mod no;
pub use no::*;

/// A display handle that signals ongoing work.
pub trait Spinner {
    /// Start spinning. Starting a spinning spinner does nothing.
    fn start(&mut self) -> io::Result<()>;

    /// Stop spinning and remove everything the spinner drew.
    ///
    /// Stopping a stopped spinner does nothing.
    fn stop(&mut self) -> io::Result<()>;

    /// Replace the label shown next to the spinner.
    fn set_text(&mut self, text: String);

    fn text(&self) -> &str;

    fn is_spinning(&self) -> bool;
}

/// Creates a fresh, stopped [`Spinner`] for every run.
pub trait SpinnerProvider {
    type Spinner: Spinner;

    /// `use_color` is the reporter's resolved color choice.
    fn provide(&self, text: String, use_color: bool) -> Self::Spinner;
}
