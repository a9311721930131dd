//! Common helpers for the reporter's terminal output.
//!
//! Everything in here renders into a `String` so the reporter decides when and
//! where it is written. Width and color decisions are passed in explicitly.

pub mod banner;
pub mod color;
pub mod duration;
pub mod progress;
pub mod width;
