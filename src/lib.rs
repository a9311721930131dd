//! Live progress and timing summaries for test runs.
//!
//! A [`StatsReporter`] is attached to the lifecycle hooks of an external test
//! runner. It shows a spinner while suites launch, redraws a progress bar as
//! suites finish and prints the slowest suites and tests together with
//! aggregate timing statistics once the run completes.

pub mod adapter;
pub mod formatter;
pub mod outcome;
pub mod path;
pub mod spinner;
pub mod stats;

mod error;
pub use error::*;

mod report;
pub use report::*;

pub use formatter::{RunReporter, StatsReporter};
