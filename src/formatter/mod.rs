//! Reporters consuming the host runner's lifecycle.
//!
//! The host drives a reporter through four callbacks, always in this order and
//! never concurrently:
//!
//! 1. [`RunReporter::on_run_start`] once,
//! 2. [`RunReporter::on_test_start`] whenever a suite is launched,
//! 3. [`RunReporter::on_test_result`] whenever a suite finished,
//! 4. [`RunReporter::on_run_complete`] once.
//!
//! Steps 2 and 3 interleave freely. Implement [`RunReporter`] to render a run
//! in a different way.

use crate::outcome::{RunCounts, RunStart, SuiteOutcome, TestStart};

pub mod common;

mod stats;
pub use stats::*;

pub trait RunReporter {
    type Error;

    fn on_run_start(&mut self, data: RunStart) -> Result<(), Self::Error>;

    fn on_test_start(&mut self, data: TestStart) -> Result<(), Self::Error>;

    fn on_test_result(&mut self, data: SuiteOutcome) -> Result<(), Self::Error>;

    fn on_run_complete(&mut self, data: RunCounts) -> Result<(), Self::Error>;
}
