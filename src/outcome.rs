//! The records a reporter accepts from the host test runner.
//!
//! These shapes are the input contract of [`RunReporter`](crate::formatter::RunReporter).
//! They are deliberately decoupled from any concrete test runner; the
//! [`adapter`](crate::adapter) module maps one host format into them.

use std::time::Duration;

/// Data passed when a run begins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStart {
    /// How long the host expects the whole run to take.
    pub estimated_time: Duration,
}

/// Data passed when the host launches a test suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestStart {
    pub path: String,
}

/// The timing of a single test inside a suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRecord {
    pub full_name: String,
    pub duration_ms: u64,
}

impl TestRecord {
    pub fn new(full_name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            full_name: full_name.into(),
            duration_ms,
        }
    }
}

/// Data passed when a suite finished.
///
/// `passed_suites` and `total_suites` are the host's aggregate counts for the
/// whole run at the time this suite finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteOutcome {
    pub path: String,
    pub tests: Vec<TestRecord>,
    pub passed_suites: usize,
    pub total_suites: usize,
}

/// Final aggregate counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounts {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub pending_tests: usize,
    pub runtime_error_suites: usize,
}

impl RunCounts {
    pub fn all_passed(&self) -> bool {
        self.passed_tests == self.total_tests
    }

    /// Number of tests that did not pass, for whatever reason.
    pub fn not_passed(&self) -> usize {
        self.total_tests.saturating_sub(self.passed_tests)
    }
}

/// A finished suite as it is kept for the final report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteResult {
    pub duration_ms: u64,
    pub path: String,
}

/// Anything that carries a duration in milliseconds.
pub trait HasDuration {
    fn duration_ms(&self) -> u64;
}

impl HasDuration for SuiteResult {
    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

impl HasDuration for TestRecord {
    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}
