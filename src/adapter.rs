//! Mapping of host runner payloads into reporter records.
//!
//! The host serializes its lifecycle callbacks as one JSON object per line,
//! tagged by an `event` field and using its own camelCase field names:
//!
//! ```json
//! {"event":"runStart","estimatedTime":12}
//! {"event":"testStart","path":"/repo/src/a.test.js"}
//! {"event":"testResult","path":"/repo/src/a.test.js","testResults":[{"fullName":"a should work","duration":12}],"numPassedTestSuites":1,"numTotalTestSuites":2}
//! {"event":"runComplete","numTotalTests":1,"numPassedTests":1,"numFailedTests":0,"numPendingTests":0,"numRuntimeErrorTestSuites":0}
//! ```
//!
//! Unknown fields are ignored, so full host payloads can be passed through.

use std::{io::BufRead, time::Duration};

use serde::Deserialize;

use crate::{
    error::ReportError,
    formatter::RunReporter,
    outcome::{RunCounts, RunStart, SuiteOutcome, TestRecord, TestStart},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HostEvent {
    RunStart(HostRunStart),
    TestStart(HostTestStart),
    TestResult(HostTestResult),
    RunComplete(HostAggregatedResult),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRunStart {
    /// Seconds.
    #[serde(default)]
    pub estimated_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostTestStart {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostAssertion {
    pub full_name: String,
    /// Missing for tests that never ran.
    #[serde(default)]
    pub duration: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostTestResult {
    pub path: String,
    #[serde(default)]
    pub test_results: Vec<HostAssertion>,
    #[serde(default)]
    pub num_passed_test_suites: usize,
    #[serde(default)]
    pub num_total_test_suites: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostAggregatedResult {
    pub num_total_tests: usize,
    pub num_passed_tests: usize,
    pub num_failed_tests: usize,
    pub num_pending_tests: usize,
    pub num_runtime_error_test_suites: usize,
}

impl From<HostRunStart> for RunStart {
    fn from(value: HostRunStart) -> Self {
        Self {
            estimated_time: Duration::try_from_secs_f64(value.estimated_time).unwrap_or_default(),
        }
    }
}

impl From<HostTestStart> for TestStart {
    fn from(value: HostTestStart) -> Self {
        Self { path: value.path }
    }
}

impl From<HostAssertion> for TestRecord {
    fn from(value: HostAssertion) -> Self {
        Self {
            full_name: value.full_name,
            duration_ms: value.duration.unwrap_or_default(),
        }
    }
}

impl From<HostTestResult> for SuiteOutcome {
    fn from(value: HostTestResult) -> Self {
        Self {
            path: value.path,
            tests: value.test_results.into_iter().map(TestRecord::from).collect(),
            passed_suites: value.num_passed_test_suites,
            total_suites: value.num_total_test_suites,
        }
    }
}

impl From<HostAggregatedResult> for RunCounts {
    fn from(value: HostAggregatedResult) -> Self {
        Self {
            total_tests: value.num_total_tests,
            passed_tests: value.num_passed_tests,
            failed_tests: value.num_failed_tests,
            pending_tests: value.num_pending_tests,
            runtime_error_suites: value.num_runtime_error_test_suites,
        }
    }
}

impl HostEvent {
    /// Hand this event to the matching callback of `reporter`.
    pub fn dispatch<R: RunReporter>(self, reporter: &mut R) -> Result<(), R::Error> {
        match self {
            HostEvent::RunStart(data) => reporter.on_run_start(data.into()),
            HostEvent::TestStart(data) => reporter.on_test_start(data.into()),
            HostEvent::TestResult(data) => reporter.on_test_result(data.into()),
            HostEvent::RunComplete(data) => reporter.on_run_complete(data.into()),
        }
    }
}

/// Feed newline delimited host events to `reporter`, in order.
///
/// Blank lines are skipped. Returns the number of dispatched events.
pub fn replay<B, R>(input: B, reporter: &mut R) -> Result<usize, ReportError>
where
    B: BufRead,
    R: RunReporter<Error = ReportError>,
{
    let mut dispatched = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: HostEvent =
            serde_json::from_str(&line).map_err(|source| ReportError::InvalidEvent {
                line: index + 1,
                source,
            })?;
        event.dispatch(reporter)?;
        dispatched += 1;
    }

    tracing::debug!(dispatched, "host events replayed");
    Ok(dispatched)
}
