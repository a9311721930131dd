use crate::{
    outcome::{SuiteResult, TestRecord},
    stats::{average, compare_durations, duration_of, median, sum},
};

/// Everything the reporter accumulates during a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    suite_results: Vec<SuiteResult>,
    test_results: Vec<TestRecord>,
    suite_total_times_sum: u64,
    num_started: usize,
    started: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a launched suite, returns `true` for the very first one.
    pub fn record_start(&mut self) -> bool {
        self.num_started += 1;
        !std::mem::replace(&mut self.started, true)
    }

    /// Append a finished suite and its tests, returns the suite's duration.
    pub fn record_suite(&mut self, path: String, tests: Vec<TestRecord>) -> u64 {
        let duration_ms = sum(&tests, duration_of);
        self.suite_total_times_sum += duration_ms;
        self.test_results.extend(tests);
        self.suite_results.push(SuiteResult { duration_ms, path });
        duration_ms
    }

    pub fn suite_results(&self) -> &[SuiteResult] {
        &self.suite_results
    }

    pub fn test_results(&self) -> &[TestRecord] {
        &self.test_results
    }

    pub fn suite_total_times_sum(&self) -> u64 {
        self.suite_total_times_sum
    }

    pub fn num_started(&self) -> usize {
        self.num_started
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Finish the run, sorting everything slowest first.
    pub fn into_summary(self) -> RunSummary {
        let RunState {
            mut suite_results,
            mut test_results,
            suite_total_times_sum,
            ..
        } = self;
        suite_results.sort_by(compare_durations);
        test_results.sort_by(compare_durations);
        RunSummary {
            suites: suite_results,
            tests: test_results,
            total_ms: suite_total_times_sum,
        }
    }
}

/// The sorted results of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub suites: Vec<SuiteResult>,
    pub tests: Vec<TestRecord>,
    pub total_ms: u64,
}

impl RunSummary {
    pub fn suite_average_ms(&self) -> f64 {
        average(self.total_ms, self.suites.len())
    }

    pub fn test_average_ms(&self) -> f64 {
        average(self.total_ms, self.tests.len())
    }

    pub fn suite_median_ms(&self) -> f64 {
        median(&self.suites, duration_of)
    }

    pub fn test_median_ms(&self) -> f64 {
        median(&self.tests, duration_of)
    }

    pub fn slow_suites(&self, min_ms: u64) -> impl Iterator<Item = &SuiteResult> {
        self.suites.iter().filter(move |suite| suite.duration_ms >= min_ms)
    }

    pub fn slow_tests(&self, min_ms: u64) -> impl Iterator<Item = &TestRecord> {
        self.tests.iter().filter(move |test| test.duration_ms >= min_ms)
    }
}
