use std::time::Duration;

use pretty_assertions::assert_eq;
use suitestats::{
    ReportError, RunReporter,
    adapter::replay,
    formatter::common::color::ColorSetting,
    outcome::{RunCounts, RunStart, SuiteOutcome, TestRecord, TestStart},
    path::PathDisplay,
};

use lib::*;

fn drive(reporter: &mut impl RunReporter<Error = ReportError>, counts: RunCounts) {
    reporter
        .on_run_start(RunStart {
            estimated_time: Duration::from_secs(5),
        })
        .unwrap();
    reporter
        .on_test_start(TestStart {
            path: "/repo/src/a.test.js".into(),
        })
        .unwrap();
    reporter
        .on_test_start(TestStart {
            path: "/repo/src/b.test.js".into(),
        })
        .unwrap();
    reporter
        .on_test_result(SuiteOutcome {
            path: "/repo/src/a.test.js".into(),
            tests: vec![
                TestRecord::new("a should render", 12),
                TestRecord::new("a works", 3),
            ],
            passed_suites: 1,
            total_suites: 2,
        })
        .unwrap();
    reporter
        .on_test_result(SuiteOutcome {
            path: "/repo/src/b.test.js".into(),
            tests: vec![TestRecord::new("b works", 4)],
            passed_suites: 2,
            total_suites: 2,
        })
        .unwrap();
    reporter.on_run_complete(counts).unwrap();
}

const ALL_PASSED: RunCounts = RunCounts {
    total_tests: 3,
    passed_tests: 3,
    failed_tests: 0,
    pending_tests: 0,
    runtime_error_suites: 0,
};

fn expected_body() -> String {
    let cells = " ".repeat(14);
    [
        "\nEstimated Time: 5 seconds\n".to_string(),
        format!("\r1 / 2 Test Suites Finished{cells}"),
        format!("\r2 / 2 Test Suites Finished{cells}"),
        "\n\n".to_string(),
        format!("\n{0}Test Suites (≥ 10ms){0}\n", " ".repeat(10)),
        "15ms\tsrc/a.test.js\n".to_string(),
        format!("\n{0}Individual Tests (≥ 10ms){0}\n", " ".repeat(7)),
        "12ms\ta should render\n".to_string(),
        "\nTotal:\t\t\t  19ms  \n".to_string(),
        "Average (suites):\t9.5ms\n".to_string(),
        "Average (tests):\t6.333333333333333ms\n".to_string(),
        "Median (suites):\t9.5ms\n".to_string(),
        "Median (tests):\t\t4ms\n".to_string(),
    ]
    .concat()
}

#[test]
fn all_passed_run() {
    let buffer = Buffer::default();
    let mut reporter = reporter(&buffer).with_path_display(PathDisplay::RelativeTo("/repo".into()));
    drive(&mut reporter, ALL_PASSED);

    let expected = expected_body() + "\nTest results: 3 / 3 passed\n\n";
    assert_eq!(buffer.try_to_string().unwrap(), expected);
}

#[test]
fn failed_run_warns_about_durations() {
    let buffer = Buffer::default();
    let mut reporter = reporter(&buffer).with_path_display(PathDisplay::RelativeTo("/repo".into()));
    drive(
        &mut reporter,
        RunCounts {
            total_tests: 5,
            passed_tests: 3,
            failed_tests: 1,
            pending_tests: 1,
            runtime_error_suites: 1,
        },
    );

    let expected = expected_body()
        + "\nTest results: 3 / 5 passed: 1 failed, 1 runtime errors, 1 pending\n"
        + "  WARNING   2 tests did not pass, above durations may be inaccurate. \
           Run tests with default reporter for more detailed test output.\n\n";
    assert_eq!(buffer.try_to_string().unwrap(), expected);
}

#[test]
fn colored_run_emphasizes_should() {
    let buffer = Buffer::default();
    let mut reporter = reporter(&buffer)
        .with_path_display(PathDisplay::RelativeTo("/repo".into()))
        .with_color_setting(ColorSetting::Always);
    drive(&mut reporter, ALL_PASSED);

    let output = buffer.try_to_string().unwrap();
    let test_lines: Vec<_> = output
        .lines()
        .skip_while(|line| !line.contains("Individual Tests"))
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect();
    assert_eq!(
        test_lines,
        ["\x1b[32m12ms\x1b[0m\ta \x1b[1mshould\x1b[0m render"]
    );
    assert!(output.contains("\x1b[47m\x1b[30m  19ms  \x1b[0m"));
    assert!(!output.contains("WARNING"));

    let expected = expected_body() + "\nTest results: 3 / 3 passed\n\n";
    assert_eq!(sanitize_ansi(&output), expected);
}

#[test]
fn colored_warning_badge() {
    let buffer = Buffer::default();
    let mut reporter = reporter(&buffer).with_color_setting(ColorSetting::Always);
    drive(
        &mut reporter,
        RunCounts {
            total_tests: 5,
            passed_tests: 3,
            ..Default::default()
        },
    );

    let output = buffer.try_to_string().unwrap();
    assert!(output.contains("\x1b[41m\x1b[1m  WARNING  \x1b[0m 2 tests did not pass"));
}

#[test]
fn empty_run_reports_non_finite_averages() {
    let buffer = Buffer::default();
    let mut reporter = reporter(&buffer);
    reporter.on_run_start(RunStart::default()).unwrap();
    reporter.on_run_complete(RunCounts::default()).unwrap();

    let output = buffer.try_to_string().unwrap();
    assert!(output.contains("Average (suites):\tNaNms\n"));
    assert!(output.contains("Average (tests):\tNaNms\n"));
    assert!(output.contains("Median (suites):\t0ms\n"));
    assert!(output.ends_with("\nTest results: 0 / 0 passed\n\n"));
}

#[test]
fn custom_listing_threshold() {
    let buffer = Buffer::default();
    let mut reporter = reporter(&buffer).with_min_listed(4);
    drive(&mut reporter, ALL_PASSED);

    let output = buffer.try_to_string().unwrap();
    assert!(output.contains("Test Suites (≥ 4ms)"));
    assert!(output.contains("4ms\t/repo/src/b.test.js\n"));
    assert!(output.contains("4ms\tb works\n"));
    assert!(!output.contains("\ta works"));
}

#[test]
fn replayed_host_events() {
    let input = r#"
{"event":"runStart","estimatedTime":5}
{"event":"testStart","path":"/repo/src/a.test.js"}
{"event":"testStart","path":"/repo/src/b.test.js"}
{"event":"testResult","path":"/repo/src/a.test.js","testResults":[{"fullName":"a should render","duration":12},{"fullName":"a works","duration":3}],"numPassedTestSuites":1,"numTotalTestSuites":2}
{"event":"testResult","path":"/repo/src/b.test.js","testResults":[{"fullName":"b works","duration":4}],"numPassedTestSuites":2,"numTotalTestSuites":2}
{"event":"runComplete","numTotalTests":3,"numPassedTests":3,"numFailedTests":0,"numPendingTests":0,"numRuntimeErrorTestSuites":0}
"#;
    let buffer = Buffer::default();
    let mut reporter =
        reporter(&buffer).with_path_display(PathDisplay::StripThrough("/repo/".into()));
    let dispatched = replay(input.as_bytes(), &mut reporter).unwrap();

    assert_eq!(dispatched, 6);
    let expected = expected_body() + "\nTest results: 3 / 3 passed\n\n";
    assert_eq!(buffer.try_to_string().unwrap(), expected);
}

#[test]
fn replay_stops_at_out_of_order_event() {
    let input = "{\"event\":\"testStart\",\"path\":\"a\"}\n";
    let buffer = Buffer::default();
    let mut reporter = reporter(&buffer);

    let err = replay(input.as_bytes(), &mut reporter).unwrap_err();
    assert!(matches!(err, ReportError::OutOfOrder { .. }));
    assert_eq!(err.to_string(), "received test start while the reporter was idle");
}
