use std::io;

use crossterm::{cursor::MoveToColumn, queue};

use crate::{
    error::ReportError,
    formatter::{
        RunReporter,
        common::{
            banner::banner,
            color::{ColorSetting, Style, SupportsColor, paint},
            duration::styled_duration,
            progress::{ProgressBar, Segment},
            width::WidthSetting,
        },
    },
    outcome::{RunCounts, RunStart, SuiteOutcome, TestStart},
    path::PathDisplay,
    report::RunState,
    spinner::{DefaultSpinnerProvider, Spinner, SpinnerProvider},
};

/// Tests and suites faster than this are left out of the final listings.
pub const DEFAULT_MIN_LISTED_MS: u64 = 10;

const EMPHASIZED_WORD: &str = "should";

enum Phase<S> {
    Idle,
    Running { state: RunState, spinner: S },
    Complete,
}

impl<S> Phase<S> {
    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running { .. } => "running",
            Phase::Complete => "complete",
        }
    }
}

/// Renders live progress and a timing summary of a test run.
///
/// While suites launch a spinner is shown, finished suites redraw a progress
/// bar in place and the completed run prints the slowest suites and tests
/// together with aggregate timing statistics.
pub struct StatsReporter<W: io::Write, P: SpinnerProvider> {
    target: W,
    color_setting: ColorSetting,
    width_setting: WidthSetting,
    path_display: PathDisplay,
    min_listed_ms: u64,
    spinner_provider: P,
    phase: Phase<P::Spinner>,
}

impl Default for StatsReporter<io::Stdout, DefaultSpinnerProvider> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: ColorSetting::default(),
            width_setting: WidthSetting::default(),
            path_display: PathDisplay::default(),
            min_listed_ms: DEFAULT_MIN_LISTED_MS,
            spinner_provider: DefaultSpinnerProvider,
            phase: Phase::Idle,
        }
    }
}

impl<W: io::Write, P: SpinnerProvider> StatsReporter<W, P> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> StatsReporter<WithTarget, P> {
        StatsReporter {
            target: with_target,
            color_setting: self.color_setting,
            width_setting: self.width_setting,
            path_display: self.path_display,
            min_listed_ms: self.min_listed_ms,
            spinner_provider: self.spinner_provider,
            phase: self.phase,
        }
    }

    /// Replace the spinner provider. Any running state is dropped.
    pub fn with_spinner_provider<WithProvider: SpinnerProvider>(
        self,
        with_provider: WithProvider,
    ) -> StatsReporter<W, WithProvider> {
        StatsReporter {
            target: self.target,
            color_setting: self.color_setting,
            width_setting: self.width_setting,
            path_display: self.path_display,
            min_listed_ms: self.min_listed_ms,
            spinner_provider: with_provider,
            phase: Phase::Idle,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        Self {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn with_width_setting(self, width_setting: impl Into<WidthSetting>) -> Self {
        Self {
            width_setting: width_setting.into(),
            ..self
        }
    }

    pub fn with_path_display(self, path_display: PathDisplay) -> Self {
        Self {
            path_display,
            ..self
        }
    }

    pub fn with_min_listed(self, min_listed_ms: u64) -> Self {
        Self {
            min_listed_ms,
            ..self
        }
    }

    /// The accumulated state, while a run is in progress.
    pub fn state(&self) -> Option<&RunState> {
        match &self.phase {
            Phase::Running { state, .. } => Some(state),
            Phase::Idle | Phase::Complete => None,
        }
    }

    pub fn spinner(&self) -> Option<&P::Spinner> {
        match &self.phase {
            Phase::Running { spinner, .. } => Some(spinner),
            Phase::Idle | Phase::Complete => None,
        }
    }

    pub fn into_target(self) -> W {
        self.target
    }

    fn out_of_order(&self, event: &'static str) -> ReportError {
        let phase = self.phase.name();
        tracing::warn!(event, phase, "lifecycle callback out of order");
        ReportError::OutOfOrder { event, phase }
    }
}

impl<W: io::Write + SupportsColor, P: SpinnerProvider> StatsReporter<W, P> {
    /// Return whether this reporter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        self.color_setting.use_color(&self.target)
    }

    fn write(&mut self, text: &str, styles: &[Style]) -> io::Result<()> {
        let text = paint(text, styles, self.use_color());
        self.target.write_all(text.as_bytes())
    }

    fn write_line(&mut self, text: &str, styles: &[Style]) -> io::Result<()> {
        self.write(text, styles)?;
        writeln!(self.target)
    }

    fn goto_line_start(&mut self) -> io::Result<()> {
        match self.use_color() {
            true => queue!(self.target, MoveToColumn(0)),
            false => write!(self.target, "\r"),
        }
    }

    fn write_progress(&mut self, passed: usize, total: usize) -> io::Result<()> {
        let bar = ProgressBar::default()
            .with_start(
                Segment::new(format!("{passed} / {total} Test Suites Finished"))
                    .with_styles(&[Style::BgGreen, Style::Bold]),
            )
            .with_done(Segment::new(" ").with_styles(&[Style::BgGreen]))
            .with_fill(Segment::new(" ").with_styles(&[Style::BgRed]));
        let line = bar.render(passed, total, self.width_setting.columns(), self.use_color());
        self.target.write_all(line.as_bytes())
    }

    fn write_banner(&mut self, label: &str) -> io::Result<()> {
        let line = banner(label, self.width_setting.columns(), &[], self.use_color());
        self.write_line(&line, &[])
    }

    fn write_duration_line(&mut self, label: &str, duration_ms: f64) -> io::Result<()> {
        self.write(label, &[])?;
        let duration = styled_duration(duration_ms, self.use_color());
        self.write_line(&duration, &[])
    }
}

impl<W: io::Write + SupportsColor, P: SpinnerProvider> RunReporter for StatsReporter<W, P> {
    type Error = ReportError;

    fn on_run_start(&mut self, data: RunStart) -> Result<(), Self::Error> {
        if let Phase::Running { spinner, .. } = &mut self.phase {
            spinner.stop()?;
        }

        tracing::debug!(estimated_secs = data.estimated_time.as_secs_f64(), "run started");
        self.write_line(
            &format!(
                "\nEstimated Time: {} seconds",
                data.estimated_time.as_secs_f64()
            ),
            &[],
        )?;
        self.target.flush()?;

        let use_color = self.use_color();
        let spinner = self
            .spinner_provider
            .provide(String::from("Starting 0 test suites..."), use_color);
        self.phase = Phase::Running {
            state: RunState::new(),
            spinner,
        };
        Ok(())
    }

    fn on_test_start(&mut self, data: TestStart) -> Result<(), Self::Error> {
        let Phase::Running { state, spinner } = &mut self.phase else {
            return Err(self.out_of_order("test start"));
        };

        let first = state.record_start();
        tracing::trace!(path = %data.path, started = state.num_started(), "suite started");
        if first {
            spinner.start()?;
        } else if spinner.is_spinning() {
            spinner.set_text(format!("Starting {} test suites...", state.num_started()));
        }
        Ok(())
    }

    fn on_test_result(&mut self, data: SuiteOutcome) -> Result<(), Self::Error> {
        let Phase::Running { state, spinner } = &mut self.phase else {
            return Err(self.out_of_order("test result"));
        };
        spinner.stop()?;

        let SuiteOutcome {
            path,
            tests,
            passed_suites,
            total_suites,
        } = data;
        let path = self.path_display.apply(&path);
        tracing::debug!(%path, tests = tests.len(), "suite finished");
        let duration_ms = state.record_suite(path, tests);
        tracing::trace!(
            duration_ms,
            total_ms = state.suite_total_times_sum(),
            "suite recorded"
        );

        self.goto_line_start()?;
        self.write_progress(passed_suites, total_suites)?;
        self.target.flush()?;
        Ok(())
    }

    fn on_run_complete(&mut self, data: RunCounts) -> Result<(), Self::Error> {
        let state = match std::mem::replace(&mut self.phase, Phase::Complete) {
            Phase::Running { state, mut spinner } => {
                spinner.stop()?;
                state
            }
            phase => {
                self.phase = phase;
                return Err(self.out_of_order("run complete"));
            }
        };

        let summary = state.into_summary();
        let use_color = self.use_color();
        let min = self.min_listed_ms;
        tracing::debug!(
            suites = summary.suites.len(),
            tests = summary.tests.len(),
            total_ms = summary.total_ms,
            "run complete"
        );

        self.write_line("\n", &[])?;

        self.write_banner(&format!("Test Suites (≥ {min}ms)"))?;
        for suite in summary.slow_suites(min) {
            let duration = styled_duration(suite.duration_ms as f64, use_color);
            self.write_line(&format!("{duration}\t{}", suite.path), &[])?;
        }

        self.write_banner(&format!("Individual Tests (≥ {min}ms)"))?;
        let emphasized = paint(EMPHASIZED_WORD, &[Style::Bold], use_color);
        for test in summary.slow_tests(min) {
            let duration = styled_duration(test.duration_ms as f64, use_color);
            let name = test.full_name.replacen(EMPHASIZED_WORD, &emphasized, 1);
            self.write_line(&format!("{duration}\t{name}"), &[])?;
        }

        self.write("\nTotal:\t\t\t", &[])?;
        self.write_line(
            &format!("  {}ms  ", summary.total_ms),
            &[Style::BgWhite, Style::Black],
        )?;
        self.write_duration_line("Average (suites):\t", summary.suite_average_ms())?;
        self.write_duration_line("Average (tests):\t", summary.test_average_ms())?;
        self.write_duration_line("Median (suites):\t", summary.suite_median_ms())?;
        self.write_duration_line("Median (tests):\t\t", summary.test_median_ms())?;

        self.write(
            &format!(
                "\nTest results: {} / {} passed",
                data.passed_tests, data.total_tests
            ),
            &[],
        )?;
        if data.all_passed() {
            self.write_line("", &[])?;
        } else {
            self.write_line(
                &format!(
                    ": {} failed, {} runtime errors, {} pending",
                    data.failed_tests, data.runtime_error_suites, data.pending_tests
                ),
                &[],
            )?;
            self.write("  WARNING  ", &[Style::BgRed, Style::Bold])?;
            self.write_line(
                &format!(
                    " {} tests did not pass, above durations may be inaccurate. \
                     Run tests with default reporter for more detailed test output.",
                    data.not_passed()
                ),
                &[],
            )?;
        }
        self.write_line("", &[])?;
        self.target.flush()?;
        Ok(())
    }
}
