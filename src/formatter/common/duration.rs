use crate::formatter::common::color::{Style, paint};

const MODERATE_MS: f64 = 50.0;
const SLOW_MS: f64 = 150.0;
const CRITICAL_MS: f64 = 500.0;

/// Duration buckets used to color elapsed times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationTier {
    Fast,
    Moderate,
    Slow,
    Critical,
}

impl DurationTier {
    /// Non-finite durations land in [`DurationTier::Critical`].
    pub fn of(duration_ms: f64) -> Self {
        if duration_ms < MODERATE_MS {
            DurationTier::Fast
        } else if duration_ms < SLOW_MS {
            DurationTier::Moderate
        } else if duration_ms < CRITICAL_MS {
            DurationTier::Slow
        } else {
            DurationTier::Critical
        }
    }

    pub const fn style(self) -> Style {
        match self {
            DurationTier::Fast => Style::Green,
            DurationTier::Moderate => Style::Yellow,
            DurationTier::Slow => Style::Red,
            DurationTier::Critical => Style::BgRed,
        }
    }
}

/// Render `"<duration>ms"` in the color of its tier.
///
/// Whole numbers print without a fraction, so averages and medians read like
/// the raw durations.
pub fn styled_duration(duration_ms: f64, use_color: bool) -> String {
    let tier = DurationTier::of(duration_ms);
    paint(&format!("{duration_ms}ms"), &[tier.style()], use_color)
}
