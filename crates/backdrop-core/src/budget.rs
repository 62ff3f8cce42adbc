use crate::constants::{FRAME_BUDGET_MS, FRAME_REPORT_WINDOW};
use std::time::Duration;

/// Rolling tally of how long each frame's update and draw took.
///
/// Every `window` frames the mean is logged at debug level, with a warning
/// when it is over budget. Only CPU time spent inside the callback is
/// counted, not the gap between refreshes.
#[derive(Clone, Debug)]
pub struct FrameBudget {
    label: &'static str,
    budget: Duration,
    window: u32,
    frames: u32,
    total: Duration,
    worst: Duration,
}

/// Summary of one finished reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetReport {
    pub mean: Duration,
    pub worst: Duration,
    pub over_budget: bool,
}

impl FrameBudget {
    pub fn new(label: &'static str) -> Self {
        Self::with_limits(
            label,
            Duration::from_secs_f64(FRAME_BUDGET_MS / 1000.0),
            FRAME_REPORT_WINDOW,
        )
    }

    pub fn with_limits(label: &'static str, budget: Duration, window: u32) -> Self {
        Self {
            label,
            budget,
            window: window.max(1),
            frames: 0,
            total: Duration::ZERO,
            worst: Duration::ZERO,
        }
    }

    /// Add one frame. Returns the report when this frame closes a window.
    pub fn record(&mut self, elapsed: Duration) -> Option<BudgetReport> {
        self.frames += 1;
        self.total += elapsed;
        self.worst = self.worst.max(elapsed);
        if self.frames < self.window {
            return None;
        }
        let mean = self.total / self.frames;
        let report = BudgetReport {
            mean,
            worst: self.worst,
            over_budget: mean > self.budget,
        };
        log::debug!(
            "[{}] mean frame {:.2}ms worst {:.2}ms over {} frames",
            self.label,
            mean.as_secs_f64() * 1000.0,
            self.worst.as_secs_f64() * 1000.0,
            self.frames
        );
        if report.over_budget {
            log::warn!(
                "[{}] mean frame {:.2}ms exceeds {:.2}ms budget",
                self.label,
                mean.as_secs_f64() * 1000.0,
                self.budget.as_secs_f64() * 1000.0
            );
        }
        self.frames = 0;
        self.total = Duration::ZERO;
        self.worst = Duration::ZERO;
        Some(report)
    }
}
