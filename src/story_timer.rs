//! Story viewer auto-advance timer
//!
//! Pure state machine; the host owns the actual interval and drives
//! [`StoryTimer::tick`] once per `TICK_INTERVAL_MS`. The host must cancel its
//! interval whenever the timer leaves the expanded phase; the `Idle` outcome
//! additionally makes any orphaned tick a no-op.

/// Milliseconds between host ticks.
pub const TICK_INTERVAL_MS: u32 = 100;
/// Progress added per tick; 2 per 100ms gives roughly a five second dwell.
pub const PROGRESS_STEP: u8 = 2;
/// Progress value at which the view auto-closes.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Viewing phase of the expanded story overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryTimerPhase {
    #[default]
    Collapsed,
    Expanded {
        progress: u8,
    },
}

/// Result of a single host tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is collapsed; the tick did nothing.
    Idle,
    /// Still viewing; carries the new progress for the indicator.
    Running { progress: u8 },
    /// Dwell time elapsed; the view closed. Emitted exactly once per
    /// expansion.
    AutoClosed,
}

/// Per-viewing-session countdown for the expanded story view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoryTimer {
    phase: StoryTimerPhase,
}

impl StoryTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: StoryTimerPhase::Collapsed,
        }
    }

    /// Open the full-screen view, restarting progress from zero. Expanding
    /// while already expanded restarts the dwell (switching stories).
    pub const fn expand(&mut self) {
        self.phase = StoryTimerPhase::Expanded { progress: 0 };
    }

    /// User-initiated close. Returns whether a view was actually open, so the
    /// host knows to cancel its interval.
    pub const fn close(&mut self) -> bool {
        let was_expanded = matches!(self.phase, StoryTimerPhase::Expanded { .. });
        self.phase = StoryTimerPhase::Collapsed;
        was_expanded
    }

    /// Advance the dwell by one tick.
    pub const fn tick(&mut self) -> TickOutcome {
        match self.phase {
            StoryTimerPhase::Collapsed => TickOutcome::Idle,
            StoryTimerPhase::Expanded { progress } => {
                let next = progress.saturating_add(PROGRESS_STEP);
                if next >= PROGRESS_COMPLETE {
                    self.phase = StoryTimerPhase::Collapsed;
                    TickOutcome::AutoClosed
                } else {
                    self.phase = StoryTimerPhase::Expanded { progress: next };
                    TickOutcome::Running { progress: next }
                }
            }
        }
    }

    #[must_use]
    pub const fn phase(&self) -> StoryTimerPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self.phase, StoryTimerPhase::Expanded { .. })
    }

    /// Current progress for the indicator, when expanded.
    #[must_use]
    pub const fn progress(&self) -> Option<u8> {
        match self.phase {
            StoryTimerPhase::Collapsed => None,
            StoryTimerPhase::Expanded { progress } => Some(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_close_fires_exactly_once_after_five_seconds() {
        let mut timer = StoryTimer::new();
        timer.expand();

        let ticks_to_close = (PROGRESS_COMPLETE / PROGRESS_STEP) as u32;
        assert_eq!(ticks_to_close * TICK_INTERVAL_MS, 5000);

        let mut closes = 0;
        for tick in 1..=ticks_to_close {
            match timer.tick() {
                TickOutcome::Running { progress } => {
                    assert!(tick < ticks_to_close);
                    assert_eq!(progress, (tick * u32::from(PROGRESS_STEP)) as u8);
                }
                TickOutcome::AutoClosed => {
                    assert_eq!(tick, ticks_to_close);
                    closes += 1;
                }
                TickOutcome::Idle => panic!("timer went idle mid-dwell"),
            }
        }
        assert_eq!(closes, 1);
        assert!(!timer.is_expanded());

        // Orphaned ticks after close are no-ops, never a second close.
        for _ in 0..10 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
    }

    #[test]
    fn manual_close_preempts_the_countdown() {
        let mut timer = StoryTimer::new();
        timer.expand();
        timer.tick();
        assert!(timer.close());
        assert_eq!(timer.tick(), TickOutcome::Idle);
        // Closing an already-collapsed timer reports nothing to cancel.
        assert!(!timer.close());
    }

    #[test]
    fn expand_restarts_progress() {
        let mut timer = StoryTimer::new();
        timer.expand();
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.progress(), Some(20));
        timer.expand();
        assert_eq!(timer.progress(), Some(0));
    }

    #[test]
    fn collapsed_timer_reports_no_progress() {
        let timer = StoryTimer::new();
        assert_eq!(timer.progress(), None);
        assert!(!timer.is_expanded());
    }
}
