// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-figure fade timelines.
//!
//! A [`Timeline`] describes one alpha animation against one figure slot: a
//! start delay, a duration, a linear ramp between two alpha values, and a
//! repeat behavior. Timelines are passive — they own no clock and never
//! fire on their own. The scheduler samples every live timeline once per
//! host tick.
//!
//! # State machine
//!
//! ```text
//! Idle ──► Running ──► Completed   (Once, at the end of the ramp)
//!             │  ▲
//!             │  └──── loops       (Infinite)
//!             ▼
//!         Cancelled                (stop / relayout)
//! ```
//!
//! `Completed` and `Cancelled` are terminal; a terminal timeline samples to
//! `None` and is released by the scheduler.

use crate::time::{Duration, HostTime};

/// Repeat behavior of a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Play the ramp once, deliver the final value, and complete.
    Once,
    /// Loop the ramp forever (a sawtooth when `from != to`).
    Infinite,
}

/// Lifecycle state of a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimelineState {
    /// Created but still inside its start delay.
    Idle,
    /// Actively producing alpha values.
    Running,
    /// A `Once` timeline that reached the end of its ramp.
    Completed,
    /// Cancelled by the scheduler; never sampled again.
    Cancelled,
}

impl TimelineState {
    /// Returns whether this state is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// One alpha animation bound to one figure slot.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    figure: u32,
    from: u8,
    to: u8,
    delay: Duration,
    duration: Duration,
    repeat: Repeat,
    state: TimelineState,
}

impl Timeline {
    /// Creates an idle timeline for the given figure slot.
    #[must_use]
    pub const fn new(
        figure: u32,
        from: u8,
        to: u8,
        delay: Duration,
        duration: Duration,
        repeat: Repeat,
    ) -> Self {
        Self {
            figure,
            from,
            to,
            delay,
            duration,
            repeat,
            state: TimelineState::Idle,
        }
    }

    /// The figure slot this timeline exclusively writes.
    #[must_use]
    pub const fn figure(self) -> u32 {
        self.figure
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(self) -> TimelineState {
        self.state
    }

    /// Start delay measured from the scheduler epoch.
    #[must_use]
    pub const fn delay(self) -> Duration {
        self.delay
    }

    /// Duration of one ramp.
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.duration
    }

    /// Cancels the timeline. Terminal states are left untouched.
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.state = TimelineState::Cancelled;
        }
    }

    /// Samples the timeline at `now`, given the scheduler epoch.
    ///
    /// Returns the alpha to write, or `None` while idle or once terminal.
    /// A `Once` timeline delivers its final value exactly once, on the
    /// sample that completes it.
    pub fn sample(&mut self, epoch: HostTime, now: HostTime) -> Option<u8> {
        if self.state.is_terminal() {
            return None;
        }

        let elapsed = now.saturating_duration_since(epoch);
        if elapsed < self.delay {
            return None;
        }
        self.state = TimelineState::Running;

        let t = elapsed.saturating_sub(self.delay);
        if self.duration.is_zero() {
            // Degenerate ramp: jump straight to the end value.
            self.state = TimelineState::Completed;
            return Some(self.to);
        }

        match self.repeat {
            Repeat::Once => {
                if t >= self.duration {
                    self.state = TimelineState::Completed;
                    Some(self.to)
                } else {
                    Some(self.lerp(t))
                }
            }
            Repeat::Infinite => {
                let wrapped = Duration(t.ticks() % self.duration.ticks());
                Some(self.lerp(wrapped))
            }
        }
    }

    /// Linear interpolation at `t` into the ramp, truncating toward zero.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is a convex combination of two u8s; truncation is the intended integer evaluator"
    )]
    fn lerp(&self, t: Duration) -> u8 {
        let frac = t.ticks() as f64 / self.duration.ticks() as f64;
        let value = f64::from(self.from) + frac * (f64::from(self.to) - f64::from(self.from));
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH: HostTime = HostTime(10_000);

    fn main_timeline(delay: u64) -> Timeline {
        Timeline::new(0, 255, 0, Duration(delay), Duration(1000), Repeat::Infinite)
    }

    #[test]
    fn idle_inside_start_delay() {
        let mut tl = main_timeline(250);
        assert_eq!(tl.sample(EPOCH, EPOCH), None);
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(249)), None);
        assert_eq!(tl.state(), TimelineState::Idle);
    }

    #[test]
    fn runs_after_delay() {
        let mut tl = main_timeline(250);
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(250)), Some(255));
        assert_eq!(tl.state(), TimelineState::Running);
    }

    #[test]
    fn linear_ramp_truncates() {
        let mut tl = main_timeline(0);
        assert_eq!(tl.sample(EPOCH, EPOCH), Some(255));
        // 255 * (1 - 0.5) = 127.5, truncated.
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(500)), Some(127));
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(999)), Some(0));
    }

    #[test]
    fn infinite_wraps_back_to_start_value() {
        let mut tl = main_timeline(0);
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(1000)), Some(255));
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(2500)), Some(127));
        assert_eq!(tl.state(), TimelineState::Running, "never completes");
    }

    #[test]
    fn once_completes_with_final_value() {
        let mut tl = Timeline::new(1, 63, 0, Duration::ZERO, Duration(250), Repeat::Once);
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(125)), Some(31));
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(250)), Some(0));
        assert_eq!(tl.state(), TimelineState::Completed);
        assert_eq!(
            tl.sample(EPOCH, EPOCH + Duration(300)),
            None,
            "terminal timelines never sample again"
        );
    }

    #[test]
    fn cancel_is_terminal() {
        let mut tl = main_timeline(0);
        let _ = tl.sample(EPOCH, EPOCH);
        assert_eq!(tl.state(), TimelineState::Running);

        tl.cancel();
        assert_eq!(tl.state(), TimelineState::Cancelled);
        assert_eq!(tl.sample(EPOCH, EPOCH + Duration(500)), None);
    }

    #[test]
    fn cancel_does_not_resurrect_completed() {
        let mut tl = Timeline::new(1, 63, 0, Duration::ZERO, Duration(100), Repeat::Once);
        let _ = tl.sample(EPOCH, EPOCH + Duration(100));
        assert_eq!(tl.state(), TimelineState::Completed);
        tl.cancel();
        assert_eq!(tl.state(), TimelineState::Completed);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut tl = Timeline::new(0, 255, 0, Duration::ZERO, Duration::ZERO, Repeat::Once);
        assert_eq!(tl.sample(EPOCH, EPOCH), Some(0));
        assert_eq!(tl.state(), TimelineState::Completed);
    }

    #[test]
    fn time_before_epoch_saturates_to_idle_or_start() {
        let mut tl = main_timeline(100);
        // A tick from before the epoch behaves like t = 0.
        assert_eq!(tl.sample(EPOCH, HostTime(0)), None);
        let mut undelayed = main_timeline(0);
        assert_eq!(undelayed.sample(EPOCH, HostTime(0)), Some(255));
    }
}
