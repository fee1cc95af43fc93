// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered fade scheduling.
//!
//! The [`FadeScheduler`] turns a figure count and a cycle duration into a
//! set of [`Timeline`]s that together read as one pulse of brightness
//! chasing around the ring. Per sector `i` of `n`:
//!
//! - a **warm-up** timeline (every sector except the first): one-shot,
//!   alpha `trunc(i·255/n) → 0` over `i·(cycle/n)`, starting immediately.
//!   Without it, sector `i` would sit dark for `i·(cycle/n)` before its
//!   first fade; with it, the ring starts with a consistent brightness
//!   gradient that the repeating timelines take over seamlessly.
//! - a **main** timeline (every sector): infinitely repeating, alpha
//!   `255 → 0` over the full cycle, delayed by `i·(cycle/n)` from the
//!   scheduler epoch. The delay is a start offset, not a phase inside the
//!   loop — each sector runs the identical fade, just later.
//!
//! The scheduler owns no thread and never sleeps. The host calls
//! [`tick`](FadeScheduler::tick) once per frame; the *epoch* (time zero for
//! all delays) is captured from the first tick after a start, so a
//! scheduler can be armed before the host's clock value is known. All work
//! per tick is O(n).

use alloc::vec::Vec;

use log::{debug, trace};

use crate::config::RingError;
use crate::figure::FigureStore;
use crate::time::{Duration, HostTime};
use crate::timeline::{Repeat, Timeline};

/// Drives the per-figure fade timelines from host ticks.
#[derive(Debug, Default)]
pub struct FadeScheduler {
    timelines: Vec<Timeline>,
    epoch: Option<HostTime>,
    cycle: Duration,
}

impl FadeScheduler {
    /// Creates a stopped scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and arms the timeline set for `figures` sectors.
    ///
    /// Any previous timeline set is cancelled first, so `start` doubles as
    /// restart. Timelines stay idle until the first [`tick`](Self::tick)
    /// establishes the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::EmptyFigureList`] for a zero figure count and
    /// [`RingError::ZeroCycle`] for a zero-length cycle; both would make
    /// the per-sector stagger degenerate.
    pub fn start(&mut self, figures: u32, cycle: Duration) -> Result<(), RingError> {
        if figures == 0 {
            return Err(RingError::EmptyFigureList);
        }
        if cycle.is_zero() {
            return Err(RingError::ZeroCycle);
        }
        self.stop();
        self.cycle = cycle;

        let n = u64::from(figures);
        self.timelines.reserve((2 * figures - 1) as usize);
        for i in 0..figures {
            let stagger = cycle.mul_div(u64::from(i), n);
            if i != 0 {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "i < figures, so the seed value is below 255; truncation is the integer evaluator"
                )]
                let seed = (f64::from(i) * (255.0 / f64::from(figures))) as u8;
                self.timelines
                    .push(Timeline::new(i, seed, 0, Duration::ZERO, stagger, Repeat::Once));
            }
            self.timelines
                .push(Timeline::new(i, 255, 0, stagger, cycle, Repeat::Infinite));
        }

        debug!(
            "fade scheduler armed: {} timelines over {} figures, cycle {:?}",
            self.timelines.len(),
            figures,
            cycle
        );
        Ok(())
    }

    /// Cancels every outstanding timeline, synchronously and totally.
    ///
    /// After `stop` returns, zero live timelines remain; a subsequent tick
    /// mutates nothing. Figures keep their last-written alphas.
    pub fn stop(&mut self) {
        if !self.timelines.is_empty() {
            for tl in &mut self.timelines {
                tl.cancel();
            }
            debug!("fade scheduler stopped: {} timelines released", self.timelines.len());
        }
        self.timelines.clear();
        self.epoch = None;
    }

    /// Stops, then starts with a new cycle duration.
    ///
    /// This is the duration-change path: the figure list is untouched and
    /// geometry is not rebuilt.
    ///
    /// # Errors
    ///
    /// Same conditions as [`start`](Self::start).
    pub fn restart(&mut self, figures: u32, cycle: Duration) -> Result<(), RingError> {
        self.stop();
        self.start(figures, cycle)
    }

    /// Advances every live timeline to `now`, writing alphas into `store`.
    ///
    /// The first tick after a start captures the epoch. Finished one-shot
    /// timelines deliver their final value and are released. Returns the
    /// number of alpha writes performed this tick.
    ///
    /// # Panics
    ///
    /// Panics if the store holds fewer figures than the scheduler was
    /// started for; the caller must tear both down together on relayout.
    pub fn tick(&mut self, now: HostTime, store: &mut FigureStore) -> usize {
        if self.timelines.is_empty() {
            return 0;
        }
        let epoch = *self.epoch.get_or_insert(now);

        let mut writes = 0;
        for tl in &mut self.timelines {
            if let Some(alpha) = tl.sample(epoch, now) {
                store.set_alpha(tl.figure(), alpha);
                writes += 1;
            }
        }
        self.timelines.retain(|tl| !tl.state().is_terminal());
        trace!(
            "tick {:?}: {} alpha writes, {} timelines live",
            now,
            writes,
            self.timelines.len()
        );
        writes
    }

    /// Returns whether any live timeline remains.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timelines.is_empty()
    }

    /// Number of live timelines (warm-ups count until they complete).
    #[must_use]
    pub fn live_timelines(&self) -> usize {
        self.timelines.len()
    }

    /// The cycle duration of the current timeline set.
    #[must_use]
    pub fn cycle(&self) -> Duration {
        self.cycle
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use crate::config::ShapeKind;
    use crate::figure::Color;
    use crate::geometry::build_sectors;
    use crate::timeline::TimelineState;

    use super::*;

    const CYCLE: Duration = Duration(1000);

    fn store_with(n: u32) -> FigureStore {
        let sectors = build_sectors(
            Size::new(100.0, 100.0),
            n,
            0.0,
            ShapeKind::Triangle,
            Point::new(50.0, 50.0),
        )
        .unwrap();
        let mut store = FigureStore::new();
        store.rebuild(sectors, Color::rgb(0x00, 0x89, 0x7b));
        store
    }

    #[test]
    fn start_rejects_degenerate_inputs() {
        let mut sched = FadeScheduler::new();
        assert_eq!(sched.start(0, CYCLE), Err(RingError::EmptyFigureList));
        assert_eq!(sched.start(4, Duration::ZERO), Err(RingError::ZeroCycle));
        assert!(!sched.is_running());
    }

    #[test]
    fn builds_one_warm_up_per_nonzero_sector() {
        let mut sched = FadeScheduler::new();
        sched.start(4, CYCLE).unwrap();
        // 3 warm-ups + 4 mains.
        assert_eq!(sched.live_timelines(), 7);
    }

    #[test]
    fn main_delays_stagger_across_the_cycle() {
        let mut sched = FadeScheduler::new();
        sched.start(4, CYCLE).unwrap();

        let mains: Vec<&Timeline> = sched
            .timelines
            .iter()
            .filter(|tl| tl.duration() == CYCLE)
            .collect();
        assert_eq!(mains.len(), 4);
        for (i, tl) in mains.iter().enumerate() {
            assert_eq!(tl.figure() as usize, i);
            assert_eq!(tl.delay(), Duration(250 * i as u64), "sector {i} delay");
        }
        assert_eq!(mains[0].delay(), Duration::ZERO, "sector 0 starts undelayed");
    }

    #[test]
    fn warm_ups_seed_a_brightness_gradient() {
        let mut sched = FadeScheduler::new();
        let mut store = store_with(4);
        sched.start(4, CYCLE).unwrap();

        let now = HostTime(5_000);
        let writes = sched.tick(now, &mut store);
        // Every main past its delay plus every warm-up writes; at the
        // epoch that's sector 0's main and the three warm-ups.
        assert_eq!(writes, 4);

        // trunc(i * 255/4) = 63, 127, 191.
        assert_eq!(store.alpha_at(0), 255);
        assert_eq!(store.alpha_at(1), 63);
        assert_eq!(store.alpha_at(2), 127);
        assert_eq!(store.alpha_at(3), 191);
    }

    #[test]
    fn warm_up_hands_over_to_main_at_the_stagger_boundary() {
        let mut sched = FadeScheduler::new();
        let mut store = store_with(4);
        sched.start(4, CYCLE).unwrap();

        let epoch = HostTime(0);
        let _ = sched.tick(epoch, &mut store);
        let _ = sched.tick(epoch + Duration(250), &mut store);

        // Sector 1's warm-up just completed (final value 0) and its main
        // began at full brightness in the same tick; the main wins.
        assert_eq!(store.alpha_at(1), 255);
        // Sector 0 is a quarter through its fade: 255 * 0.75 truncated.
        assert_eq!(store.alpha_at(0), 191);
        // Sector 2's warm-up is halfway: 127 * 0.5 truncated.
        assert_eq!(store.alpha_at(2), 63);
    }

    #[test]
    fn completed_warm_ups_are_released() {
        let mut sched = FadeScheduler::new();
        let mut store = store_with(4);
        sched.start(4, CYCLE).unwrap();

        let epoch = HostTime(0);
        let _ = sched.tick(epoch, &mut store);
        assert_eq!(sched.live_timelines(), 7);

        // Past the longest warm-up (750 ticks): only the 4 mains remain.
        let _ = sched.tick(epoch + Duration(800), &mut store);
        assert_eq!(sched.live_timelines(), 4);
    }

    #[test]
    fn stop_is_total_and_ticks_after_stop_mutate_nothing() {
        let mut sched = FadeScheduler::new();
        let mut store = store_with(4);
        sched.start(4, CYCLE).unwrap();

        let epoch = HostTime(0);
        let _ = sched.tick(epoch, &mut store);
        let _ = store.evaluate();

        sched.stop();
        assert_eq!(sched.live_timelines(), 0);

        let writes = sched.tick(epoch + Duration(500), &mut store);
        assert_eq!(writes, 0);
        let changes = store.evaluate();
        assert!(changes.is_empty(), "no alpha may move after stop");
        // Figures keep their last-drawn state.
        assert_eq!(store.alpha_at(0), 255);
    }

    #[test]
    fn restart_rebuilds_timelines_only() {
        let mut sched = FadeScheduler::new();
        let mut store = store_with(4);
        sched.start(4, CYCLE).unwrap();
        let _ = sched.tick(HostTime(0), &mut store);

        sched.restart(4, Duration(2000)).unwrap();
        assert_eq!(sched.cycle(), Duration(2000));
        assert_eq!(sched.live_timelines(), 7, "fresh warm-ups and mains");

        // New epoch is captured on the next tick, not carried over.
        let _ = sched.tick(HostTime(9_999), &mut store);
        assert_eq!(store.alpha_at(0), 255);
    }

    #[test]
    fn cancelled_timelines_report_terminal_state() {
        let mut tl = Timeline::new(0, 255, 0, Duration::ZERO, CYCLE, Repeat::Infinite);
        let _ = tl.sample(HostTime(0), HostTime(0));
        tl.cancel();
        assert_eq!(tl.state(), TimelineState::Cancelled);
        assert!(tl.state().is_terminal());
    }
}
