// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget-level orchestrator.
//!
//! [`ProgressRing`] owns one of everything: configuration, bounds, the
//! figure store, and the fade scheduler, with a lifecycle tied to the host
//! widget's own. Each mutation triggers exactly the rebuild it requires:
//!
//! | change                        | effect                               |
//! |-------------------------------|--------------------------------------|
//! | color                         | in-place figure mutation             |
//! | cycle duration                | timeline rebuild, geometry untouched |
//! | sectors / shape / padding     | full relayout                        |
//! | bounds                        | full relayout                        |
//!
//! A *relayout* tears animation and figures down atomically as a pair —
//! every timeline is cancelled before the old figure list is discarded, so
//! no stale timeline can write into a figure the draw step no longer
//! iterates. While the bounds are unknown or empty the build is deferred:
//! the ring holds no figures and ticks change nothing.
//!
//! # Frame loop
//!
//! ```rust,ignore
//! fn on_frame(now: HostTime) {
//!     let changes = ring.tick(now);
//!     if !changes.is_empty() {
//!         painter.apply(ring.store(), &changes);
//!     }
//! }
//! ```

use kurbo::{Point, Size};
use log::debug;

use crate::config::{RingConfig, RingError, ShapeKind};
use crate::figure::{Color, FigureStore, FrameChanges};
use crate::geometry::build_sectors;
use crate::scheduler::FadeScheduler;
use crate::time::{Duration, HostTime, Timebase};

/// A geometric ring progress indicator.
#[derive(Debug)]
pub struct ProgressRing {
    config: RingConfig,
    timebase: Timebase,
    bounds: Size,
    center: Point,
    store: FigureStore,
    scheduler: FadeScheduler,
}

impl ProgressRing {
    /// Creates a ring with the given configuration.
    ///
    /// No geometry is built until the host supplies bounds via
    /// [`set_bounds`](Self::set_bounds).
    ///
    /// # Errors
    ///
    /// Returns the first [`RingError`] the configuration violates.
    pub fn new(config: RingConfig, timebase: Timebase) -> Result<Self, RingError> {
        config.validate()?;
        Ok(Self {
            config,
            timebase,
            bounds: Size::ZERO,
            center: Point::ZERO,
            store: FigureStore::new(),
            scheduler: FadeScheduler::new(),
        })
    }

    /// Supplies the bounding box, in device pixels. Called on every host
    /// layout pass; a changed size triggers a full relayout.
    ///
    /// # Errors
    ///
    /// Propagates geometry precondition violations.
    pub fn set_bounds(&mut self, bounds: Size) -> Result<(), RingError> {
        if bounds == self.bounds {
            return Ok(());
        }
        self.bounds = bounds;
        self.center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        self.relayout()
    }

    /// Sets the sector count. Rejected counts leave the ring untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::SectorCount`] for counts below three.
    pub fn set_sectors(&mut self, sectors: u32) -> Result<(), RingError> {
        RingConfig {
            sectors,
            ..self.config
        }
        .validate()?;
        self.config.sectors = sectors;
        self.relayout()
    }

    /// Sets the sector shape.
    ///
    /// # Errors
    ///
    /// Propagates geometry precondition violations.
    pub fn set_shape(&mut self, shape: ShapeKind) -> Result<(), RingError> {
        self.config.shape = shape;
        self.relayout()
    }

    /// Sets the inter-sector padding, in device pixels.
    ///
    /// # Errors
    ///
    /// Propagates geometry precondition violations.
    pub fn set_padding(&mut self, padding: f64) -> Result<(), RingError> {
        self.config.padding = padding;
        self.relayout()
    }

    /// Sets the fill color, mutating the existing figures in place.
    ///
    /// Never rebuilds geometry or timelines.
    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
        self.store.set_color(color);
    }

    /// Sets the fade cycle duration in milliseconds, rebuilding only the
    /// timelines; geometry is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ZeroCycle`] for a zero duration.
    pub fn set_cycle_ms(&mut self, cycle_ms: u64) -> Result<(), RingError> {
        if cycle_ms == 0 {
            return Err(RingError::ZeroCycle);
        }
        self.config.cycle_ms = cycle_ms;
        if !self.store.is_empty() {
            self.scheduler.restart(self.store.len(), self.cycle())?;
        }
        Ok(())
    }

    /// Advances the animation to `now` and drains the frame's changes.
    ///
    /// One `alphas` entry per opacity write — the host's repaint signal.
    pub fn tick(&mut self, now: HostTime) -> FrameChanges {
        let _ = self.scheduler.tick(now, &mut self.store);
        self.store.evaluate()
    }

    /// Like [`tick`](Self::tick), but reuses a caller-provided buffer.
    pub fn tick_into(&mut self, now: HostTime, changes: &mut FrameChanges) {
        let _ = self.scheduler.tick(now, &mut self.store);
        self.store.evaluate_into(changes);
    }

    /// Stops the animation, leaving figures in their last-drawn state.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Restarts the animation over the existing figures (e.g. after
    /// [`stop`](Self::stop)). A no-op while the build is deferred.
    ///
    /// # Errors
    ///
    /// Propagates scheduler precondition violations.
    pub fn start(&mut self) -> Result<(), RingError> {
        if self.store.is_empty() {
            return Ok(());
        }
        self.scheduler.restart(self.store.len(), self.cycle())
    }

    /// Returns whether timelines are currently live.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_running()
    }

    /// The figure store, for the host's draw step.
    #[must_use]
    pub fn store(&self) -> &FigureStore {
        &self.store
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// The shared ring center (midpoint of the bounds).
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Cancels all timelines, rebuilds geometry, and restarts animation.
    ///
    /// Ordering matters: the scheduler stops before the figure list is
    /// replaced, so no timeline outlives the figures it wrote into.
    fn relayout(&mut self) -> Result<(), RingError> {
        self.scheduler.stop();

        if self.bounds.min_side() <= 0.0 {
            // Not laid out yet; building now would produce degenerate
            // geometry. Wait for real bounds.
            self.store.clear();
            debug!("relayout deferred: empty bounds {:?}", self.bounds);
            return Ok(());
        }

        let sectors = build_sectors(
            self.bounds,
            self.config.sectors,
            self.config.padding,
            self.config.shape,
            self.center,
        )?;
        self.store.rebuild(sectors, self.config.color);
        debug!(
            "relayout: {} {:?} sectors in {:?}",
            self.config.sectors, self.config.shape, self.bounds
        );
        self.scheduler.start(self.store.len(), self.cycle())
    }

    fn cycle(&self) -> Duration {
        Duration::from_millis(self.config.cycle_ms, self.timebase)
    }
}
