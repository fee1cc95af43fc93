// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic host doubles for gyre demos and tests.
//!
//! Real hosts drive the ring from a platform frame callback. This crate
//! substitutes the two host collaborators with deterministic versions:
//!
//! - [`ManualClock`] — a fixed-step tick source advanced by hand, so every
//!   frame lands on an exact, reproducible [`HostTime`].
//! - [`RecordingPainter`] — a [`Painter`] that records every applied
//!   change instead of drawing, for asserting on repaint traffic.
//!
//! [`drive`] wires them into the standard frame loop.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use gyre_core::backend::Painter;
use gyre_core::figure::{Color, FigureStore, FrameChanges};
use gyre_core::ring::ProgressRing;
use gyre_core::time::{Duration, HostTime};

/// A fixed-step tick source advanced by hand.
#[derive(Clone, Copy, Debug)]
pub struct ManualClock {
    now: HostTime,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock at `start` that advances by `step` per frame.
    #[must_use]
    pub const fn new(start: HostTime, step: Duration) -> Self {
        Self { now: start, step }
    }

    /// The current time; does not advance.
    #[must_use]
    pub const fn now(&self) -> HostTime {
        self.now
    }

    /// Advances one frame and returns the new time.
    pub fn advance(&mut self) -> HostTime {
        self.now = self.now + self.step;
        self.now
    }
}

/// One recorded repaint: a figure's state at the moment a change was
/// applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintRecord {
    /// Frame counter at the time of the write (0-based).
    pub frame: u64,
    /// Figure slot the change targeted.
    pub figure: u32,
    /// Fill color at apply time.
    pub color: Color,
    /// Alpha at apply time.
    pub alpha: u8,
}

/// A [`Painter`] that records applied changes instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    /// One record per alpha write, in apply order.
    pub records: Vec<PaintRecord>,
    /// Figure indices whose color changed, across all frames.
    pub color_writes: Vec<u32>,
    /// Number of wholesale figure-list rebuilds observed.
    pub rebuilds: u64,
    frame: u64,
}

impl RecordingPainter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames applied so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frame
    }

    /// Alpha records for one figure, in frame order.
    pub fn alphas_for(&self, figure: u32) -> impl Iterator<Item = &PaintRecord> {
        self.records.iter().filter(move |r| r.figure == figure)
    }
}

impl Painter for RecordingPainter {
    fn apply(&mut self, store: &FigureStore, changes: &FrameChanges) {
        if changes.rebuilt {
            self.rebuilds += 1;
        }
        for &figure in &changes.alphas {
            self.records.push(PaintRecord {
                frame: self.frame,
                figure,
                color: store.color_at(figure),
                alpha: store.alpha_at(figure),
            });
        }
        self.color_writes.extend_from_slice(&changes.colors);
        self.frame += 1;
    }
}

/// Runs the standard frame loop for `frames` frames.
///
/// Each frame advances the clock one step, ticks the ring, and applies
/// the drained changes (empty frames included, so painter frame counters
/// stay aligned with clock steps).
pub fn drive(
    ring: &mut ProgressRing,
    clock: &mut ManualClock,
    painter: &mut impl Painter,
    frames: u32,
) {
    for _ in 0..frames {
        let now = clock.advance();
        let changes = ring.tick(now);
        painter.apply(ring.store(), &changes);
    }
}
