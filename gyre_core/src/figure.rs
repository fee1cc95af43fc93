// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure storage: sector polygons paired with mutable render state.
//!
//! A *figure* is one renderable sector: a polygon, a fill color, and an
//! alpha value in `[0, 255]` owned exclusively by the timeline that drives
//! it. Figures live in struct-of-arrays layout and are addressed by raw
//! slot index; the slot order is the ring's angular order and never changes
//! between rebuilds.
//!
//! Mutations mark change channels (see [`dirty`](crate::dirty)); each
//! [`evaluate`](FigureStore::evaluate) call drains them into
//! [`FrameChanges`] for the host's repaint step. The whole figure list is
//! replaced as a unit on relayout — there is no per-figure lifecycle.

use alloc::vec;
use alloc::vec::Vec;

use core::fmt;

use crate::dirty::{self, ChannelSet};
use crate::geometry::Sector;

/// An opaque RGB fill color.
///
/// Alpha is not part of the color; it lives per-figure and is animated
/// separately.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Creates a color from its components.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:02x}{:02x}{:02x})", self.r, self.g, self.b)
    }
}

/// The set of changes produced by a single [`FigureStore::evaluate`] call.
///
/// Each list contains the slot indices of figures that changed in the
/// corresponding category, in ascending order. One `alphas` entry is one
/// opacity write — the host's repaint signal.
#[derive(Clone, Debug, Default)]
pub struct FrameChanges {
    /// Figures whose alpha was written this frame.
    pub alphas: Vec<u32>,
    /// Figures whose fill color changed.
    pub colors: Vec<u32>,
    /// Figures whose polygon changed (after a rebuild: all of them).
    pub geometry: Vec<u32>,
    /// Whether the figure list was replaced as a whole (possibly with an
    /// empty one). Hosts holding per-figure resources must discard them.
    pub rebuilt: bool,
}

impl FrameChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.alphas.clear();
        self.colors.clear();
        self.geometry.clear();
        self.rebuilt = false;
    }

    /// Returns whether this frame changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alphas.is_empty() && self.colors.is_empty() && self.geometry.is_empty() && !self.rebuilt
    }
}

/// Struct-of-arrays storage for all figures of one ring.
#[derive(Debug, Default)]
pub struct FigureStore {
    polygons: Vec<Sector>,
    colors: Vec<Color>,
    alphas: Vec<u8>,
    dirty: Vec<ChannelSet>,
    pending_rebuild: bool,
}

impl FigureStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of figures.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "figure counts are sector counts; far below u32::MAX"
    )]
    pub fn len(&self) -> u32 {
        self.polygons.len() as u32
    }

    /// Returns whether the store holds no figures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Replaces the whole figure list with freshly built sectors.
    ///
    /// All figures start fully transparent (alpha 0) with the given fill
    /// color, matching a relayout: the old list is discarded, not patched.
    pub fn rebuild(&mut self, sectors: Vec<Sector>, color: Color) {
        let n = sectors.len();
        self.polygons = sectors;
        self.colors = vec![color; n];
        self.alphas = vec![0; n];
        self.dirty = vec![ChannelSet::EMPTY; n];
        for set in &mut self.dirty {
            set.mark(dirty::GEOMETRY);
        }
        self.pending_rebuild = true;
    }

    /// Discards all figures (e.g. when the bounds collapse to zero).
    pub fn clear(&mut self) {
        self.polygons.clear();
        self.colors.clear();
        self.alphas.clear();
        self.dirty.clear();
        self.pending_rebuild = true;
    }

    /// Sets the fill color of every figure in place.
    ///
    /// This never touches geometry or alphas; it is the one mutation that
    /// does not require a relayout.
    pub fn set_color(&mut self, color: Color) {
        for idx in 0..self.colors.len() {
            self.colors[idx] = color;
            self.dirty[idx].mark(dirty::COLOR);
        }
    }

    /// Writes a figure's alpha.
    ///
    /// Marks the ALPHA channel only when the value actually changes, so a
    /// timeline sampled faster than its fade resolves does not spam
    /// repaints.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn set_alpha(&mut self, idx: u32, alpha: u8) {
        self.check(idx);
        if self.alphas[idx as usize] != alpha {
            self.alphas[idx as usize] = alpha;
            self.dirty[idx as usize].mark(dirty::ALPHA);
        }
    }

    /// Returns the polygon at slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn polygon_at(&self, idx: u32) -> &Sector {
        self.check(idx);
        &self.polygons[idx as usize]
    }

    /// Returns the fill color at slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn color_at(&self, idx: u32) -> Color {
        self.check(idx);
        self.colors[idx as usize]
    }

    /// Returns the alpha at slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn alpha_at(&self, idx: u32) -> u8 {
        self.check(idx);
        self.alphas[idx as usize]
    }

    /// Drains all change channels, returning the frame's changes.
    #[must_use]
    pub fn evaluate(&mut self) -> FrameChanges {
        let mut changes = FrameChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided
    /// buffer to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut FrameChanges) {
        changes.clear();
        changes.rebuilt = self.pending_rebuild;
        self.pending_rebuild = false;

        for (idx, set) in self.dirty.iter_mut().enumerate() {
            if set.is_empty() {
                continue;
            }
            #[expect(
                clippy::cast_possible_truncation,
                reason = "figure counts are sector counts; far below u32::MAX"
            )]
            let idx = idx as u32;
            if set.contains(dirty::ALPHA) {
                changes.alphas.push(idx);
            }
            if set.contains(dirty::COLOR) {
                changes.colors.push(idx);
            }
            if set.contains(dirty::GEOMETRY) {
                changes.geometry.push(idx);
            }
            set.clear();
        }
    }

    /// Panics if the slot index is out of range.
    fn check(&self, idx: u32) {
        assert!(
            (idx as usize) < self.polygons.len(),
            "slot index {idx} out of range (len {})",
            self.polygons.len()
        );
    }
}
