// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint plan: an ordered sequence of draw commands for one frame.

use alloc::vec::Vec;

use gyre_core::figure::{Color, FigureStore};

/// A single draw command: fill one closed polygon.
///
/// The polygon itself is read from the store by slot index; plans stay
/// cheap to rebuild every frame because they carry no point data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintItem {
    /// Slot index of the figure to draw.
    pub figure: u32,
    /// Fill color.
    pub color: Color,
    /// Opacity in [0, 255].
    pub alpha: u8,
}

/// An ordered list of draw commands for a single frame.
///
/// Items appear in figure-index order. Sectors never overlap, so index
/// order need not correspond to any z-order; hosts may paint in any order
/// they like.
#[derive(Clone, Debug, Default)]
pub struct PaintPlan {
    /// Draw commands, one per figure.
    pub items: Vec<PaintItem>,
}

impl PaintPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the plan from the current figure list.
    pub fn rebuild(&mut self, store: &FigureStore) {
        self.items.clear();
        self.items.reserve(store.len() as usize);
        for figure in 0..store.len() {
            self.items.push(PaintItem {
                figure,
                color: store.color_at(figure),
                alpha: store.alpha_at(figure),
            });
        }
    }

    /// Builds a fresh plan from the current figure list.
    #[must_use]
    pub fn build(store: &FigureStore) -> Self {
        let mut plan = Self::new();
        plan.rebuild(store);
        plan
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
