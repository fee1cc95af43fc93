// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! The fade engine is a pure computation/animation core; everything that
//! touches a platform stays on the host's side of this boundary. A host
//! provides:
//!
//! - **Bounds** — the widget's bounding box in device pixels, fed into
//!   [`ProgressRing::set_bounds`] on every layout pass. Density-dependent
//!   sizing can go through [`Density`](crate::config::Density).
//!
//! - **Tick source** — a repaint/animation clock (e.g. `CADisplayLink`,
//!   `requestAnimationFrame`, a vsync callback) that calls
//!   [`ProgressRing::tick`] with the current [`HostTime`]. The engine
//!   owns no thread and never sleeps; between ticks, nothing moves.
//!
//! - **Painter** — an implementation of the [`Painter`] trait that applies
//!   drained [`FrameChanges`] to the native drawing surface. Each `alphas`
//!   entry is one opacity write and therefore one repaint request; a host
//!   that redraws everything per frame can ignore the indices and build a
//!   full paint plan instead (see the `gyre_render` crate).
//!
//! There is no network, file, or persisted-state surface in this core.
//!
//! [`ProgressRing::set_bounds`]: crate::ring::ProgressRing::set_bounds
//! [`ProgressRing::tick`]: crate::ring::ProgressRing::tick
//! [`HostTime`]: crate::time::HostTime

use crate::figure::{FigureStore, FrameChanges};

/// Applies evaluated frame changes to a host drawing surface.
///
/// Implemented by real hosts (canvas, scene graph) and by test doubles;
/// the harness crate's recording painter is one such double.
pub trait Painter {
    /// Applies the given [`FrameChanges`], reading current polygon, color,
    /// and alpha values from `store` as needed.
    ///
    /// When `changes.rebuilt` is set, any per-figure resources the host
    /// holds are stale and must be rebuilt from the store.
    fn apply(&mut self, store: &FigureStore, changes: &FrameChanges);
}
