// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-plan definitions for hosts that redraw whole frames.
//!
//! Incremental hosts consume [`FrameChanges`](gyre_core::figure::FrameChanges)
//! through the [`Painter`](gyre_core::backend::Painter) trait. Hosts that
//! clear and repaint every frame (immediate-mode canvases, most test
//! rigs) build a [`PaintPlan`](plan::PaintPlan) instead: the full ordered
//! figure list, one draw command per sector.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod plan;

pub use plan::{PaintItem, PaintPlan};
