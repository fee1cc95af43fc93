// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core engine for a geometric ring progress indicator.
//!
//! `gyre_core` renders nothing itself. It builds a ring of sector polygons
//! around a center point and drives per-sector opacity timelines so that a
//! pulse of brightness appears to chase around the ring indefinitely. The
//! host supplies bounds and a tick source and paints the figures; the
//! crate is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! One frame of the loop flows through the crate like this:
//!
//! ```text
//!   Host tick (HostTime)
//!       │
//!       ▼
//!   FadeScheduler::tick() ──► Timeline::sample() ──► FigureStore alphas
//!                                                        │
//!                 ┌──────────────────────────────────────┘
//!                 ▼
//!   FigureStore::evaluate() ──► FrameChanges ──► Painter::apply()
//! ```
//!
//! **[`geometry`]** — Closed-form trigonometric sector construction:
//! vertex ring placement, kite/triangle polygons, and the radial
//! inner-offset that separates adjacent sectors.
//!
//! **[`figure`]** — Struct-of-arrays figure storage (polygon, fill color,
//! alpha) with per-channel change tracking drained into
//! [`FrameChanges`](figure::FrameChanges).
//!
//! **[`dirty`]** — The change channels and per-figure channel mask.
//!
//! **[`timeline`]** — Per-figure fade descriptors with start delay,
//! duration, repeat behavior, and an explicit lifecycle state machine.
//!
//! **[`scheduler`]** — Builds the staggered warm-up + main timeline set
//! and advances it cooperatively from host ticks.
//!
//! **[`ring`]** — [`ProgressRing`](ring::ProgressRing), the orchestrator
//! tying configuration, geometry, storage, and scheduling to the host
//! widget's lifecycle.
//!
//! **[`config`]** — Host-settable parameters, defaults, and
//! [`RingError`](config::RingError).
//!
//! **[`time`]** — Monotonic host ticks and timebase conversion.
//!
//! **[`backend`]** — The [`Painter`](backend::Painter) trait hosts
//! implement to consume frame changes.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod dirty;
pub mod figure;
pub mod geometry;
pub mod ring;
pub mod scheduler;
pub mod time;
pub mod timeline;
