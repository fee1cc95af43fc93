// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring configuration, defaults, and configuration errors.
//!
//! Every knob the host can turn lives in [`RingConfig`]: sector count,
//! inter-sector padding, sector shape, fade cycle duration, and fill color.
//! Defaults match the reference visual (six kite sectors, 2px padding,
//! 1500ms cycle, teal fill).
//!
//! All failure modes in this crate are precondition violations, not runtime
//! faults; they surface as [`RingError`] before any geometry or timeline is
//! built.

use thiserror::Error;

use crate::figure::Color;

/// Fewest sectors for which ring geometry is defined.
///
/// Below three, sectors have zero or negative area.
pub const MIN_SECTORS: u32 = 3;

/// Default number of sectors.
pub const DEFAULT_SECTORS: u32 = 6;

/// Default padding between adjacent sectors, in device pixels.
pub const DEFAULT_PADDING: f64 = 2.0;

/// Default fade cycle duration in milliseconds.
pub const DEFAULT_CYCLE_MS: u64 = 1500;

/// Default fill color (`#00897b`).
pub const DEFAULT_COLOR: Color = Color::rgb(0x00, 0x89, 0x7b);

/// Default desired edge length of the widget, in density-independent pixels.
///
/// Hosts with a measurement pass can use this (via [`Density::px`]) as the
/// fallback size when no constraint is imposed.
pub const DEFAULT_SIZE_DP: f64 = 64.0;

/// The shape used for each sector of the ring.
///
/// Both variants share the same vertex ring and differ only in polygon
/// construction, so this is consumed by a single `match` in the geometry
/// builder rather than by trait dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Four-point sector: center, two neighbor midpoints, and the vertex.
    #[default]
    Kite,
    /// Three-point sector: center and two adjacent ring vertices.
    Triangle,
}

/// A configuration precondition violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// Sector count below [`MIN_SECTORS`]; the geometry is degenerate.
    #[error("ring needs at least {MIN_SECTORS} sectors, got {got}")]
    SectorCount {
        /// The rejected sector count.
        got: u32,
    },
    /// A zero-length fade cycle; per-sector delays would divide by zero
    /// time.
    #[error("fade cycle duration must be positive")]
    ZeroCycle,
    /// The scheduler was started with no figures to animate.
    #[error("cannot schedule fades for an empty figure list")]
    EmptyFigureList,
}

/// The full set of host-settable ring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    /// Number of sectors (and ring vertices). Must be at least
    /// [`MIN_SECTORS`].
    pub sectors: u32,
    /// Visual separation between adjacent sectors, in device pixels.
    pub padding: f64,
    /// Sector shape.
    pub shape: ShapeKind,
    /// Duration of one full fade cycle, in milliseconds. Must be positive.
    pub cycle_ms: u64,
    /// Fill color shared by all sectors.
    pub color: Color,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            sectors: DEFAULT_SECTORS,
            padding: DEFAULT_PADDING,
            shape: ShapeKind::default(),
            cycle_ms: DEFAULT_CYCLE_MS,
            color: DEFAULT_COLOR,
        }
    }
}

impl RingConfig {
    /// Checks all preconditions, returning the first violation.
    pub fn validate(&self) -> Result<(), RingError> {
        if self.sectors < MIN_SECTORS {
            return Err(RingError::SectorCount { got: self.sectors });
        }
        if self.cycle_ms == 0 {
            return Err(RingError::ZeroCycle);
        }
        Ok(())
    }
}

/// Display pixel density, as device pixels per density-independent pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(pub f64);

impl Density {
    /// Converts a dp value to whole device pixels (round-half-up).
    #[must_use]
    pub fn px(self, dp: f64) -> f64 {
        libm::floor(dp * self.0 + 0.5)
    }
}
