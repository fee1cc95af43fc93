// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector geometry: closed-form trigonometric vertex placement.
//!
//! The ring is built in two passes. First a *vertex ring* is laid out: `n`
//! points on a circle around the center, evenly spaced by `360/n` degrees,
//! rotated so the seam between the first and last sector is centered at the
//! top rather than a vertex sitting at 0°. Then one closed polygon is built
//! per index, shaped per [`ShapeKind`]:
//!
//! - **Triangle** — spans center to two adjacent ring vertices.
//! - **Kite** — spans center, the midpoint toward the previous vertex, the
//!   vertex itself, and the midpoint toward the next vertex.
//!
//! Neighbor lookups wrap with modular index arithmetic, so the first and
//! last sector need no special casing.
//!
//! # Padding
//!
//! Sector separation is produced by displacing each whole polygon radially
//! outward by `(n * padding) / 2π` — as if the total padding budget were
//! wrapped around a circle of that radius. This is a designed approximation
//! rather than an exact edge-gap measurement, and it is preserved as such:
//! a geometrically exact gap would change the rendered output.

use alloc::vec;
use alloc::vec::Vec;

use core::f64::consts::TAU;

use kurbo::{Point, Size, Vec2};

use crate::config::{MIN_SECTORS, RingError, ShapeKind};

/// One closed sector polygon.
///
/// The point sequence starts and ends at the same point. Each sector owns
/// its points; no two sectors alias.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    points: Vec<Point>,
}

impl Sector {
    /// Returns the polygon's points, first == last.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns whether the polygon is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }
}

/// Places `n` vertices on a circle of `radius` around `center`.
///
/// Index order is angular order, and the ring is cyclic: consecutive
/// vertices (including last back to first) are angularly adjacent. The
/// first vertex sits at `90 + 180/n` degrees so the ring's seams straddle
/// the top of the circle.
#[must_use]
pub fn vertex_ring(center: Point, radius: f64, n: u32) -> Vec<Point> {
    let step = 360.0 / f64::from(n);
    let start = 90.0 + step / 2.0;
    (0..n)
        .map(|i| center + radius * unit(start + f64::from(i) * step))
        .collect()
}

/// Builds the ordered sector list for the given bounds and parameters.
///
/// `padding` separates adjacent sectors (see the module docs for the
/// displacement model); `center` is the shared ring center, normally the
/// middle of `bounds`.
///
/// # Errors
///
/// Returns [`RingError::SectorCount`] if `sectors < 3`; fewer leaves the
/// polygons with zero or negative area.
pub fn build_sectors(
    bounds: Size,
    sectors: u32,
    padding: f64,
    shape: ShapeKind,
    center: Point,
) -> Result<Vec<Sector>, RingError> {
    if sectors < MIN_SECTORS {
        return Err(RingError::SectorCount { got: sectors });
    }

    let size = bounds.min_side();
    let circumference = f64::from(sectors) * padding;
    let inner_offset = circumference / TAU;
    let radius = size / 2.0 - libm::floor(inner_offset);

    let n = sectors as usize;
    let step = 360.0 / f64::from(sectors);
    let start = 90.0 + step / 2.0;
    let ring = vertex_ring(center, radius, sectors);

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let angle = start + i as f64 * step;
        let sector = match shape {
            ShapeKind::Triangle => {
                // Displaced along the bisector of the sector's two vertex
                // angles.
                let offset = inner_offset * unit(angle + step / 2.0);
                let a = ring[i] + offset;
                let b = ring[(i + 1) % n] + offset;
                let c = center + offset;
                Sector {
                    points: vec![c, a, b, c],
                }
            }
            ShapeKind::Kite => {
                // Displaced along the vertex angle itself.
                let offset = inner_offset * unit(angle);
                let before = ring[i].midpoint(ring[(i + n - 1) % n]) + offset;
                let tip = ring[i] + offset;
                let after = ring[i].midpoint(ring[(i + 1) % n]) + offset;
                let c = center + offset;
                Sector {
                    points: vec![c, before, tip, after, c],
                }
            }
        };
        out.push(sector);
    }
    Ok(out)
}

/// Unit vector at `angle` degrees.
fn unit(angle: f64) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(libm::cos(rad), libm::sin(rad))
}
