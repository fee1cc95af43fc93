// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time for the animation clock.
//!
//! [`HostTime`] is a point in time expressed in platform-native monotonic
//! ticks (e.g. `mach_absolute_time` on macOS, `performance.now()` scaled to
//! integer ticks on the web). The fade engine never reads a clock itself;
//! the host passes a `HostTime` into every tick.
//!
//! [`Timebase`] carries the rational conversion factor from ticks to
//! nanoseconds, so configuration values expressed in milliseconds can be
//! turned into tick-space [`Duration`]s for whatever clock the host drives.
//! All conversions use `u128` intermediates to avoid overflow.

use core::fmt;
use core::ops::Add;

/// A point in time expressed as platform-native monotonic ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Rational conversion factor from ticks to nanoseconds.
///
/// `nanoseconds = ticks * numer / denom`, following the
/// `mach_timebase_info` pattern. Hosts whose clock already counts
/// nanoseconds use [`Timebase::NANOS`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Numerator of the ticks-to-nanoseconds ratio.
    pub numer: u32,
    /// Denominator of the ticks-to-nanoseconds ratio.
    pub denom: u32,
}

impl Timebase {
    /// A timebase where ticks are already nanoseconds (1:1).
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Creates a new timebase with the given numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    #[inline]
    #[must_use]
    pub const fn new(numer: u32, denom: u32) -> Self {
        assert!(denom != 0, "timebase denominator must not be zero");
        Self { numer, denom }
    }

    /// Converts nanoseconds to a tick count.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn nanos_to_ticks(self, nanos: u64) -> u64 {
        let wide = nanos as u128 * self.denom as u128 / self.numer as u128;
        wide as u64
    }

    /// Converts a tick count to nanoseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        let wide = ticks as u128 * self.numer as u128 / self.denom as u128;
        wide as u64
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

/// A duration in the same tick units as [`HostTime`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns whether this duration is zero ticks long.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Creates a duration from a millisecond value and timebase.
    ///
    /// Cycle durations arrive from configuration in milliseconds; this maps
    /// them into the tick space of the host's clock.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64, timebase: Timebase) -> Self {
        Self(timebase.nanos_to_ticks(millis.saturating_mul(1_000_000)))
    }

    /// Returns `self * numer / denom` with a `u128` intermediate.
    ///
    /// Used for the per-sector stagger: sector `i` of `n` is offset by
    /// `cycle.mul_div(i, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn mul_div(self, numer: u64, denom: u64) -> Self {
        assert!(denom != 0, "mul_div denominator must not be zero");
        let wide = self.0 as u128 * numer as u128 / denom as u128;
        Self(wide as u64)
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_with_identity_timebase() {
        let d = Duration::from_millis(1500, Timebase::NANOS);
        assert_eq!(d.ticks(), 1_500_000_000, "1500ms at 1ns ticks");
    }

    #[test]
    fn millis_with_macos_style_timebase() {
        // Typical ARM Mac: 125/3 (ticks run at 24 MHz).
        let tb = Timebase::new(125, 3);
        let d = Duration::from_millis(1000, tb);
        assert_eq!(d.ticks(), 24_000_000, "1s of 24 MHz ticks");
        assert_eq!(tb.ticks_to_nanos(d.ticks()), 1_000_000_000);
    }

    #[test]
    fn mul_div_staggers_evenly() {
        let cycle = Duration(1000);
        assert_eq!(cycle.mul_div(0, 4), Duration::ZERO);
        assert_eq!(cycle.mul_div(1, 4), Duration(250));
        assert_eq!(cycle.mul_div(3, 4), Duration(750));
    }

    #[test]
    fn mul_div_is_overflow_safe() {
        let d = Duration(u64::MAX / 2);
        // Would overflow u64 if multiplied naively.
        let _ = d.mul_div(3, 4);
    }

    #[test]
    fn saturating_duration_since() {
        let t = HostTime(1000);
        assert_eq!(t.saturating_duration_since(HostTime(400)), Duration(600));
        assert_eq!(
            t.saturating_duration_since(HostTime(1500)),
            Duration::ZERO,
            "earlier time after self saturates to zero"
        );
    }

    #[test]
    fn host_time_plus_duration() {
        assert_eq!(HostTime(1000) + Duration(200), HostTime(1200));
    }
}
