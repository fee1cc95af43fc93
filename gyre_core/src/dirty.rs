// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change-tracking channels for the figure list.
//!
//! Each channel is an independent category of change. Mutating a figure
//! marks the matching channel; each
//! [`FigureStore::evaluate`](crate::figure::FigureStore::evaluate) call
//! drains all channels into [`FrameChanges`](crate::figure::FrameChanges)
//! for the host to consume.
//!
//! The figure list is flat — there is no ancestry and nothing propagates —
//! so a per-figure bitmask is all the tracking required:
//!
//! - [`ALPHA`] — a timeline wrote a new opacity value. One mark per write
//!   per frame; this channel is the repaint signal.
//! - [`COLOR`] — the fill color was replaced. Marked on every figure by a
//!   bulk color change; never triggers a relayout.
//! - [`GEOMETRY`] — the figure's polygon changed. Marked on every figure a
//!   rebuild creates; geometry is only ever replaced as a unit, and the
//!   drained changes carry a `rebuilt` flag alongside the indices.

/// A single change-tracking channel, usable as a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Channel(u8);

/// A timeline wrote the figure's alpha.
pub const ALPHA: Channel = Channel(1 << 0);

/// The figure's fill color changed.
pub const COLOR: Channel = Channel(1 << 1);

/// The figure's polygon was rebuilt.
pub const GEOMETRY: Channel = Channel(1 << 2);

/// The set of channels marked on one figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelSet(u8);

impl ChannelSet {
    /// An empty set.
    pub const EMPTY: Self = Self(0);

    /// Marks a channel.
    #[inline]
    pub fn mark(&mut self, channel: Channel) {
        self.0 |= channel.0;
    }

    /// Returns whether a channel is marked.
    #[inline]
    #[must_use]
    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & channel.0 != 0
    }

    /// Clears all channels.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Returns whether no channel is marked.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_contains() {
        let mut set = ChannelSet::EMPTY;
        assert!(set.is_empty());

        set.mark(ALPHA);
        assert!(set.contains(ALPHA));
        assert!(!set.contains(COLOR));
        assert!(!set.contains(GEOMETRY));
    }

    #[test]
    fn channels_are_independent() {
        let mut set = ChannelSet::EMPTY;
        set.mark(COLOR);
        set.mark(GEOMETRY);
        assert!(!set.contains(ALPHA));
        assert!(set.contains(COLOR));
        assert!(set.contains(GEOMETRY));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = ChannelSet::EMPTY;
        set.mark(ALPHA);
        set.mark(COLOR);
        set.clear();
        assert!(set.is_empty());
    }
}
