//! # Windowed Guest View
//!
//! The front desk views at most [`VIEW_RANGE`] consecutive capsules at a
//! time. Which capsules make up the window depends on where the requested
//! number sits in the row:
//!
//! ```text
//! capacity <= 11 or n < 5   ──▶ first min(11, capacity) capsules
//! n + 5 >= capacity         ──▶ last 11 capsules
//! otherwise                 ──▶ n-5 ..= n+5
//! ```
//!
//! The branches are tested in that order. The lower threshold is a strict
//! `n < HALF_RANGE`, so `n == 5` on a large row takes the centered branch;
//! the centered start is clamped at capsule 1, which makes that window
//! identical to the first one.

use std::ops::Range;

use serde::Serialize;

use crate::slot::{Slot, UNOCCUPIED_MARKER};

/// Number of capsules in one window.
pub const VIEW_RANGE: usize = 11;

/// Capsules shown on each side of the centre.
pub const HALF_RANGE: usize = VIEW_RANGE / 2;

/// One line of a windowed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowEntry<'a> {
    /// 1-based capsule number.
    pub number: usize,
    /// Guest name, or `None` when vacant.
    pub guest: Option<&'a str>,
}

impl<'a> WindowEntry<'a> {
    pub(crate) fn new(index: usize, slot: &'a Slot) -> Self {
        Self {
            number: index + 1,
            guest: slot.guest(),
        }
    }

    /// Whether a guest occupies this capsule.
    pub fn is_occupied(&self) -> bool {
        self.guest.is_some()
    }
}

impl std::fmt::Display for WindowEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.number, self.guest.unwrap_or(UNOCCUPIED_MARKER))
    }
}

/// 0-based slot range shown for capsule `number` in a row of `capacity`.
///
/// `number` must already be within `1..=capacity`.
pub(crate) fn window_bounds(capacity: usize, number: usize) -> Range<usize> {
    if capacity <= VIEW_RANGE || number < HALF_RANGE {
        0..capacity.min(VIEW_RANGE)
    } else if number + HALF_RANGE >= capacity {
        capacity - VIEW_RANGE..capacity
    } else {
        let start = number.saturating_sub(HALF_RANGE + 1);
        start..start + VIEW_RANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1-based inclusive bounds, easier to read against the console output.
    fn shown(capacity: usize, number: usize) -> (usize, usize) {
        let r = window_bounds(capacity, number);
        (r.start + 1, r.end)
    }

    #[test]
    fn test_small_registry_shows_everything() {
        assert_eq!(shown(1, 1), (1, 1));
        assert_eq!(shown(7, 7), (1, 7));
        assert_eq!(shown(11, 6), (1, 11));
        assert_eq!(shown(11, 11), (1, 11));
    }

    #[test]
    fn test_lower_threshold_is_strict() {
        assert_eq!(shown(20, 1), (1, 11));
        assert_eq!(shown(20, 4), (1, 11));
        // 5 takes the centered branch, clamped to capsule 1.
        assert_eq!(window_bounds(20, 5), 0..11);
        assert_eq!(shown(20, 6), (1, 11));
        assert_eq!(shown(20, 7), (2, 12));
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(shown(20, 9), (4, 14));
        assert_eq!(shown(100, 50), (45, 55));
        assert_eq!(shown(20, 14), (9, 19));
    }

    #[test]
    fn test_upper_threshold_is_inclusive() {
        // 15 + 5 == 20 switches to the last window.
        assert_eq!(shown(20, 15), (10, 20));
        assert_eq!(shown(20, 20), (10, 20));
        assert_eq!(shown(12, 7), (2, 12));
    }

    #[test]
    fn test_capacity_twelve_edges() {
        assert_eq!(shown(12, 1), (1, 11));
        assert_eq!(shown(12, 4), (1, 11));
        assert_eq!(shown(12, 5), (1, 11));
        assert_eq!(shown(12, 6), (1, 11));
        assert_eq!(shown(12, 12), (2, 12));
    }

    #[test]
    fn test_entry_display() {
        let john = Slot::Occupied("John".into());
        assert_eq!(WindowEntry::new(0, &john).to_string(), "1: John");
        assert_eq!(WindowEntry::new(9, &Slot::Empty).to_string(), "10: [unoccupied]");
    }
}
