//! # Capsule Slot
//!
//! The per-capsule state: vacant, or holding exactly one guest name.

use serde::{Deserialize, Serialize};

/// Marker shown for a vacant capsule.
pub const UNOCCUPIED_MARKER: &str = "[unoccupied]";

/// The state of a single capsule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// No guest.
    #[default]
    Empty,
    /// Booked by the named guest.
    Occupied(String),
}

impl Slot {
    /// Whether a guest is checked in.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// The guest name, if occupied.
    pub fn guest(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Occupied(name) => Some(name),
        }
    }

    /// Vacate the slot, returning the previous guest.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Occupied(name) => Some(name),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.guest().unwrap_or(UNOCCUPIED_MARKER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_still_occupied() {
        let slot = Slot::Occupied(String::new());
        assert!(slot.is_occupied());
        assert_eq!(slot.guest(), Some(""));
    }

    #[test]
    fn test_take_vacates() {
        let mut slot = Slot::Occupied("John".into());
        assert_eq!(slot.take(), Some("John".to_string()));
        assert_eq!(slot, Slot::Empty);
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Slot::Empty.to_string(), "[unoccupied]");
        assert_eq!(Slot::Occupied("Mary".into()).to_string(), "Mary");
    }
}
