//! # Capsule Registry
//!
//! The fixed row of capsules and the three booking operations on it:
//! check-in, check-out, and the windowed view.
//!
//! ## Validation Order
//!
//! ```text
//! check_in(n, name)  : range ──▶ occupied? ──▶ store
//! check_out(n)       : any guest? ──▶ range ──▶ vacant? ──▶ clear
//! view_window(n)     : range ──▶ window
//! ```
//!
//! A rejected operation never mutates a slot.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::slot::Slot;
use crate::window::{window_bounds, WindowEntry};

/// Largest number of capsules a registry may hold.
pub const MAX_CAPACITY: usize = 1_000_000;

/// Result of a successful check-in or check-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// 1-based capsule number.
    pub number: usize,
    /// Guest stored or vacated.
    pub guest: String,
}

/// A fixed-capacity row of capsules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapsuleRegistry {
    slots: Box<[Slot]>,
}

impl CapsuleRegistry {
    /// Create a registry of `capacity` vacant capsules.
    ///
    /// `capacity` must lie in `1..=MAX_CAPACITY`.
    pub fn new(capacity: i64) -> Result<Self, RegistryError> {
        let invalid = RegistryError::InvalidCapacity {
            requested: capacity,
        };
        let len = usize::try_from(capacity)
            .ok()
            .filter(|c| (1..=MAX_CAPACITY).contains(c))
            .ok_or_else(|| invalid.clone())?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|_| invalid)?;
        slots.resize(len, Slot::Empty);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of capsules.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of capsules with a guest.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Number of vacant capsules.
    pub fn vacant_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    /// Whether no guest is checked in anywhere.
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(Slot::is_occupied)
    }

    /// Read one capsule by its 1-based number.
    pub fn slot(&self, number: i64) -> Result<&Slot, RegistryError> {
        let index = self.index_of(number)?;
        Ok(&self.slots[index])
    }

    /// All capsules in order as `(number, slot)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot)> + '_ {
        self.slots.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Book `guest` into capsule `number`.
    pub fn check_in(
        &mut self,
        number: i64,
        guest: impl Into<String>,
    ) -> Result<Booking, RegistryError> {
        let index = self.index_of(number)?;
        let slot = &mut self.slots[index];
        if slot.is_occupied() {
            return Err(RegistryError::AlreadyOccupied { number: index + 1 });
        }
        let guest = guest.into();
        *slot = Slot::Occupied(guest.clone());
        Ok(Booking {
            number: index + 1,
            guest,
        })
    }

    /// Vacate capsule `number`.
    ///
    /// An entirely empty registry reports [`RegistryError::NoGuests`] before
    /// the number is even looked at.
    pub fn check_out(&mut self, number: i64) -> Result<Booking, RegistryError> {
        if self.is_empty() {
            return Err(RegistryError::NoGuests);
        }
        let index = self.index_of(number)?;
        let guest = self.slots[index]
            .take()
            .ok_or(RegistryError::Unoccupied { number: index + 1 })?;
        Ok(Booking {
            number: index + 1,
            guest,
        })
    }

    /// The window of up to [`VIEW_RANGE`](crate::VIEW_RANGE) capsules
    /// around `number`, in ascending order.
    pub fn view_window(&self, number: i64) -> Result<Vec<WindowEntry<'_>>, RegistryError> {
        let index = self.index_of(number)?;
        let bounds = window_bounds(self.capacity(), index + 1);
        Ok(self.slots[bounds.clone()]
            .iter()
            .zip(bounds)
            .map(|(slot, i)| WindowEntry::new(i, slot))
            .collect())
    }

    /// Map a 1-based capsule number to a slot index.
    fn index_of(&self, number: i64) -> Result<usize, RegistryError> {
        usize::try_from(number)
            .ok()
            .filter(|n| (1..=self.capacity()).contains(n))
            .map(|n| n - 1)
            .ok_or(RegistryError::OutOfRange {
                number,
                capacity: self.capacity(),
            })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
