//! # Error Types
//!
//! Every failure the booking core can report. All of them are expected,
//! recoverable conditions: the shell prints the message and keeps looping.
//!
//! The `Display` text is the operator-facing message, so the shell can
//! print errors verbatim after its `ERROR` banner.

use thiserror::Error;

use crate::registry::MAX_CAPACITY;

fn capacity_message(requested: &i64) -> String {
    if *requested < 1 {
        "Number of capsules must be greater than 0.".to_string()
    } else {
        format!("Number of capsules must be at most {MAX_CAPACITY}.")
    }
}

/// Rejection reasons for registry construction and booking operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Capacity outside `1..=MAX_CAPACITY`.
    #[error("{}", capacity_message(.requested))]
    InvalidCapacity {
        /// The capacity that was requested.
        requested: i64,
    },

    /// Raw capsule-number text was not an integer.
    #[error("Invalid input. Please enter a valid capsule number.")]
    Parse {
        /// The text as supplied.
        input: String,
    },

    /// Capsule number outside `1..=capacity`.
    #[error("Capsule #{number} does not exist.")]
    OutOfRange {
        /// The requested capsule number.
        number: i64,
        /// Capacity of the registry.
        capacity: usize,
    },

    /// Check-in target already holds a guest.
    #[error("Capsule #{number} is occupied.")]
    AlreadyOccupied {
        /// The requested capsule number.
        number: usize,
    },

    /// Check-out target holds no guest.
    #[error("Capsule #{number} is unoccupied.")]
    Unoccupied {
        /// The requested capsule number.
        number: usize,
    },

    /// Check-out attempted while every capsule is empty.
    #[error("Sorry, check out is only available if there is at least one guest.")]
    NoGuests,
}
