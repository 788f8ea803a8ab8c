//! # capsule-core — Booking Core for the Capsule Hotel
//!
//! A capsule hotel is a fixed row of numbered capsules. Guests check into a
//! capsule by name and check out again; the front desk can look at a window
//! of neighbouring capsules around any number. This crate holds all of that
//! logic and performs no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit vacancy.** A capsule is a [`Slot`]: either `Empty` or
//!    `Occupied(name)`. An empty-string guest name is still a guest.
//!
//! 2. **1-based public numbering.** Every operation takes and returns the
//!    capsule number the operator sees (`1..=capacity`). Index arithmetic
//!    stays inside [`CapsuleRegistry`].
//!
//! 3. **Fixed capacity.** The slot container is allocated once and never
//!    grows or shrinks.
//!
//! ## Crate Policy
//!
//! - No I/O, no logging. The shell in `capsule-cli` owns the terminal.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every rejected operation leaves the registry untouched.

pub mod error;
pub mod parse;
pub mod registry;
pub mod slot;
pub mod window;

pub use error::RegistryError;
pub use parse::parse_capsule_number;
pub use registry::{Booking, CapsuleRegistry, MAX_CAPACITY};
pub use slot::Slot;
pub use window::{WindowEntry, HALF_RANGE, VIEW_RANGE};
