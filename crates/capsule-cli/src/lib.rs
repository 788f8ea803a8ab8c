//! # capsule-cli — Front-Desk Console
//!
//! A line-oriented menu around [`capsule_core::CapsuleRegistry`]. The shell
//! reads raw text, converts it at the boundary, calls the registry, and
//! prints the outcome. It holds no booking logic of its own.
//!
//! ## Modules
//!
//! - `config` — command-line flags and tracing setup
//! - `shell` — the interactive session, generic over its streams

pub mod config;
pub mod shell;

pub use config::{Cli, LogFormat};
pub use shell::{MenuOption, Shell};
