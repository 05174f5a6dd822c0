//! # Toolkit Core
//!
//! Shared building blocks for the toolkit extension traits:
//! - The [`ToolkitError`] taxonomy and crate-wide [`Result`] alias
//! - The [`Clock`] port that supplies "now" to the time helpers
//!
//! Nothing in this crate performs I/O beyond reading the system clock.

pub mod clock;
pub mod errors;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Result, ToolkitError};
