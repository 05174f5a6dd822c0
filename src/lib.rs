//! # Toolkit
//!
//! Shared extensions and utilities for use across apps.
//!
//! This crate re-exports the workspace members so that consumers depend on a
//! single package:
//! - [`toolkit_core`]: the [`ToolkitError`] taxonomy and the [`Clock`] port
//! - [`toolkit_utils`]: extension traits over `str`, slices, `Option`,
//!   `chrono::DateTime`, `Result` and maps
//!
//! ```
//! use toolkit::prelude::*;
//!
//! assert_eq!("  hello  ".trimmed(), "hello");
//! assert_eq!([1, 2, 2, 3].unique(), vec![1, 2, 3]);
//! assert_eq!(None::<u8>.or_not_found(), Err(ToolkitError::NotFound));
//! ```

pub mod prelude;

// Re-export main public types
pub use toolkit_core::{Clock, FixedClock, Result, SystemClock, ToolkitError};
pub use toolkit_utils::{
    dates, mapping, optional, result, sequence, text, DateTimeExt, MapExt, OptionExt, ResultExt,
    SliceExt, StrExt,
};
