//! # Toolkit Utils
//!
//! Extension traits that add small convenience helpers to standard types.
//! Each module covers one primitive:
//! - [`text`]: `str`
//! - [`sequence`]: slices, `Vec<T>` and arrays
//! - [`optional`]: `Option<T>`
//! - [`dates`]: `chrono::DateTime<Tz>`
//! - [`result`]: `Result<T, E>`
//! - [`mapping`]: `HashMap` and `BTreeMap`
//!
//! All helpers are pure and thread-safe; the only external input is the
//! clock used by the date helpers.

pub mod dates;
pub mod mapping;
pub mod optional;
pub mod result;
pub mod sequence;
pub mod text;

// Re-export common types for convenience
pub use dates::DateTimeExt;
pub use mapping::MapExt;
pub use optional::OptionExt;
pub use result::ResultExt;
pub use sequence::SliceExt;
pub use text::StrExt;
