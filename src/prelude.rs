//! Glob-import this module to bring every extension trait into scope.

pub use toolkit_core::{Clock, Result, ToolkitError};
pub use toolkit_utils::{DateTimeExt, MapExt, OptionExt, ResultExt, SliceExt, StrExt};
