use toolkit_core::{Result, ToolkitError};

/// Convenience helpers over `Option<T>`
pub trait OptionExt<T> {
    /// Returns the wrapped value or fails with `error`
    fn or_throw<E>(self, error: E) -> std::result::Result<T, E>;

    /// Returns the wrapped value or fails with [`ToolkitError::NotFound`]
    fn or_not_found(self) -> Result<T>;

    /// Returns the wrapped value or the result of `default`, which only runs when empty
    fn or_lazy<F>(self, default: F) -> T
    where
        F: FnOnce() -> T;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_throw<E>(self, error: E) -> std::result::Result<T, E> {
        match self {
            Some(value) => Ok(value),
            None => Err(error),
        }
    }

    fn or_not_found(self) -> Result<T> {
        self.or_throw(ToolkitError::NotFound)
    }

    fn or_lazy<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(value) => value,
            None => default(),
        }
    }
}
