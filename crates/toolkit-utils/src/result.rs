/// Non-consuming projections over `Result<T, E>`
pub trait ResultExt<T, E> {
    /// Returns the success value or `None`
    fn success_value(&self) -> Option<&T>;

    /// Returns the failure error or `None`
    fn failure_error(&self) -> Option<&E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn success_value(&self) -> Option<&T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    fn failure_error(&self) -> Option<&E> {
        match self {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolkit_core::ToolkitError;

    #[test]
    fn test_success_value() {
        let success: Result<i32, ToolkitError> = Ok(42);
        let failure: Result<i32, ToolkitError> = Err(ToolkitError::NotFound);

        assert_eq!(success.success_value(), Some(&42));
        assert_eq!(failure.success_value(), None);
    }

    #[test]
    fn test_failure_error() {
        let success: Result<i32, ToolkitError> = Ok(42);
        let failure: Result<i32, ToolkitError> = Err(ToolkitError::NotFound);

        assert_eq!(success.failure_error(), None);
        assert_eq!(failure.failure_error(), Some(&ToolkitError::NotFound));
    }

    #[test]
    fn test_exactly_one_projection_is_present() {
        let results: Vec<Result<&str, String>> =
            vec![Ok("a"), Err("boom".to_string()), Ok(""), Err(String::new())];

        for result in &results {
            assert_ne!(
                result.success_value().is_some(),
                result.failure_error().is_some()
            );
        }

        // Projections borrow, the result is still usable afterwards
        assert_eq!(results[1].failure_error().map(String::as_str), Some("boom"));
        assert_eq!(results.len(), 4);
    }
}
