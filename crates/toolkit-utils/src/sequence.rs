use log::debug;
use std::collections::HashSet;
use std::hash::Hash;
use toolkit_core::{Result, ToolkitError};

/// Convenience helpers over slices (and therefore `Vec<T>` and arrays)
pub trait SliceExt<T> {
    /// Bounds-checked lookup that accepts negative indices and returns `None` instead of panicking
    fn safe_get(&self, index: isize) -> Option<&T>;

    /// Splits into consecutive chunks of `size` elements; the last chunk may be shorter
    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone;

    /// Returns unique elements while preserving order
    fn unique(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    /// Returns elements with a unique key, keeping the first element seen for each key
    fn unique_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;
}

impl<T> SliceExt<T> for [T] {
    fn safe_get(&self, index: isize) -> Option<&T> {
        usize::try_from(index).ok().and_then(|i| self.get(i))
    }

    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            debug!("Rejected chunk size 0 for slice of {} elements", self.len());
            return Err(ToolkitError::InvalidValue(
                "Chunk size must be at least 1".to_string(),
            ));
        }

        Ok(self.chunks(size).map(<[T]>::to_vec).collect())
    }

    fn unique(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }

    fn unique_by<K, F>(&self, mut key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(key_fn(item)))
            .cloned()
            .collect()
    }
}
