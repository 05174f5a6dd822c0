use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Convenience helpers over key/value maps
pub trait MapExt {
    /// Returns a new map with the entries of both; on shared keys `other` wins.
    /// Neither map is modified.
    fn merged(&self, other: &Self) -> Self;
}

impl<K, V, S> MapExt for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn merged(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        result
    }
}

impl<K, V> MapExt for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn merged(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        result
    }
}
