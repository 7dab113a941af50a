use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

use crate::Semiring;

/// A sparse mapping `key -> value` that reads `zero` for absent keys.
///
/// Writing a value equal to `zero` removes the entry rather than storing
/// it, so iteration only ever yields non-zero entries.
#[derive(Clone, Debug)]
pub struct Chart<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V: Semiring> Chart<K, V> {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Chart {
            entries: HashMap::new(),
        }
    }

    /// Reads the value at `key`, defaulting to `zero` when absent.
    pub fn get<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).cloned().unwrap_or_else(V::zero)
    }

    /// Overwrites the value at `key`. Storing `zero` removes the entry.
    pub fn set(&mut self, key: K, value: V) {
        if value == V::zero() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }

    /// `chart[key] ⊕= value`.
    pub fn add_assign(&mut self, key: K, value: V) {
        let updated = self.get(&key).add(&value);
        self.set(key, updated);
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no non-zero entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns an arbitrary non-zero entry, if any.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let key = self.entries.keys().next().cloned()?;
        let value = self.entries.remove(&key)?;
        Some((key, value))
    }

    /// Iterates over non-zero entries.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash + Clone, V: Semiring> Default for Chart<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V: Semiring> IntoIterator for Chart<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
