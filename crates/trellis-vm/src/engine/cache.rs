//! Generation-scoped memo tables.
//!
//! A cache decides node identity for one generation only: the scheduler clears
//! it in place at every token boundary, while the nodes it pointed to live on
//! in their arenas.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub struct Cache<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: Copy> Cache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value, computing and storing it on first request.
    #[inline]
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> V {
        *self.map.entry(key).or_insert_with(make)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
