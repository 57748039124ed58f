//! # Common Types

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WSHashMap<K, V> {
            WSHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WSHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> WSHashSet<V> {
            WSHashSet::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WSHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WSHashSet<V> = foldhash::HashSet<V>;

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> WSHashSet<V> {
            foldhash::HashSetExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WSHashMap<K, V> {
            WSHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WSHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> WSHashSet<V> {
            WSHashSet::with_capacity(capacity)
        }
    }
}
