//! String-keyed index with separate chaining.
//!
//! Buckets hold the head of a chain; chain links are indices into a single
//! entry arena. The bucket count is fixed at construction and entries are
//! never removed.

use crate::config::KeyMatch;
use crate::constants::{HASH_BASE, HASH_MODULUS};

/// Polynomial rolling hash of `name` over its bytes.
///
/// Bytes are widened as signed values, so names containing non-ASCII text
/// can hash to a negative number. Callers that need a table slot use the
/// absolute value.
pub fn polynomial_hash(name: &str) -> i64 {
    let mut hash = 0i64;
    let mut p_pow = 1i64;
    for &byte in name.as_bytes() {
        hash = (hash + i64::from(byte as i8) * p_pow) % HASH_MODULUS;
        p_pow = (p_pow * HASH_BASE) % HASH_MODULUS;
    }
    hash
}

#[derive(Debug, Clone)]
struct MapEntry<V> {
    /// Absolute value of the name's hash.
    key: u64,
    name: String,
    value: V,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct HashIndex<V> {
    buckets: Vec<Option<usize>>,
    entries: Vec<MapEntry<V>>,
    key_match: KeyMatch,
}

impl<V> HashIndex<V> {
    /// Creates an index with `bucket_count` chains. A zero count is raised
    /// to one so every name still has a slot.
    pub fn with_buckets(bucket_count: usize, key_match: KeyMatch) -> Self {
        HashIndex {
            buckets: vec![None; bucket_count.max(1)],
            entries: Vec::new(),
            key_match,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn key_match(&self) -> KeyMatch {
        self.key_match
    }

    fn slot(&self, key: u64) -> usize {
        (key % self.buckets.len() as u64) as usize
    }

    /// Prepends `value` to the chain for `name`. Existing entries for the
    /// same name are kept; the new one shadows them on lookup.
    pub fn insert(&mut self, name: &str, value: V) {
        let key = polynomial_hash(name).unsigned_abs();
        let slot = self.slot(key);
        let idx = self.entries.len();
        self.entries.push(MapEntry {
            key,
            name: name.to_string(),
            value,
            next: self.buckets[slot],
        });
        self.buckets[slot] = Some(idx);
    }

    fn find(&self, name: &str) -> Option<usize> {
        let key = polynomial_hash(name).unsigned_abs();
        let mut cursor = self.buckets[self.slot(key)];
        while let Some(idx) = cursor {
            let entry = &self.entries[idx];
            if entry.key == key
                && (self.key_match == KeyMatch::HashOnly || entry.name == name)
            {
                return Some(idx);
            }
            cursor = entry.next;
        }
        None
    }

    /// Most recently inserted value matching `name`.
    pub fn search(&self, name: &str) -> Option<&V> {
        self.find(name).map(|idx| &self.entries[idx].value)
    }

    #[cfg(test)]
    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of entries sharing the bucket that `name` maps to.
    #[cfg(test)]
    fn chain_len(&self, name: &str) -> usize {
        let key = polynomial_hash(name).unsigned_abs();
        let mut cursor = self.buckets[self.slot(key)];
        let mut len = 0;
        while let Some(idx) = cursor {
            len += 1;
            cursor = self.entries[idx].next;
        }
        len
    }
}
