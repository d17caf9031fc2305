//! Insertion-ordered backing store.
//!
//! [`OrderedMap`] is the container behind every [`Registry`](crate::Registry):
//! a `Vec` of entries in registration order plus an [`FxHashMap`] from key to
//! slot for O(1) lookup. Overwriting an existing key replaces the value in
//! place, keeping the original insertion position.

use rustc_hash::FxHashMap;

/// Key-to-value map that iterates in insertion order.
pub struct OrderedMap<V> {
	entries: Vec<(String, V)>,
	index: FxHashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> OrderedMap<V> {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
			index: FxHashMap::default(),
		}
	}

	/// Number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the map holds no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns true if `key` is present.
	#[inline]
	pub fn contains_key(&self, key: &str) -> bool {
		self.index.contains_key(key)
	}

	/// Looks up a value by key.
	pub fn get(&self, key: &str) -> Option<&V> {
		self.index.get(key).map(|&slot| &self.entries[slot].1)
	}

	/// Inserts `value` under `key`, returning the previous value if the key
	/// was already present. A replaced entry keeps its insertion position.
	pub fn insert(&mut self, key: String, value: V) -> Option<V> {
		match self.index.get(key.as_str()) {
			Some(&slot) => {
				let old = std::mem::replace(&mut self.entries[slot].1, value);
				Some(old)
			}
			None => {
				self.index.insert(key.clone(), self.entries.len());
				self.entries.push((key, value));
				None
			}
		}
	}

	/// Iterates over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Iterates over keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}

	/// Iterates over values in insertion order.
	pub fn values(&self) -> impl Iterator<Item = &V> {
		self.entries.iter().map(|(_, v)| v)
	}

	/// Removes every entry.
	pub fn clear(&mut self) {
		self.entries.clear();
		self.index.clear();
	}
}
