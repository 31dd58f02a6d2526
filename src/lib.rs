//! # dense-slots
//!
//! A dense, array-backed map from small non-negative integer keys to values.
//!
//! Keys are plain `usize` indices into the backing storage, so lookup costs
//! the same as indexing a `Vec`. The map hands out keys itself on
//! [`SlotMap::insert`] and recycles removed keys last-in first-out. Memory is
//! proportional to the highest key ever used, vacant slots included, so this
//! is meant for small, dense key spaces.
//!
//! ## Example
//!
//! ```rust
//! use dense_slots::SlotMap;
//!
//! let mut map: SlotMap<&str> = SlotMap::new();
//! let a = map.insert("a");
//! let b = map.insert("b");
//! map.remove(a);
//!
//! assert_eq!(map.insert("c"), a);
//! assert_eq!(map.get(b), Some(&"b"));
//! assert!(!map.has_value(100));
//! ```

#![deny(unsafe_code)]

mod error;
mod iter;
mod time;

pub use error::SlotMapError;
pub use iter::Enumerator;
pub use time::Time;

use std::fmt;
use std::mem;

// =============================================================================
// Configuration
// =============================================================================

/// Preallocation hint used by [`SlotMap::new`].
pub const DEFAULT_CAPACITY: usize = 32;

// =============================================================================
// SlotMap
// =============================================================================

/// Dense integer-keyed map with slot reuse.
///
/// Storage is three parallel stores:
/// - `values`: one `T` per slot; vacant slots hold `T::default()`
/// - `present`: `present[k]` is true iff slot `k` is live
/// - `free`: previously live slots awaiting reuse, popped from the end
///
/// `values.len() == present.len()` always, and every key in `free` is in
/// range, vacant, and listed once.
#[derive(Clone)]
pub struct SlotMap<T> {
    values: Vec<T>,
    present: Vec<bool>,
    free: Vec<usize>,
    /// Number of live slots.
    count: usize,
}

impl<T> SlotMap<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with room for `hint` slots before reallocating.
    ///
    /// The hint only affects allocation; [`capacity`](Self::capacity) is
    /// still 0.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            values: Vec::with_capacity(hint),
            present: Vec::with_capacity(hint),
            free: Vec::new(),
            count: 0,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots, live or vacant. Exclusive upper bound for keys.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Number of vacated keys waiting to be handed out by `insert`.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Bytes reserved by the backing stores.
    pub fn memory_usage(&self) -> usize {
        self.values.capacity() * mem::size_of::<T>()
            + self.present.capacity() * mem::size_of::<bool>()
            + self.free.capacity() * mem::size_of::<usize>()
    }

    /// Stores `value` under a key chosen by the map and returns that key.
    ///
    /// The most recently freed key is reused first. With no free keys the
    /// value is appended and gets `capacity() - 1`.
    pub fn insert(&mut self, value: T) -> usize {
        self.count += 1;
        if let Some(key) = self.free.pop() {
            debug_assert!(!self.present[key]);
            self.values[key] = value;
            self.present[key] = true;
            return key;
        }
        self.values.push(value);
        self.present.push(true);
        self.values.len() - 1
    }

    #[inline]
    pub fn has_value(&self, key: usize) -> bool {
        self.present.get(key).copied().unwrap_or(false)
    }

    #[inline]
    pub fn get(&self, key: usize) -> Option<&T> {
        if *self.present.get(key)? {
            Some(&self.values[key])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        if *self.present.get(key)? {
            Some(&mut self.values[key])
        } else {
            None
        }
    }

    /// Every slot in key order, vacant ones holding `T::default()`.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Presence flag for every slot in key order.
    #[inline]
    pub fn has_values(&self) -> &[bool] {
        &self.present
    }

    /// Iterates over every slot, vacant ones included. See [`Enumerator`].
    pub fn iter(&self) -> Enumerator<'_, T> {
        Enumerator::new(&self.values)
    }

    /// Drops every value and forgets all keys, free ones included.
    pub fn clear(&mut self) {
        tracing::trace!(capacity = self.values.len(), "clearing slot map");
        self.values.clear();
        self.present.clear();
        self.free.clear();
        self.count = 0;
    }
}

impl<T: Default> SlotMap<T> {
    /// Stores `value` under `key`, growing the map if needed.
    ///
    /// Slots skipped by growth are vacant. A live value already at `key` is
    /// silently replaced; a freed `key` is taken off the free list. Prefer
    /// [`insert`](Self::insert) unless keys must be chosen by the caller.
    ///
    /// # Panics
    ///
    /// Panics if the map cannot grow to hold `key`. See
    /// [`try_insert_at`](Self::try_insert_at) for the fallible form.
    pub fn insert_at(&mut self, key: usize, value: T) {
        if let Err(err) = self.try_insert_at(key, value) {
            panic!("{err}");
        }
    }

    /// Like [`insert_at`](Self::insert_at), but reports allocation failure.
    ///
    /// The map is unchanged when this returns an error.
    pub fn try_insert_at(&mut self, key: usize, value: T) -> Result<(), SlotMapError> {
        let len = self.values.len();
        if key >= len {
            let new_len = key
                .checked_add(1)
                .ok_or(SlotMapError::CapacityOverflow { key })?;
            let grow_by = new_len - len;
            if self.values.try_reserve(grow_by).is_err()
                || self.present.try_reserve(grow_by).is_err()
            {
                tracing::trace!(key, grow_by, "slot map growth refused");
                return Err(SlotMapError::CapacityOverflow { key });
            }
            tracing::trace!(key, grow_by, "growing slot map");
            self.values.resize_with(new_len, T::default);
            self.present.resize(new_len, false);
        } else if let Some(pos) = self.free.iter().position(|&k| k == key) {
            self.free.remove(pos);
        }

        if !self.present[key] {
            self.count += 1;
        }
        self.values[key] = value;
        self.present[key] = true;
        Ok(())
    }

    /// Vacates `key` and returns its value if it was live.
    ///
    /// Keys past the end are ignored. Removing a vacant key leaves the free
    /// list untouched.
    pub fn remove(&mut self, key: usize) -> Option<T> {
        if key >= self.values.len() {
            return None;
        }
        let old = mem::take(&mut self.values[key]);
        if mem::replace(&mut self.present[key], false) {
            self.free.push(key);
            self.count -= 1;
            Some(old)
        } else {
            None
        }
    }
}

impl<T: Clone + Default> SlotMap<T> {
    /// Returns the presence flag and a copy of the slot at `key`, or
    /// `(false, T::default())` past the end.
    pub fn try_get_value(&self, key: usize) -> (bool, T) {
        match (self.present.get(key), self.values.get(key)) {
            (Some(&present), Some(value)) => (present, value.clone()),
            _ => (false, T::default()),
        }
    }
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.values
                    .iter()
                    .enumerate()
                    .filter(|&(key, _)| self.present[key]),
            )
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a SlotMap<T> {
    type Item = &'a T;
    type IntoIter = Enumerator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
