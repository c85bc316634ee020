//! Core `IList` implementation.
//!
//! `IList` is an ordinary ordered, mutable sequence with two extras:
//! - Broadcasts: `get_attribute()`, `map()`, `call_each()` and `abs()` apply
//!   the same read to every element and collect the results in order
//! - Hooks: optional `on_append`/`on_remove` callbacks run after mutations

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use super::attributes::{Abs, Attributes};
use super::callbacks::Callbacks;
use crate::error::{IListError, IListResult};

/// An "intelligent" list that broadcasts attribute reads across its elements.
///
/// ```rust
/// use ilist::{impl_attributes, IList};
///
/// struct Complex { re: f64, im: f64 }
/// impl_attributes!(Complex => f64 { real: |c| c.re, imag: |c| c.im });
///
/// let l = IList::from(vec![Complex { re: 3.0, im: 4.0 }, Complex { re: 6.0, im: 0.0 }]);
/// assert_eq!(l.get_attribute("real").unwrap(), [3.0, 6.0]);
/// ```
pub struct IList<T> {
    items: Vec<T>,
    callbacks: Callbacks<T>,
}

impl<T> IList<T> {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates a new empty list without hooks.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            callbacks: Callbacks::new(),
        }
    }

    /// Creates a list from `items` with the given hooks.
    ///
    /// `on_append` runs once for every initial element, in order, after the
    /// whole list has been built.
    pub fn with_callbacks<I>(items: I, callbacks: Callbacks<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let list = Self {
            items: items.into_iter().collect(),
            callbacks,
        };
        if let Some(cb) = &list.callbacks.on_append {
            for item in &list.items {
                cb(&list, item);
            }
        }
        list
    }

    /// Returns the hooks attached to this list.
    pub fn callbacks(&self) -> &Callbacks<T> {
        &self.callbacks
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`.
    pub fn get(&self, index: usize) -> IListResult<&T> {
        let length = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| IListError::index_out_of_range(index, length))
    }

    /// Gets a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> IListResult<&mut T> {
        let length = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| IListError::index_out_of_range(index, length))
    }

    /// Returns true if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> IListResult<usize>
    where
        T: PartialEq,
    {
        self.items
            .iter()
            .position(|item| item == value)
            .ok_or(IListError::NotFound)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Consumes the list, dropping its hooks.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> IListResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Adds `value` to the end of the list, then runs `on_append`.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
        trace!(len = self.items.len(), "appended element");
        self.run_on_append(self.items.len() - 1);
    }

    /// Inserts `value` before position `index` (`index == len` appends), then runs `on_append`.
    pub fn insert(&mut self, index: usize, value: T) -> IListResult<()> {
        if index > self.items.len() {
            return Err(IListError::index_out_of_range(index, self.items.len()));
        }
        self.items.insert(index, value);
        trace!(index, len = self.items.len(), "inserted element");
        self.run_on_append(index);
        Ok(())
    }

    /// Removes the first element equal to `value`, then runs `on_remove`.
    pub fn remove(&mut self, value: &T) -> IListResult<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        Ok(self.take(index))
    }

    /// Removes the element at `index`, then runs `on_remove`.
    pub fn remove_at(&mut self, index: usize) -> IListResult<T> {
        if index >= self.items.len() {
            return Err(IListError::index_out_of_range(index, self.items.len()));
        }
        Ok(self.take(index))
    }

    /// Removes the last element, then runs `on_remove`.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        Some(self.take(last))
    }

    // =========================================================================
    // BROADCASTS
    // =========================================================================

    /// Reads attribute `name` from every element, in order.
    ///
    /// Fails on the first element without the attribute; no partial result
    /// is returned.
    pub fn get_attribute(&self, name: &str) -> IListResult<IList<T::Value>>
    where
        T: Attributes,
    {
        trace!(name, len = self.items.len(), "broadcasting attribute");
        self.try_map_indexed(|index, item| {
            item.attribute(name).ok_or_else(|| {
                debug!(index, name, "element has no such attribute");
                IListError::attribute_missing(index, name)
            })
        })
    }

    /// Applies `f` to every element, in order.
    pub fn map<U, F>(&self, f: F) -> IList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.items.iter().map(f).collect()
    }

    /// Applies a fallible `f` to every element, stopping at the first error.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<IList<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        self.try_map_indexed(|_, item| f(item))
    }

    /// Calls every element with a clone of `args`, in order.
    pub fn call_each<A, R>(&self, args: A) -> IList<R>
    where
        T: Fn(A) -> R,
        A: Clone,
    {
        self.map(|f| f(args.clone()))
    }

    /// Magnitude of every element, in order.
    pub fn abs(&self) -> IList<T::Output>
    where
        T: Abs,
    {
        self.map(|item| item.abs())
    }

    // =========================================================================
    // INTERNAL HELPERS
    // =========================================================================

    fn try_map_indexed<U, E, F>(&self, mut f: F) -> Result<IList<U>, E>
    where
        F: FnMut(usize, &T) -> Result<U, E>,
    {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| f(index, item))
            .collect::<Result<Vec<U>, E>>()?;
        Ok(IList::from(items))
    }

    /// Removes the element at a known-valid `index` and runs `on_remove`.
    fn take(&mut self, index: usize) -> T {
        let value = self.items.remove(index);
        trace!(index, len = self.items.len(), "removed element");
        if let Some(cb) = &self.callbacks.on_remove {
            cb(&*self, &value);
        }
        value
    }

    fn run_on_append(&self, index: usize) {
        if let (Some(cb), Some(item)) = (&self.callbacks.on_append, self.items.get(index)) {
            cb(self, item);
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<T> Default for IList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for IList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<T> From<Vec<T>> for IList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            callbacks: Callbacks::new(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for IList<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> From<IList<T>> for Vec<T> {
    fn from(list: IList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for IList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

/// Each element goes through `append`, so `on_append` runs per element.
impl<T> Extend<T> for IList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> IntoIterator for IList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut IList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> AsRef<[T]> for IList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

/// Panics when out of bounds, like `Vec`. Use [`IList::get`] for a checked read.
impl<T> Index<usize> for IList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for IList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

// =============================================================================
// COMPARISON
// =============================================================================

impl<T: PartialEq<U>, U> PartialEq<IList<U>> for IList<T> {
    fn eq(&self, other: &IList<U>) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for IList<T> {}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for IList<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for IList<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for IList<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for IList<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.items == *other
    }
}

impl<T: PartialOrd> PartialOrd for IList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<T: Ord> Ord for IList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.cmp(&other.items)
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for IList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for IList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

// =============================================================================
// SERDE
// =============================================================================

/// Serializes as a plain sequence; hooks are not serialized.
impl<T: Serialize> Serialize for IList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for IList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// TESTS
// =============================================================================
