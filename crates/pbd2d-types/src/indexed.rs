//! Contiguous buffers indexed by typed handles.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ids::Idx;

/// A `Vec<T>` that can only be indexed by the handle type `I`.
///
/// The buffer is owned by the body that created it; handles from
/// another body's buffer type-check but are a logic error.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedVec<I, T> {
    data: Vec<T>,
    _index: PhantomData<fn(I) -> I>,
}

impl<I: Idx, T> IndexedVec<I, T> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Wraps an existing vector; element `k` gets handle `I::from_index(k)`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            _index: PhantomData,
        }
    }

    /// Appends an element and returns its handle.
    pub fn push(&mut self, value: T) -> I {
        let id = I::from_index(self.data.len());
        self.data.push(value);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, id: I) -> Option<&T> {
        self.data.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.data.get_mut(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterates `(handle, element)` pairs in index order.
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (I::from_index(i), v))
    }

    /// Iterates every handle in index order.
    pub fn ids(&self) -> impl Iterator<Item = I> {
        (0..self.data.len()).map(I::from_index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<I: Idx, T: Clone> IndexedVec<I, T> {
    /// Creates a buffer of `len` copies of `value`.
    pub fn filled(value: T, len: usize) -> Self {
        Self::from_vec(vec![value; len])
    }

    /// Overwrites this buffer with the contents of `other`.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn copy_from(&mut self, other: &Self)
    where
        T: Copy,
    {
        self.data.copy_from_slice(&other.data);
    }
}

impl<I: Idx, T> Default for IndexedVec<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Idx, T> From<Vec<T>> for IndexedVec<I, T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<I: Idx, T> FromIterator<T> for IndexedVec<I, T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<I: Idx, T> Index<I> for IndexedVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, id: I) -> &T {
        &self.data[id.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexedVec<I, T> {
    #[inline]
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.data[id.index()]
    }
}

impl<'a, I: Idx, T> IntoIterator for &'a IndexedVec<I, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<I, T: Serialize> Serialize for IndexedVec<I, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, I, T: Deserialize<'de>> Deserialize<'de> for IndexedVec<I, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            data: Vec::deserialize(deserializer)?,
            _index: PhantomData,
        })
    }
}
