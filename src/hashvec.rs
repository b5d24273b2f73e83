// Copyright (c) 2026 The partial-hash-filter contributors
//
// Licensed under the MIT license.

//! Sorted fixed-width hash storage.
use std::fmt::Debug;

use crate::error::{Error, Result};

/// Upper bound on the bytes reserved up front; storage beyond it is allocated as
/// elements are inserted.
const MAX_RESERVED_BYTES: usize = 1 << 24;

/// A packed, sorted vector of truncated hashes.
///
/// Every element is exactly `width` bytes, stored back to back in ascending
/// lexicographic order. Since all elements share a width, this is also their
/// order as big-endian unsigned integers.
#[derive(Clone, PartialEq, Eq)]
pub struct HashVec {
    bytes: Vec<u8>,
    width: u8,
    capacity: usize,
}

impl HashVec {
    /// Create a new empty vector of the given width, with `capacity` element slots.
    pub fn with_capacity(width: u8, capacity: usize) -> Self {
        let reserved = (width as usize).saturating_mul(capacity);

        Self {
            bytes: Vec::with_capacity(reserved.min(MAX_RESERVED_BYTES)),
            width,
            capacity,
        }
    }

    /// Create a vector from raw, possibly unsorted, element bytes.
    /// Any trailing bytes not making up a whole element are dropped.
    pub(crate) fn from_unsorted(width: u8, bytes: &[u8]) -> Self {
        debug_assert!(width > 0);

        let mut elements = bytes.chunks_exact(width as usize).collect::<Vec<_>>();
        elements.sort_unstable();

        let capacity = elements.len();
        Self {
            bytes: elements.concat(),
            width,
            capacity,
        }
    }

    /// Width of each element, in bytes.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get the number of stored elements.
    pub fn len(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        self.bytes.len() / self.width as usize
    }

    /// Check whether this vector is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of element slots currently provisioned.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert the leading `width` bytes of `hash` at its sorted position.
    ///
    /// Returns `true` if the vector had to grow past its capacity to make room.
    pub fn insert(&mut self, hash: &[u8]) -> Result<bool> {
        if self.width == 0 {
            return Err(Error::UndefinedWidth);
        }
        if hash.len() < self.width as usize {
            return Err(Error::InvalidWidth {
                width: self.width,
                got: hash.len(),
            });
        }
        let key = &hash[..self.width as usize];
        let grown = self.len() == self.capacity;

        if grown {
            self.capacity += 1;
            self.bytes.reserve(self.width as usize);
        }
        let index = self.partition_point(key);
        let offset = index * self.width as usize;

        self.bytes.splice(offset..offset, key.iter().copied());

        Ok(grown)
    }

    /// Check whether an element equal to the leading `width` bytes of `candidate` is stored.
    pub fn contains(&self, candidate: &[u8]) -> bool {
        if self.width == 0 || candidate.len() < self.width as usize {
            return false;
        }
        let key = &candidate[..self.width as usize];
        let index = self.partition_point(key);

        index > 0 && self.element(index - 1) == key
    }

    /// Get the element at the given index.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index < self.len() {
            Some(self.element(index))
        } else {
            None
        }
    }

    /// Iterate over elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // A zero width only occurs with no elements; avoid a zero chunk size.
        self.bytes.chunks_exact(self.width.max(1) as usize)
    }

    /// Return the underlying bytes storage, without header.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Index of the first element greater than `key`.
    fn partition_point(&self, key: &[u8]) -> usize {
        let (mut lo, mut hi) = (0, self.len());

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.element(mid) <= key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    fn element(&self, index: usize) -> &[u8] {
        let width = self.width as usize;
        &self.bytes[index * width..(index + 1) * width]
    }
}

impl Default for HashVec {
    /// An empty vector with an undefined width.
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}

impl Debug for HashVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hex: Vec<String> = self
            .iter()
            .map(|e| e.iter().map(|b| format!("{:02x}", b)).collect())
            .collect();
        write!(f, "HashVec({}; [{}])", self.width, hex.join(", "))
    }
}
