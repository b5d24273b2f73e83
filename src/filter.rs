// Copyright (c) 2026 The partial-hash-filter contributors
//
// Licensed under the MIT license.

//! A membership filter over truncated hashes.
use std::io;

use crate::codec;
use crate::error::{Error, Result};
use crate::hashvec::HashVec;
use crate::sizing::{self, PartitionOffset, Sizing};

/// Outcome of a successful [`PartialHashFilter::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The hash was stored within the provisioned capacity.
    Stored,
    /// The hash was stored, but the filter now holds more elements than it was
    /// dimensioned for. The realized false positive rate may exceed the
    /// configured tolerance.
    OverCapacity,
}

/// A sorted filter of hashes truncated to a fixed width.
#[derive(Clone, Debug)]
pub struct PartialHashFilter {
    hashes: HashVec,
    provisioned: usize,
}

impl PartialHashFilter {
    /// Return a new filter sized for a given number of expected elements.
    /// The false positive rate is set to [`sizing::DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn new(expected_elements: usize) -> Result<Self> {
        Self::with_sizing(Sizing::new(expected_elements))
    }

    /// Return a new filter sized for a given number of expected elements
    /// and a desired false positive rate.
    pub fn with_rate(expected_elements: usize, fp_rate: f64) -> Result<Self> {
        Self::with_sizing(Sizing::new(expected_elements).false_positive_rate(fp_rate))
    }

    /// Return a new filter given all sizing parameters.
    pub fn with_params(
        min_width: u8,
        offset: PartitionOffset,
        expected_elements: usize,
        fp_rate: f64,
    ) -> Result<Self> {
        Self::with_sizing(Sizing {
            min_width,
            partition_offset: offset,
            expected_elements,
            false_positive_rate: fp_rate,
        })
    }

    /// Return a new filter dimensioned by the given sizing.
    pub fn with_sizing(sizing: Sizing) -> Result<Self> {
        let width = sizing.width()?;

        Ok(Self {
            hashes: HashVec::with_capacity(width, sizing.expected_elements),
            provisioned: sizing.expected_elements,
        })
    }

    /// Decode a filter from its binary representation.
    ///
    /// An empty input gives an empty filter without a width, which matches
    /// nothing and accepts no insertions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let hashes = codec::decode(bytes)?;
        let provisioned = hashes.capacity();

        Ok(Self {
            hashes,
            provisioned,
        })
    }

    /// Read a filter from a stream, until end of input.
    pub fn read_from<R: io::Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Self::from_bytes(&bytes)
    }

    /// Return the binary representation of this filter.
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode(&self.hashes)
    }

    /// Write the binary representation of this filter to a stream.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;

        Ok(())
    }

    /// Add a hash to the filter. Only the leading [`width`](Self::width) bytes
    /// are kept.
    ///
    /// Fails with [`Error::InvalidWidth`] if the hash is too short to be
    /// truncated, in which case the filter is left unchanged. Adding beyond the
    /// provisioned capacity succeeds, but is reported as [`Insertion::OverCapacity`].
    pub fn add(&mut self, hash: &[u8]) -> Result<Insertion> {
        if !self.hashes.insert(hash)? {
            return Ok(Insertion::Stored);
        }
        if self.hashes.len() == self.provisioned + 1 {
            log::warn!(
                "Filter has more elements than the {} it was sized for; \
                 the false positive rate may exceed its configured tolerance",
                self.provisioned
            );
        } else {
            log::debug!(
                "Filter holds {} elements, {} over its provisioned size",
                self.hashes.len(),
                self.hashes.len() - self.provisioned
            );
        }
        Ok(Insertion::OverCapacity)
    }

    /// Return whether or not a hash sharing the leading [`width`](Self::width) bytes of
    /// `hash` was added. There is a possibility for a false positive, but a false
    /// negative will never occur.
    ///
    /// Returns `false` for hashes shorter than the filter width.
    pub fn might_contain(&self, hash: &[u8]) -> bool {
        self.hashes.contains(hash)
    }

    /// Truncation width, in bytes. Zero only for a filter decoded from empty input.
    pub fn width(&self) -> u8 {
        self.hashes.width()
    }

    /// Number of hashes in the filter.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Check whether the filter holds no hashes.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Number of element slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.hashes.capacity()
    }

    /// Number of elements the filter was dimensioned for.
    pub fn provisioned(&self) -> usize {
        self.provisioned
    }

    /// Check whether more hashes were added than the filter was dimensioned for.
    pub fn is_over_capacity(&self) -> bool {
        self.hashes.len() > self.provisioned
    }

    /// Iterate over the truncated hashes, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.hashes.iter()
    }

    /// Estimate the current false positive rate, given the usage context the
    /// filter is queried in.
    pub fn estimated_false_positive_rate(&self, offset: PartitionOffset) -> f64 {
        if self.width() == 0 {
            return 0.;
        }
        sizing::false_positive_rate(self.width(), offset, self.len())
    }
}

impl PartialEq for PartialHashFilter {
    fn eq(&self, other: &Self) -> bool {
        self.hashes.width() == other.hashes.width()
            && self.hashes.as_bytes() == other.hashes.as_bytes()
    }
}

impl Eq for PartialHashFilter {}

impl TryFrom<&[u8]> for PartialHashFilter {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl From<PartialHashFilter> for Vec<u8> {
    fn from(other: PartialHashFilter) -> Vec<u8> {
        other.to_bytes()
    }
}
