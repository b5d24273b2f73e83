// Copyright (c) 2026 The partial-hash-filter contributors
//
// Licensed under the MIT license.

//! Truncation width sizing.
//!
//! A candidate hash collides with one of `n` stored `w`-bit values with a
//! probability of roughly `n / 2^w`. Keeping that under a tolerance `p`
//! requires `w >= log2(n) + log2(1/p)` bits. Some usage contexts have already
//! narrowed the candidate space before the filter is consulted; the bits they
//! fix are subtracted, see [`PartitionOffset`].
use crate::error::{Error, Result};

/// The default false positive probability value, one in a million.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.000_001;

/// The default minimum width, in bytes.
pub const DEFAULT_MIN_WIDTH: u8 = 1;

/// Usage context of a filter, determining how many bits of the hash space are
/// already partitioned away before lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartitionOffset {
    /// Exact point lookup, nothing is saved.
    #[default]
    Point,
    /// Vector-reduced lookup, one byte is saved.
    Vector,
    /// Coordinate-reduced lookup, two bytes are saved.
    Coordinate,
}

impl PartitionOffset {
    /// Number of bits saved by this partitioning.
    pub fn bits(self) -> u32 {
        match self {
            Self::Point => 0,
            Self::Vector => 8,
            Self::Coordinate => 16,
        }
    }

    /// Number of bytes saved by this partitioning.
    pub fn bytes(self) -> u8 {
        (self.bits() / 8) as u8
    }
}

/// Parameters a filter is dimensioned with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sizing {
    /// Lower bound on the computed width, in bytes.
    pub min_width: u8,
    /// Usage context.
    pub partition_offset: PartitionOffset,
    /// Number of hashes the filter is expected to hold.
    pub expected_elements: usize,
    /// Tolerated probability of a false positive.
    pub false_positive_rate: f64,
}

impl Default for Sizing {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            partition_offset: PartitionOffset::default(),
            expected_elements: 1,
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
        }
    }
}

impl Sizing {
    /// Sizing for the given number of expected elements, with default settings otherwise.
    pub fn new(expected_elements: usize) -> Self {
        Self {
            expected_elements,
            ..Self::default()
        }
    }

    /// Set the minimum width.
    pub fn min_width(mut self, min_width: u8) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the partition offset.
    pub fn partition_offset(mut self, offset: PartitionOffset) -> Self {
        self.partition_offset = offset;
        self
    }

    /// Set the false positive rate.
    pub fn false_positive_rate(mut self, fp_rate: f64) -> Self {
        self.false_positive_rate = fp_rate;
        self
    }

    /// Compute the truncation width for these parameters.
    pub fn width(&self) -> Result<u8> {
        optimal_width(
            self.min_width,
            self.partition_offset,
            self.expected_elements,
            self.false_positive_rate,
        )
    }
}

/// Return the truncation width, in bytes, that keeps the false positive rate of a
/// filter holding `expected_elements` hashes under `fp_rate`.
///
/// The result is never smaller than `min_width`.
pub fn optimal_width(
    min_width: u8,
    offset: PartitionOffset,
    expected_elements: usize,
    fp_rate: f64,
) -> Result<u8> {
    if min_width == 0 {
        return Err(Error::ZeroMinWidth);
    }
    if expected_elements == 0 {
        return Err(Error::ZeroElements);
    }
    if !(fp_rate > 0. && fp_rate < 1.) {
        return Err(Error::InvalidRate(fp_rate));
    }
    let bits = (index_bits(expected_elements) + slack_bits(fp_rate)).saturating_sub(offset.bits());
    let width = bits.div_ceil(8).max(min_width as u32);

    log::debug!(
        "Sizing {} elements at rate {} with {:?} offset: {} bits, {} bytes",
        expected_elements,
        fp_rate,
        offset,
        bits,
        width
    );
    // At most 64 index bits plus 1074 slack bits for the smallest subnormal
    // rate, ie. 143 bytes, or `min_width` itself.
    debug_assert!(width <= u8::MAX as u32);

    Ok(width as u8)
}

/// Return the estimated false positive rate of a filter of the given width holding
/// `count` elements.
pub fn false_positive_rate(width: u8, offset: PartitionOffset, count: usize) -> f64 {
    let exponent = 8 * width as i32 + offset.bits() as i32;
    (count as f64 / 2f64.powi(exponent)).min(1.)
}

/// Bits needed to tell `n` values apart, ie. `ceil(log2(n))`.
fn index_bits(n: usize) -> u32 {
    usize::BITS - (n - 1).leading_zeros()
}

/// Bits needed to push collisions under the given rate, ie. `ceil(log2(1/p))`.
fn slack_bits(fp_rate: f64) -> u32 {
    (-fp_rate.log2()).ceil() as u32
}
