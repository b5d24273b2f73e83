//! A compact, sorted filter for testing membership of truncated cryptographic
//! hashes, such as checking a certificate hash against a revocation list.
//!
//! # Partial Hash Filters
//!
//! Rather than storing full-length hashes, the filter keeps only their leading
//! `width` bytes, sorted, and answers membership queries by binary search. The
//! answer is "possibly in set" or "definitely not in set": an unrelated hash
//! sharing the same leading bytes is a false positive. Hashes can be added,
//! but not removed.
//!
//! The width is the smallest number of bytes that keeps the false positive
//! probability under a configured tolerance, given the number of hashes the
//! filter is expected to hold. A [`PartitionOffset`] further reduces it when
//! the usage context has already narrowed down the candidate space.
//!
//! # Sizing
//!
//! With `n` expected hashes and a tolerated false positive rate `p`, the width
//! is:
//!
//! w = ⌈(⌈log<sub>2</sub> n⌉ + ⌈log<sub>2</sub> 1/p⌉ − o) / 8⌉
//!
//! where `o` is the number of bits saved by the partition offset, floored at a
//! caller supplied minimum.
//!
//! # Encoding
//!
//! A filter encodes to a single width byte, followed by each truncated hash in
//! ascending order, big-endian. See [`codec`].
//!
//! # Example
//!
//! ```
//! use partial_hash_filter::{Insertion, PartialHashFilter, PartitionOffset};
//!
//! let mut filter = PartialHashFilter::with_params(1, PartitionOffset::Point, 1000, 0.000_001)?;
//! assert_eq!(filter.width(), 4);
//!
//! assert_eq!(filter.add(&[0xde, 0xad, 0xbe, 0xef, 0x01, 0x02])?, Insertion::Stored);
//!
//! filter.might_contain(&[0xde, 0xad, 0xbe, 0xef, 0xff]); // true
//! filter.might_contain(&[0xca, 0xfe, 0xba, 0xbe]); // false
//! filter.might_contain(&[0xde, 0xad]); // false, too short
//!
//! let bytes = filter.to_bytes();
//! assert_eq!(bytes, [4, 0xde, 0xad, 0xbe, 0xef]);
//! assert_eq!(PartialHashFilter::from_bytes(&bytes)?, filter);
//! # Ok::<(), partial_hash_filter::Error>(())
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod codec;
pub mod error;
pub mod filter;
pub mod hashvec;
pub mod sizing;

pub use error::{Error, Result};
pub use filter::{Insertion, PartialHashFilter};
pub use sizing::{PartitionOffset, Sizing};
