// Copyright (c) 2026 The partial-hash-filter contributors
//
// Licensed under the MIT license.

//! Binary encoding of filters.
//!
//! ```text
//! byte 0      : width (1..255)
//! byte 1..end : elements, each `width` bytes, big-endian, ascending
//! ```
//!
//! There is no magic number, version or count field. The element count is
//! derived from the length of the input.
use crate::error::{Error, Result};
use crate::hashvec::HashVec;

/// Encode a vector of hashes, header first.
///
/// A vector with an undefined width encodes to an empty byte string.
pub fn encode(hashes: &HashVec) -> Vec<u8> {
    if hashes.width() == 0 {
        return Vec::new();
    }
    let body = hashes.as_bytes();
    let mut bytes = Vec::with_capacity(1 + body.len());

    bytes.push(hashes.width());
    bytes.extend_from_slice(body);
    bytes
}

/// Decode a vector of hashes.
///
/// Empty input yields an empty vector with an undefined width. Trailing bytes
/// that do not form a whole element are ignored. Elements need not be sorted in
/// the input.
pub fn decode(bytes: &[u8]) -> Result<HashVec> {
    let Some((&width, body)) = bytes.split_first() else {
        return Ok(HashVec::default());
    };
    if width == 0 {
        return Err(Error::ZeroWidth);
    }
    let trailing = body.len() % width as usize;
    if trailing > 0 {
        log::warn!(
            "Ignoring {} trailing byte(s) of encoded filter with width {}",
            trailing,
            width
        );
    }
    Ok(HashVec::from_unsorted(width, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENCODED: [u8; 15] = [2, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

    #[test]
    fn test_decode() {
        let hashes = decode(&ENCODED).unwrap();
        let elements = hashes
            .iter()
            .map(|e| u16::from_be_bytes([e[0], e[1]]))
            .collect::<Vec<_>>();

        assert_eq!(hashes.width(), 2);
        assert_eq!(hashes.capacity(), 7);
        assert_eq!(
            elements,
            vec![0x0102, 0x0304, 0x0506, 0x0708, 0x090a, 0x0b0c, 0x0d0e]
        );
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&decode(&ENCODED).unwrap()), ENCODED);
    }

    #[test]
    fn test_decode_sorts() {
        let hashes = decode(&[1, 9, 3, 7, 3, 0]).unwrap();
        assert_eq!(hashes.as_bytes(), &[0, 3, 3, 7, 9]);
        assert_eq!(encode(&hashes), vec![1, 0, 3, 3, 7, 9]);
    }

    #[test]
    fn test_decode_trailing() {
        let hashes = decode(&[3, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        assert_eq!(hashes.len(), 2);
        assert_eq!(encode(&hashes), vec![3, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decode_header_only() {
        let hashes = decode(&[4]).unwrap();

        assert_eq!(hashes.width(), 4);
        assert!(hashes.is_empty());
        assert_eq!(encode(&hashes), vec![4]);
    }

    #[test]
    fn test_decode_empty() {
        let hashes = decode(&[]).unwrap();

        assert_eq!(hashes.width(), 0);
        assert!(hashes.is_empty());
        assert!(encode(&hashes).is_empty());
    }

    #[test]
    fn test_decode_zero_width() {
        assert!(matches!(decode(&[0, 1, 2]), Err(Error::ZeroWidth)));
        assert!(matches!(decode(&[0]), Err(Error::ZeroWidth)));
    }

    #[test]
    fn test_encode_skips_unused_slots() {
        let mut hashes = HashVec::with_capacity(5, 3);
        hashes.insert(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();
        hashes.insert(&[0, 0, 11, 12, 13, 14, 15]).unwrap();

        assert_eq!(encode(&hashes), vec![5, 0, 0, 11, 12, 13, 0, 1, 2, 3, 4]);
    }
}
