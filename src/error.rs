// Copyright (c) 2026 The partial-hash-filter contributors
//
// Licensed under the MIT license.

//! Error types.
use std::io;

use thiserror::Error;

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by filter construction, insertion and decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied hash is shorter than the filter width and cannot be truncated.
    #[error("hash of {got} bytes is shorter than the filter width of {width} bytes")]
    InvalidWidth {
        /// The filter width, in bytes.
        width: u8,
        /// The length of the supplied hash.
        got: usize,
    },

    /// The filter was decoded from an empty stream and has no width.
    #[error("filter width is undefined")]
    UndefinedWidth,

    /// The encoded filter declares a width of zero.
    #[error("encoded filter declares a width of zero")]
    ZeroWidth,

    /// The expected element count is zero.
    #[error("expected element count must be positive")]
    ZeroElements,

    /// The false positive rate is not within `(0, 1)`.
    #[error("false positive rate must be within (0, 1), got {0}")]
    InvalidRate(f64),

    /// The minimum width is zero.
    #[error("minimum width must be at least one byte")]
    ZeroMinWidth,

    /// Reading or writing an encoded filter failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
