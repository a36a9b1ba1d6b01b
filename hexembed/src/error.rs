//! Error types for the embedding stream.

use std::io;

/// Error type for [`embed`](crate::embed).
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// Reading the input failed.
    #[error("failed to read input")]
    Read(#[source] io::Error),
    /// Writing the generated source failed.
    #[error("failed to write output")]
    Write(#[source] io::Error),
    /// Input ended before the advertised number of bytes was read.
    #[error("input ended after {actual} of {expected} bytes")]
    Truncated { expected: u64, actual: u64 },
    /// Input does not fit in the `int` size constant.
    #[error("input of {size} bytes exceeds the maximum of {max} bytes")]
    TooLarge { size: u64, max: u64 },
}
