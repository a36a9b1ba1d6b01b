//! Embed a binary file in a C program as a byte array declaration.
//!
//! # Output Format
//!
//! For an input of `N` bytes and variable name `name` the generated text is:
//!
//! ```text
//! /* Embedded file: <input path> */
//! const int name_size = N;
//! __attribute__((aligned(4))) const unsigned char name[] = {
//! 	0x00,0x01,...,0x0f,
//! 	0x10,...
//! };
//! ```
//!
//! - Every byte becomes a lowercase `0x%02x` literal.
//! - Literals are comma separated, [`BYTES_PER_ROW`] per row, each row
//!   indented by one tab. There is no trailing comma.
//! - The alignment directive is controlled by [`Alignment`]; the default is
//!   [`DEFAULT_ALIGNMENT`].
//!
//! The emitter streams: the input is read in chunks and each literal is
//! written as soon as its byte is seen, so neither the input nor the output
//! is held in memory.

mod emit;
mod error;
mod types;

pub use emit::{embed, write_footer, write_header};
pub use error::EmbedError;
pub use types::{Alignment, Declaration, InvocationArgs};

/// Variable name used when `-n` is not given.
pub const DEFAULT_VARIABLE_NAME: &str = "file";

/// Alignment attached to the array when nothing else is requested.
pub const DEFAULT_ALIGNMENT: Alignment = Alignment::Gnu(4);

/// Number of byte literals per output row.
pub const BYTES_PER_ROW: u64 = 16;

/// Largest input accepted, since the size is declared as a C `int`.
pub const MAX_INPUT_SIZE: u64 = i32::MAX as u64;
