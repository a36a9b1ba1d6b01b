//! Streaming conversion of raw bytes into the array declaration.

use std::io::{self, Read, Write};

use crate::error::EmbedError;
use crate::types::Declaration;
use crate::{BYTES_PER_ROW, MAX_INPUT_SIZE};

const CHUNK_SIZE: usize = 8 * 1024;

/// Write the comment, size constant and array opener.
pub fn write_header<W: Write + ?Sized>(writer: &mut W, decl: &Declaration) -> io::Result<()> {
    writeln!(writer, "/* Embedded file: {} */", decl.label)?;
    writeln!(writer, "const int {}_size = {};", decl.name, decl.size)?;
    write!(
        writer,
        "{}const unsigned char {}[] = {{\n\t",
        decl.alignment.directive(),
        decl.name
    )
}

/// Close the array declaration.
pub fn write_footer<W: Write + ?Sized>(writer: &mut W) -> io::Result<()> {
    write!(writer, "\n}};\n")
}

/// Separator written in front of the byte at `index`.
fn separator(index: u64) -> &'static str {
    if index == 0 {
        ""
    } else if index % BYTES_PER_ROW == 0 {
        ",\n\t"
    } else {
        ","
    }
}

/// Stream exactly `decl.size` bytes from `reader` into `writer` as a complete
/// declaration, returning the number of bytes embedded.
///
/// Bytes past `decl.size` are never read. A reader that ends early fails with
/// [`EmbedError::Truncated`] after the partial output has been written; the
/// caller is expected to discard it.
pub fn embed<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    decl: &Declaration,
) -> Result<u64, EmbedError> {
    if decl.size > MAX_INPUT_SIZE {
        return Err(EmbedError::TooLarge {
            size: decl.size,
            max: MAX_INPUT_SIZE,
        });
    }

    write_header(&mut writer, decl).map_err(EmbedError::Write)?;

    let mut reader = reader.take(decl.size);
    let mut buf = [0u8; CHUNK_SIZE];
    let mut embedded = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(EmbedError::Read(e)),
        };
        for &byte in &buf[..n] {
            write!(writer, "{}0x{byte:02x}", separator(embedded)).map_err(EmbedError::Write)?;
            embedded += 1;
        }
    }

    if embedded != decl.size {
        return Err(EmbedError::Truncated {
            expected: decl.size,
            actual: embedded,
        });
    }

    write_footer(&mut writer).map_err(EmbedError::Write)?;
    writer.flush().map_err(EmbedError::Write)?;
    Ok(embedded)
}
