//! Input and output acquisition.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use log::debug;

/// Open the destination for generated source: a created file, or stdout.
pub(crate) fn open_output(output_path: Option<&Path>) -> Result<Box<dyn Write>> {
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            debug!("Opened output file '{}'", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Open the file to embed and measure its length.
pub(crate) fn open_input(input_path: &Path) -> Result<(BufReader<File>, u64)> {
    let file = File::open(input_path)
        .with_context(|| format!("failed to open input file '{}'", input_path.display()))?;
    let metadata = file.metadata().with_context(|| {
        format!(
            "failed to get metadata for input file '{}'",
            input_path.display()
        )
    })?;
    if !metadata.is_file() {
        bail!(
            "cannot determine length of input file '{}': not a regular file",
            input_path.display()
        );
    }
    debug!(
        "Opened input file '{}' of {} bytes",
        input_path.display(),
        metadata.len()
    );
    Ok((BufReader::new(file), metadata.len()))
}
