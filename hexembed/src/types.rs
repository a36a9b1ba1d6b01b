//! Type definitions for an embedding run.

use std::fmt;
use std::path::PathBuf;

use crate::DEFAULT_VARIABLE_NAME;

/// Alignment directive placed in front of the array declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// GCC/Clang `__attribute__((aligned(N)))`.
    Gnu(u32),
    /// No directive; the array gets the compiler's natural alignment.
    None,
}

impl Alignment {
    /// Render the directive, including its trailing space.
    ///
    /// This is the only place the target compiler's attribute syntax appears.
    pub fn directive(self) -> String {
        match self {
            Alignment::Gnu(bytes) => format!("__attribute__((aligned({bytes}))) "),
            Alignment::None => String::new(),
        }
    }
}

/// Parameters of the generated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Text printed in the leading `/* Embedded file: ... */` comment.
    pub label: String,
    /// Base identifier for `<name>_size` and `<name>[]`.
    pub name: String,
    /// Number of bytes in the array.
    pub size: u64,
    pub alignment: Alignment,
}

/// Arguments of one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    /// File to embed.
    pub input: PathBuf,
    /// Destination file. `None` means standard output.
    pub output: Option<PathBuf>,
    /// Base name of the generated symbols.
    pub variable_name: String,
}

impl InvocationArgs {
    /// Arguments for `input` with every option at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
        }
    }
}

impl fmt::Display for InvocationArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input '{}', output {}, variable '{}'",
            self.input.display(),
            match &self.output {
                Some(path) => format!("'{}'", path.display()),
                None => "stdout".to_string(),
            },
            self.variable_name
        )
    }
}
