//! Command-line argument parsing.
//!
//! The first argument is always the input path, taken verbatim. The rest are
//! scanned left to right: `-o` and `-n` take the next token as their value
//! whatever it looks like, and every other token is reported as a warning
//! instead of aborting the run.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::{Arg, Command};
use clap_lex::RawArgs;
use hexembed::{DEFAULT_VARIABLE_NAME, InvocationArgs};

/// Non-fatal problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ArgWarning {
    #[error("no outfile specified, assuming stdout")]
    MissingOutputPath,
    #[error("no variable name specified, assuming 'file'")]
    MissingVariableName,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Result of parsing the process arguments.
#[derive(Debug)]
pub(crate) struct Parsed {
    /// `None` when no input path was given.
    pub invocation: Option<InvocationArgs>,
    pub warnings: Vec<ArgWarning>,
}

/// Parse `argv` (including the program name).
pub(crate) fn parse<I, T>(argv: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw = RawArgs::new(argv);
    let mut cursor = raw.cursor();
    let mut warnings = Vec::new();

    // program name
    raw.next_os(&mut cursor);
    let Some(input) = raw.next_os(&mut cursor) else {
        return Parsed {
            invocation: None,
            warnings,
        };
    };

    let mut invocation = InvocationArgs::new(input);
    while let Some(arg) = raw.next(&mut cursor) {
        let token = arg.to_value_os();
        if token == OsStr::new("-o") {
            match raw.next_os(&mut cursor) {
                Some(path) => invocation.output = Some(PathBuf::from(path)),
                None => warnings.push(ArgWarning::MissingOutputPath),
            }
        } else if token == OsStr::new("-n") {
            match raw.next_os(&mut cursor) {
                Some(name) => invocation.variable_name = name.to_string_lossy().into_owned(),
                None => warnings.push(ArgWarning::MissingVariableName),
            }
        } else {
            warnings.push(ArgWarning::UnexpectedArgument(
                token.to_string_lossy().into_owned(),
            ));
        }
    }

    Parsed {
        invocation: Some(invocation),
        warnings,
    }
}

/// Description of the command line, used to render the usage text.
pub(crate) fn command() -> Command {
    Command::new("hexembed")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .required(true)
                .help("File to embed"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .value_name("OUTFILE")
                .help("Output file. If not specified, writes to stdout"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .value_name("NAME")
                .help("Base name of the generated symbols"),
        )
        .after_help(format!(
            "By default, the variable name is '{DEFAULT_VARIABLE_NAME}' and output goes to stdout."
        ))
}

/// Usage text printed when no input file is given.
pub(crate) fn usage() -> String {
    command().render_help().to_string()
}
