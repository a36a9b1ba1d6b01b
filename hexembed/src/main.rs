mod cli;
mod io;

use std::process::ExitCode;

use anyhow::{Context, Result};
use hexembed::{DEFAULT_ALIGNMENT, Declaration, embed};
use log::{info, warn};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let parsed = cli::parse(std::env::args_os());
    for warning in &parsed.warnings {
        warn!("{warning}");
    }
    let Some(args) = parsed.invocation else {
        print!("{}", cli::usage());
        return Ok(ExitCode::FAILURE);
    };
    info!("Embedding with {args}");

    // output before input: a failed create must leave the input unopened
    let mut output = io::open_output(args.output.as_deref())?;
    let (input, size) = io::open_input(&args.input)?;

    let decl = Declaration {
        label: args.input.display().to_string(),
        name: args.variable_name,
        size,
        alignment: DEFAULT_ALIGNMENT,
    };
    let embedded = embed(input, &mut output, &decl)
        .with_context(|| format!("failed to embed input file '{}'", args.input.display()))?;
    info!(
        "Embedded {embedded} bytes from '{}' as '{}'",
        args.input.display(),
        decl.name
    );

    Ok(ExitCode::SUCCESS)
}
