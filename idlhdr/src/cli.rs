//! Command-line interface.

use clap::Parser;
use idlhdr_codegen::{CodegenError, GeneratorConfig, generate_from_file, write_header};
use idlhdr_schema::ExclusionSet;
use std::io::Write;
use std::path::PathBuf;

/// Generate a C header from an IDL document.
#[derive(Debug, Parser)]
#[command(name = "idlhdr", version, about)]
pub struct Args {
    /// IDL document to read.
    #[arg(long, short, default_value = "dawn.json")]
    pub input: PathBuf,

    /// Header to write. Printed to stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Comma-separated tags whose declarations are omitted. May be repeated.
    #[arg(long = "exclude-tags", short = 'x', value_name = "TAGS")]
    pub exclude_tags: Vec<String>,

    /// Prefix for generated type names (default `WGPU`).
    #[arg(long)]
    pub type_prefix: Option<String>,

    /// Prefix for function symbols (default `wgpu`).
    #[arg(long)]
    pub function_prefix: Option<String>,

    /// Also emit proc-table typedefs.
    #[arg(long)]
    pub procs: bool,
}

impl Args {
    /// Builds the generator configuration from the parsed arguments.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default()
            .with_exclusions(ExclusionSet::from_lists(&self.exclude_tags))
            .with_procs(self.procs);
        if let Some(prefix) = &self.type_prefix {
            config = config.with_type_prefix(prefix.clone());
        }
        if let Some(prefix) = &self.function_prefix {
            config = config.with_function_prefix(prefix.clone());
        }
        config
    }
}

/// Runs one generator invocation.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
/// Returns `CodegenError` if the document cannot be read, fails to parse, or
/// cannot be compiled into a header.
pub fn run(args: &Args) -> Result<(), CodegenError> {
    let config = args.config();
    tracing::info!("reading {}", args.input.display());
    let header = generate_from_file(&args.input, &config)?;

    match &args.output {
        Some(path) => write_header(path, &header)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(header.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
