use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use syn::{parse_quote, Path};
use tlsparse_gen::{GenOptions, SourceIndex, HEADER};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(
    name = "tlsparse-gen",
    version,
    about = "Generates TLS-style length-prefixed decoders from Rust struct declarations"
)]
struct Cli {
    /// Rust source files declaring the records and everything they reference.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Record to generate a decoder for. May be repeated; decoders are emitted in this order.
    #[arg(short = 't', long = "type", value_name = "NAME", required = true)]
    types: Vec<String>,

    /// Write the generated code here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path of the runtime crate used by the generated code.
    #[arg(long, value_name = "PATH", default_value = "::tlsparse", value_parser = check_path)]
    runtime: String,

    /// Appended to the snake case record name to name each generated function.
    #[arg(long, default_value = "_parser")]
    suffix: String,

    /// Reject input that has bytes left over after the record.
    #[arg(long, action = ArgAction::SetTrue)]
    check_complete: bool,

    /// Make generated functions `pub(crate)` instead of `pub`.
    #[arg(long, action = ArgAction::SetTrue)]
    crate_visibility: bool,

    /// Disable tracing logs.
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> syn::Result<GenOptions> {
        Ok(GenOptions {
            runtime: syn::parse_str::<Path>(&self.runtime)?,
            visibility: if self.crate_visibility {
                parse_quote!(pub(crate))
            } else {
                parse_quote!(pub)
            },
            suffix: self.suffix.clone(),
            check_complete: self.check_complete,
        })
    }
}

// `syn::Path` is not `Send`, so clap only checks the text and `Cli::options` parses it again.
fn check_path(value: &str) -> Result<String, String> {
    syn::parse_str::<Path>(value)
        .map(|_| value.to_owned())
        .map_err(|err| format!("`{value}` is not a path: {err}"))
}

fn install_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut index = SourceIndex::new();
    for file in &cli.files {
        index.add_file(file)?;
    }
    info!(files = cli.files.len(), types = index.len(), "loaded declarations");
    debug!(names = ?index.names().collect::<Vec<_>>(), "indexed types");

    let names = tlsparse_gen::unique_names(&cli.types);
    let code = tlsparse_gen::generate(&index, &names, &cli.options()?)?;
    let output = format!("{HEADER}{code}");
    match &cli.output {
        Some(path) => {
            std::fs::write(path, output)
                .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
            info!(path = %path.display(), decoders = names.len(), "wrote decoders");
        }
        None => std::io::stdout().lock().write_all(output.as_bytes())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        install_tracing();
    }
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.quiet {
                eprintln!("error: {err}");
            } else {
                error!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}
