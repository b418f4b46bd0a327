use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use jsx_to_json::{ConvertContext, ConvertError, Converter, TracingSink, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jsx2json", version, about = "Convert JSX markup to a JSON tree")]
struct Cli {
    /// JSX file to convert (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log unsupported constructs as warnings on stderr
    #[arg(short, long)]
    warnings: bool,

    /// Trace every converted node
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let source = read_source(cli.input.as_deref())?;
    let output = convert(&cli, &source)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("failed to serialize output")?;

    println!("{}", json);
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "trace"
    } else if cli.warnings {
        "warn"
    } else {
        "error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn convert(cli: &Cli, source: &str) -> Result<Vec<Value>> {
    let mut ctx = ConvertContext::new().with_trace(cli.verbose);
    if cli.warnings || cli.verbose {
        ctx = ctx.with_diagnostics(Arc::new(TracingSink));
    }

    let converter = Converter::with_context(ctx);
    converter.convert(source).map_err(|err| match err {
        ConvertError::SyntaxError { payload, .. } => {
            let at = payload
                .location
                .map(|loc| format!(" at line {}, column {}", loc.line, loc.column))
                .unwrap_or_default();
            anyhow::anyhow!("{}{}", payload.validation_error, at)
        }
        other => anyhow::Error::new(other),
    })
}
