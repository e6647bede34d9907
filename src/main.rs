use clap::{Parser, ValueEnum};
use entrel::resolve_json;
use entrel::serializer::OutputFormat;
use std::fs;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

/// Resolve parent/child relationship definitions into per-entity relations.
#[derive(Parser)]
#[command(name = "entrel", version, about)]
struct Cli {
    /// Definition file (JSON array); reads stdin when omitted or `-`
    input: Option<String>,
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Pretty,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Pretty => OutputFormat::Pretty,
            Format::Text => OutputFormat::Text,
        }
    }
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let source = cli.input.as_deref().unwrap_or("<stdin>");
    let input = match read_input(cli.input.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", source, e);
            process::exit(1);
        }
    };

    let output = match resolve_json(&input, cli.format.into()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", source, e);
            process::exit(1);
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None if output.ends_with('\n') => print!("{}", output),
        None => println!("{}", output),
    }
}
