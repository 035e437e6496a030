use anyhow::{bail, Context, Result};
use chatlift_parser::{validate_input, ParseResult, ParserConfig, TranscriptParser};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

mod render;

#[derive(Parser)]
#[command(name = "chatlift")]
#[command(about = "Reconstruct a structured transcript from a pasted chat dump", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file with the pasted conversation (stdin when omitted)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Leave message text as pasted; skip code-block inference
    #[arg(long)]
    no_fences: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    /// Machine-readable parse result
    Json,
    /// Printable markdown document
    Markdown,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let raw = read_input(cli.input.as_deref())?;
    validate_input(&raw)?;

    let config = if cli.no_fences {
        ParserConfig::plain_text()
    } else {
        ParserConfig::default()
    };
    let result = TranscriptParser::new(config).parse(&raw);

    // The parser is total; an empty result is the caller's error to raise.
    if result.messages.is_empty() {
        bail!("no conversation detected in the input");
    }
    log::debug!("reconstructed {} message(s)", result.messages.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Json => write_json(&mut out, &result)?,
        Format::Markdown => render::write_markdown(&mut out, &result)?,
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_json(out: &mut impl Write, result: &ParseResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result).context("failed to serialize result")?;
    writeln!(out)?;
    Ok(())
}
