use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use intake_analytics::{candidate, customer, form};
use intake_core::config::Config;
use intake_core::normalize::{self, RawRow};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Candidate,
    Customer,
    Form,
}

#[derive(Parser)]
#[command(name = "intake", about = "Call-intake analytics — normalize raw rows, emit report JSON")]
struct Cli {
    /// Which record kind the input rows hold.
    #[arg(long, value_enum)]
    kind: Kind,

    /// Input file: a JSON array of row objects, or one JSON object per line.
    input: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log debug output to stderr (rejected rows are warned regardless).
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load()?;
    let rows = read_rows(&cli.input)?;
    tracing::debug!(rows = rows.len(), "parsed input rows");

    let report = match cli.kind {
        Kind::Candidate => {
            let records = normalize::normalize_candidates(&rows);
            serde_json::to_value(candidate::report(&records, &config.report))?
        }
        Kind::Customer => {
            let records = normalize::normalize_customers(&rows);
            serde_json::to_value(customer::report(&records, &config.report))?
        }
        Kind::Form => {
            let records = normalize::normalize_forms(&rows);
            serde_json::to_value(form::report(&records))?
        }
    };

    let rendered = serde_json::to_string_pretty(&report)?;
    match &cli.out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Read rows from a JSON array file or a JSON-lines file.
fn read_rows(path: &PathBuf) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading input from {}", path.display()))?;

    // Whole-file JSON array first, then JSON-lines.
    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(&text) {
        return items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::Object(row) => Ok(row),
                other => bail!("expected a JSON object row, got: {other}"),
            })
            .collect();
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str::<RawRow>(line)
                .with_context(|| format!("parsing JSON-lines row: {line}"))
        })
        .collect()
}
