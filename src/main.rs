use anyhow::{Context, Result};
use chartfold::dataset::Dataset;
use chartfold::{parser, resolve};
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "chartfold")]
#[command(about = "Aggregate database records into chart series using a pipe DSL", long_about = None)]
struct Args {
    /// Chart config string (e.g. 'axes(x: Status, y: count) | sort(x: asc)')
    config: String,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read the dataset snapshot (schema + records) from stdin
    let dataset = Dataset::from_reader(io::stdin().lock())
        .context("Failed to read dataset JSON from stdin")?;

    // Parse the chart config string
    let config = match parser::parse_chart_config(&args.config) {
        Ok((remaining, config)) => {
            if !remaining.trim().is_empty() {
                eprintln!("Warning: unparsed input: '{}'", remaining);
            }
            config
        }
        Err(e) => {
            eprintln!("Parse error: {:?}", e);
            std::process::exit(1);
        }
    };

    // Aggregate
    let series = resolve::chart_series(&dataset.schema, &dataset.records, &config)
        .context("Failed to build chart series")?;

    // Write the series JSON to stdout
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut handle, &series)
            .context("Failed to write series JSON to stdout")?;
    } else {
        serde_json::to_writer(&mut handle, &series)
            .context("Failed to write series JSON to stdout")?;
    }
    handle
        .write_all(b"\n")
        .context("Failed to write series JSON to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
