//! Command-line host for the Arcforge requirement calculator.
//!
//! Loads `arcforge.toml` (if present) and the items directory, then answers
//! one request and prints the JSON response to stdout. Logs go to stderr;
//! set `RUST_LOG` to adjust verbosity.

mod cli;

use anyhow::{Context, Result, bail};
use arcforge_api::{CalculateRequest, Calculator, ExpandRequest, InfoRequest, Operation};
use arcforge_data::Config;
use clap::Parser;
use std::collections::BTreeMap;
use std::io::Read;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let report = arcforge_data::load_items(&config.data.items_dir).with_context(|| {
        format!("loading items from {}", config.data.items_dir.display())
    })?;
    for skipped in &report.skipped {
        tracing::debug!(file = %skipped.path.display(), "Skipped during load");
    }
    let calculator = Calculator::new(report.catalog, config.display);

    let output = match cli.command {
        Commands::List => serde_json::to_value(calculator.list_items())?,
        Commands::Calculate { items } => {
            let request = CalculateRequest {
                items: parse_selection(&items)?,
            };
            serde_json::to_value(calculator.calculate(&request)?)?
        }
        Commands::Expand { item_id, quantity } => {
            let request = ExpandRequest::new(&item_id, quantity);
            serde_json::to_value(calculator.expand(&request)?)?
        }
        Commands::Info { item_id } => {
            let request = InfoRequest {
                item_id: Some(item_id),
            };
            serde_json::to_value(calculator.item_info(&request)?)?
        }
        Commands::Json { op, body } => {
            let op: Operation = op.parse()?;
            let body = match body {
                Some(body) => body,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading request body from stdin")?;
                    buf
                }
            };
            let response = arcforge_api::handle_json(&calculator, op, &body)?;
            serde_json::from_str(&response)?
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

/// Config file values with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("reading config {}", cli.config.display()))?;

    if let Some(dir) = &cli.items_dir {
        config.data.items_dir = dir.clone();
    }
    if let Some(dir) = &cli.image_dir {
        config.display.image_dir = dir.clone();
    }
    if let Some(language) = &cli.language {
        config.display.language = language.clone();
    }
    Ok(config)
}

/// Parse `ID=QTY` arguments. A bare `ID` means one unit; repeats are summed.
fn parse_selection(args: &[String]) -> Result<BTreeMap<String, i64>> {
    let mut items = BTreeMap::new();
    for arg in args {
        let (id, qty) = match arg.split_once('=') {
            Some((id, qty)) => {
                let qty: i64 = qty
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid quantity in '{arg}'"))?;
                (id.trim(), qty)
            }
            None => (arg.trim(), 1),
        };
        if id.is_empty() {
            bail!("missing item id in '{arg}'");
        }
        if qty <= 0 {
            bail!("quantity for '{id}' must be positive, got {qty}");
        }
        let total: &mut i64 = items.entry(id.to_string()).or_insert(0);
        *total = total.saturating_add(qty);
    }
    Ok(items)
}
