use anyhow::{Context, Result};
use clap::Parser;
use grid_bot_validator::config::batch::load_grid_batch;
use grid_bot_validator::config::load_config;
use grid_bot_validator::config::runtime::load_runtime_config;
use grid_bot_validator::config::strategy::BotConfig;
use grid_bot_validator::logging::init_logging;
use grid_bot_validator::strategy::ladder::PriceLadder;
use grid_bot_validator::ui::console::ConsoleRenderer;
use grid_bot_validator::validation::grid::parse_grid_numbers;
use log::{error, info, warn};
use serde_json::json;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid Bot Configuration Validator", long_about = None)]
struct Args {
    /// Bot configuration file (TOML) to validate
    #[arg(short, long)]
    config: Option<String>,

    /// CSV file of grid submissions, one per row
    #[arg(short, long)]
    batch: Option<String>,

    /// Print the price ladder of a grid configuration
    #[arg(long)]
    ladder: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    list_strategies: bool,

    #[arg(long)]
    create: bool,
}

fn main() -> Result<()> {
    // ---------------------------------------------------------
    // 1. Setup Logging (Tracing)
    // ---------------------------------------------------------
    let runtime = load_runtime_config();
    let _guard = match init_logging(&runtime) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            None
        }
    };

    let args = Args::parse();

    if args.list_strategies {
        grid_bot_validator::config::strategy::print_strategy_help();
        return Ok(());
    }

    if args.create {
        if let Err(e) = grid_bot_validator::config::creator::create_config() {
            error!("Error creating config: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let accepted = match (args.config.as_deref(), args.batch.as_deref()) {
        (Some(path), None) => run_single(path, args.ladder, args.json)?,
        (None, Some(path)) => run_batch(path, args.json)?,
        (Some(_), Some(_)) => anyhow::bail!("Use either --config or --batch, not both"),
        (None, None) => anyhow::bail!(
            "A config or batch file is required unless --list-strategies or --create is used"
        ),
    };

    if !accepted {
        std::process::exit(1);
    }
    Ok(())
}

/// Validate one config file. Returns whether it was accepted.
fn run_single(path: &str, show_ladder: bool, as_json: bool) -> Result<bool> {
    info!("Loading config from: {}", path);
    let config = load_config(path).with_context(|| format!("Failed to load '{}'", path))?;

    let errors = config.validate();
    info!(
        "Validated {} for {}: {} issue(s)",
        config.type_name(),
        config.symbol(),
        errors.len()
    );

    let ladder = if show_ladder { preview_ladder(&config) } else { None };

    if as_json {
        let report = json!({
            "type": config.type_name(),
            "accepted": errors.is_empty(),
            "errors": errors,
            "ladder": ladder,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ConsoleRenderer::render(&config, &errors, ladder.as_ref());
    }

    Ok(errors.is_empty())
}

/// Validate every row of a grid CSV. Returns whether all rows were accepted.
fn run_batch(path: &str, as_json: bool) -> Result<bool> {
    let configs = load_grid_batch(path).with_context(|| format!("Failed to load '{}'", path))?;

    let results: Vec<_> = configs
        .iter()
        .map(|c| (c, c.validate()))
        .collect();
    let rejected = results.iter().filter(|(_, e)| !e.is_empty()).count();
    info!(
        "Batch '{}': {} accepted, {} rejected",
        path,
        results.len() - rejected,
        rejected
    );

    if as_json {
        let rows: Vec<_> = results
            .iter()
            .enumerate()
            .map(|(i, (c, errors))| {
                json!({
                    "row": i + 1,
                    "pair": c.pair,
                    "accepted": errors.is_empty(),
                    "errors": errors,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for (i, (c, errors)) in results.iter().enumerate() {
            ConsoleRenderer::write_batch_row(&mut out, i + 1, c, errors)?;
        }
        writeln!(
            out,
            "{} of {} submissions accepted",
            results.len() - rejected,
            results.len()
        )?;
    }

    Ok(rejected == 0)
}

fn preview_ladder(config: &BotConfig) -> Option<PriceLadder> {
    let BotConfig::Grid(grid) = config else {
        warn!("--ladder only applies to grid configurations");
        return None;
    };

    let parsed = match parse_grid_numbers(grid) {
        Ok(p) => p,
        Err(_) => {
            warn!("Ladder preview skipped: numeric fields do not parse");
            return None;
        }
    };

    match PriceLadder::try_generate(parsed.lower_limit, parsed.upper_limit, parsed.small_grid) {
        Ok(ladder) => Some(ladder),
        Err(e) => {
            warn!("Ladder preview skipped: {}", e);
            None
        }
    }
}
