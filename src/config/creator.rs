use crate::config::grid::{GridBotConfig, GridField};
use crate::config::strategy::{BotConfig, GridStrategy};
use crate::validation::parse_number;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fs;

pub fn create_config() -> Result<()> {
    let theme = ColorfulTheme::default();

    let grid = create_grid(&theme)?;

    let errors = grid.validate();
    if !errors.is_empty() {
        println!("This configuration would be rejected:");
        for e in &errors {
            println!("  [{}] {}", e.field, e.message);
        }
        let save_anyway = Confirm::with_theme(&theme)
            .with_prompt("Save it anyway?")
            .default(false)
            .interact()?;
        if !save_anyway {
            println!("Nothing saved.");
            return Ok(());
        }
    }

    let config = BotConfig::Grid(grid);
    let default_filename = generate_default_filename(&config);

    let filename: String = Input::with_theme(&theme)
        .with_prompt("Configuration filename")
        .default(default_filename)
        .interact_text()?;

    let toml_string = toml::to_string_pretty(&config)?;

    let path = if filename.ends_with(".toml") {
        filename
    } else {
        format!("{}.toml", filename)
    };

    // Bare file names go to configs/ when that directory exists.
    let final_path = if !path.contains('/') && fs::metadata("configs").is_ok() {
        format!("configs/{}", path)
    } else {
        path
    };

    fs::write(&final_path, toml_string)?;
    println!("Configuration saved to {}", final_path);

    Ok(())
}

fn create_grid(theme: &ColorfulTheme) -> Result<GridBotConfig> {
    let pair: String = Input::with_theme(theme)
        .with_prompt("Pair (e.g., BTCUSDT)")
        .interact_text()?;

    let strategy_names: Vec<&str> = GridStrategy::ALL.iter().map(|s| s.as_str()).collect();
    let strategy_sel = Select::with_theme(theme)
        .with_prompt("Strategy")
        .default(0)
        .items(&strategy_names)
        .interact()?;
    let strategy = GridStrategy::ALL[strategy_sel];

    let mut config = GridBotConfig {
        pair,
        strategy: strategy.to_string(),
        ..GridBotConfig::default()
    };

    for (field, prompt) in [
        (GridField::LowerLimit, "Lower Limit"),
        (GridField::UpperLimit, "Upper Limit"),
        (GridField::Investment, "Investment"),
        (GridField::SmallGrid, "Small Grid (% step, min 0.2)"),
        (GridField::BigGrid, "Big Grid (number of levels)"),
    ] {
        let value = prompt_number(theme, prompt)?;
        config.set(field, value);
    }

    let has_dip = Confirm::with_theme(theme)
        .with_prompt("Set a Dip Percentage?")
        .default(false)
        .interact()?;

    if has_dip {
        let dip = prompt_number(theme, "Dip Percentage")?;
        config.set(GridField::DipPercentage, dip);
    }

    Ok(config)
}

fn prompt_number(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            parse_number(input)
                .map(|_| ())
                .map_err(|_| "Enter a valid number")
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn generate_default_filename(config: &BotConfig) -> String {
    match config {
        BotConfig::Grid(c) => format!(
            "{}_Grid_{}_{}_{}.toml",
            c.pair, c.strategy, c.lower_limit, c.upper_limit
        ),
        BotConfig::Dip(c) => format!("{}_Dip_{}_{}.toml", c.symbol, c.order_type, c.time_frame),
        BotConfig::Momentum(c) => format!("{}_Momentum_{}.toml", c.base_symbol, c.interval),
    }
}
