//! Console renderer for validation reports.

use crate::config::grid::GridBotConfig;
use crate::config::strategy::BotConfig;
use crate::model::ValidationError;
use crate::strategy::ladder::PriceLadder;
use std::io::{self, Write};

/// Console renderer for validation reports and ladder previews.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Render a complete validation report to stdout.
    pub fn render(config: &BotConfig, errors: &[ValidationError], ladder: Option<&PriceLadder>) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = Self::write_report(&mut out, config, errors, ladder) {
            tracing::error!("Failed to write report: {}", e);
        }
    }

    pub fn write_report<W: Write>(
        out: &mut W,
        config: &BotConfig,
        errors: &[ValidationError],
        ladder: Option<&PriceLadder>,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out, " {} VALIDATION REPORT", config.type_name().to_uppercase())?;
        writeln!(out, "{}", "=".repeat(60))?;

        // Section 1: Configuration
        writeln!(out)?;
        Self::write_config(out, config)?;

        // Section 2: Ladder preview
        if let Some(l) = ladder {
            writeln!(out)?;
            writeln!(out, "{}", "-".repeat(60))?;
            Self::write_ladder(out, l)?;
        }

        // Section 3: Result
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(60))?;
        Self::write_errors(out, errors)?;

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(60))?;
        Ok(())
    }

    /// One line per batch row: `#<row> <pair> OK` or the row's errors.
    pub fn write_batch_row<W: Write>(
        out: &mut W,
        row: usize,
        config: &GridBotConfig,
        errors: &[ValidationError],
    ) -> io::Result<()> {
        let pair = if config.pair.trim().is_empty() {
            "<no pair>"
        } else {
            config.pair.as_str()
        };
        if errors.is_empty() {
            writeln!(out, "#{:<4} {:<12} OK", row, pair)
        } else {
            writeln!(out, "#{:<4} {:<12} REJECTED ({} issues)", row, pair, errors.len())?;
            for e in errors {
                writeln!(out, "        - [{}] {}", e.field, e.message)?;
            }
            Ok(())
        }
    }

    fn write_config<W: Write>(out: &mut W, config: &BotConfig) -> io::Result<()> {
        writeln!(out, "CONFIGURATION")?;

        match config {
            BotConfig::Grid(c) => {
                writeln!(out, "Pair:        {}", c.pair)?;
                writeln!(out, "Strategy:    {}", c.strategy)?;
                writeln!(out, "Range:       {} - {}", c.lower_limit, c.upper_limit)?;
                writeln!(out, "Investment:  {}", c.investment)?;
                writeln!(out, "Small Grid:  {}%", c.small_grid)?;
                writeln!(out, "Big Grid:    {}", c.big_grid)?;
                if let Some(dip) = c.dip_percentage.as_deref() {
                    writeln!(out, "Dip:         {}%", dip)?;
                }
            }
            BotConfig::Dip(c) => {
                writeln!(out, "Symbol:      {}", c.symbol)?;
                writeln!(out, "Exchange:    {}", c.exchange)?;
                writeln!(out, "Order:       {} {}", c.order_type, c.quantity)?;
                writeln!(out, "Dip:         {}%", c.dip_percentage)?;
                writeln!(out, "Time Frame:  {}", c.time_frame)?;
            }
            BotConfig::Momentum(c) => {
                writeln!(out, "Base:        {}", c.base_symbol)?;
                writeln!(out, "Symbols:     {}", c.symbols.join(", "))?;
                writeln!(out, "Interval:    {}", c.interval)?;
                writeln!(out, "Days:        {}", c.number_of_days)?;
            }
        }
        Ok(())
    }

    /// Render ladder levels, the first and last 50 when the ladder is long.
    pub fn write_ladder<W: Write>(out: &mut W, ladder: &PriceLadder) -> io::Result<()> {
        writeln!(
            out,
            "PRICE LADDER ({} Levels, {} Intervals)",
            ladder.len(),
            ladder.intervals()
        )?;
        if let (Some(first), Some(last)) = (ladder.first(), ladder.last()) {
            writeln!(out, "Ladder Range: {} - {}", first, last)?;
        }
        writeln!(out, "{:<6} | {:<18} | STEP %", "IDX", "PRICE")?;
        writeln!(out, "{}", "-".repeat(40))?;

        let levels = ladder.levels();
        let shown: Vec<(usize, &f64)> = if levels.len() > 100 {
            levels
                .iter()
                .enumerate()
                .take(50)
                .chain(levels.iter().enumerate().skip(levels.len() - 50))
                .collect()
        } else {
            levels.iter().enumerate().collect()
        };

        for (idx, price) in shown {
            let step_pct = if idx > 0 && levels[idx - 1] > 0.0 {
                format!("{:.4}", (price - levels[idx - 1]) / levels[idx - 1] * 100.0)
            } else {
                "-".to_string()
            };
            writeln!(out, "{:<6} | {:<18.6} | {}", idx, price, step_pct)?;
            if levels.len() > 100 && idx == 49 {
                writeln!(out, "... (Hiding {} levels) ...", levels.len() - 100)?;
            }
        }
        Ok(())
    }

    fn write_errors<W: Write>(out: &mut W, errors: &[ValidationError]) -> io::Result<()> {
        if errors.is_empty() {
            writeln!(out, "RESULT: ACCEPTED")?;
            return Ok(());
        }

        writeln!(out, "RESULT: REJECTED ({} issues)", errors.len())?;
        for e in errors {
            writeln!(out, "  [{}] {}", e.field, e.message)?;
        }
        Ok(())
    }
}
