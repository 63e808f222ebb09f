//! Grid bot configuration checks.
//!
//! Runs in four stages. Missing fields and unparseable numbers each stop the
//! run with only their own errors; the shape checks and the ladder checks
//! always both run once every number parsed, even on values a shape check
//! already rejected.

use super::{is_blank, parse_number};
use crate::config::grid::{GridBotConfig, GridField};
use crate::constants::{DEFAULT_DIP_PERCENTAGE, MIN_INVESTMENT_PER_GRID, MIN_SMALL_GRID_PERCENT};
use crate::model::ValidationError;
use crate::strategy::ladder::PriceLadder;
use serde::Serialize;
use tracing::{debug, warn};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input values provided";

/// Numeric view of a grid submission whose fields all parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedGridConfig {
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub investment: f64,
    pub small_grid: f64,
    pub big_grid: f64,
    pub dip_percentage: f64,
}

/// Validates a grid submission and returns every problem found, in stage
/// order. An empty list means the configuration is accepted.
pub fn validate_grid_bot(config: &GridBotConfig) -> Vec<ValidationError> {
    let mut errors = check_required_fields(config);
    if !errors.is_empty() {
        debug!(missing = errors.len(), "Grid config has blank required fields");
        return errors;
    }

    let parsed = match parse_grid_numbers(config) {
        Ok(parsed) => parsed,
        Err(parse_errors) => {
            debug!(malformed = parse_errors.len(), "Grid config has malformed numbers");
            return parse_errors;
        }
    };

    check_grid_shape(&parsed, &mut errors);
    check_against_ladder(&parsed, &mut errors);

    debug!(
        pair = %config.pair,
        errors = errors.len(),
        "Grid config validated"
    );
    errors
}

/// One `"<Label> cannot be blank"` error per empty required field.
///
/// Only the empty string counts here. Whitespace-only numbers are left to the
/// parse stage, which reports them as invalid numbers.
pub fn check_required_fields(config: &GridBotConfig) -> Vec<ValidationError> {
    GridField::REQUIRED
        .iter()
        .filter(|field| config.value(**field).map_or(true, str::is_empty))
        .map(|field| {
            ValidationError::new(field.name(), format!("{} cannot be blank", field.label()))
        })
        .collect()
}

/// Converts the numeric fields. A blank or absent dip percentage becomes
/// [`DEFAULT_DIP_PERCENTAGE`].
pub fn parse_grid_numbers(config: &GridBotConfig) -> Result<ParsedGridConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut number = |field: GridField, raw: &str| match parse_number(raw) {
        Ok(value) => value,
        Err(_) => {
            errors.push(ValidationError::new(
                field.name(),
                format!("{} must be a valid number", field.label()),
            ));
            f64::NAN
        }
    };

    let lower_limit = number(GridField::LowerLimit, config.lower_limit.as_str());
    let upper_limit = number(GridField::UpperLimit, config.upper_limit.as_str());
    let investment = number(GridField::Investment, config.investment.as_str());
    let small_grid = number(GridField::SmallGrid, config.small_grid.as_str());
    let big_grid = number(GridField::BigGrid, config.big_grid.as_str());
    let dip_percentage = match config.dip_percentage.as_deref() {
        Some(raw) if !is_blank(raw) => number(GridField::DipPercentage, raw),
        _ => DEFAULT_DIP_PERCENTAGE,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ParsedGridConfig {
        lower_limit,
        upper_limit,
        investment,
        small_grid,
        big_grid,
        dip_percentage,
    })
}

/// Step size, grid count and range checks. None of these short-circuit.
fn check_grid_shape(p: &ParsedGridConfig, errors: &mut Vec<ValidationError>) {
    if p.small_grid < MIN_SMALL_GRID_PERCENT {
        errors.push(ValidationError::new(
            GridField::SmallGrid.name(),
            format!(
                "Small Grid must be at least {}% to ensure profitability.",
                MIN_SMALL_GRID_PERCENT
            ),
        ));
    }

    if p.big_grid.fract() != 0.0 || p.big_grid <= 0.0 {
        errors.push(ValidationError::new(
            GridField::BigGrid.name(),
            "Big Grid must be a positive integer",
        ));
    }

    // Compared as raw numbers: a percent against a level count.
    if p.small_grid > p.big_grid {
        let message = "Small Grid cannot be greater than Big Grid";
        errors.push(ValidationError::new(GridField::SmallGrid.name(), message));
        errors.push(ValidationError::new(GridField::BigGrid.name(), message));
    }

    if p.lower_limit >= p.upper_limit {
        let message = "Lower Limit must be less than Upper Limit";
        errors.push(ValidationError::new(GridField::LowerLimit.name(), message));
        errors.push(ValidationError::new(GridField::UpperLimit.name(), message));
    }
}

/// Grid count and per-interval investment against the generated ladder.
fn check_against_ladder(p: &ParsedGridConfig, errors: &mut Vec<ValidationError>) {
    let ladder = match PriceLadder::try_generate(p.lower_limit, p.upper_limit, p.small_grid) {
        Ok(ladder) => ladder,
        Err(e) => {
            warn!(error = %e, "Cannot build price ladder from grid config");
            errors.push(ValidationError::general(INVALID_INPUT_MESSAGE));
            return;
        }
    };

    let max_levels = ladder.len();
    if p.big_grid > max_levels as f64 {
        errors.push(ValidationError::new(
            GridField::BigGrid.name(),
            format!(
                "Big Grid must be less than or equal to {}. Maximum allowed is {}.",
                max_levels, max_levels
            ),
        ));
    }

    let intervals = ladder.intervals();
    if intervals > 0 {
        let per_grid = p.investment / intervals as f64;
        if per_grid < MIN_INVESTMENT_PER_GRID {
            errors.push(ValidationError::new(
                GridField::Investment.name(),
                format!(
                    "Investment per small grid must be at least ${}. Current value: ${:.2}",
                    MIN_INVESTMENT_PER_GRID, per_grid
                ),
            ));
        }
    }
}
