//! Central configuration constants for grid-bot-validator.
//!
//! This module contains the thresholds the validators enforce. Modify values
//! here to adjust acceptance rules without changing validation logic.

// =============================================================================
// GRID SHAPE CONSTANTS
// =============================================================================

/// Smallest accepted percentage step between ladder levels (0.2%)
pub const MIN_SMALL_GRID_PERCENT: f64 = 0.2;

/// Minimum capital per ladder interval, in quote currency
pub const MIN_INVESTMENT_PER_GRID: f64 = 10.0;

/// Dip percentage used when the field is left empty
pub const DEFAULT_DIP_PERCENTAGE: f64 = 0.0;

// =============================================================================
// LADDER LIMITS
// =============================================================================

/// Upper bound on the number of levels a ladder may be asked to materialize.
/// Requests projected above this are reported as invalid input.
pub const MAX_LADDER_LEVELS: usize = 1_000_000;

// =============================================================================
// RUNTIME DEFAULTS
// =============================================================================

/// Directory for rolling log files
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Rolling log file prefix
pub const LOG_FILE_NAME: &str = "validator.log";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";
