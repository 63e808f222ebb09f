//! Validation and price-ladder generation for trading bot configurations.
//!
//! The entry point for grid bots is [`GridBotConfig::validate`], which returns
//! every problem found as a [`ValidationError`] instead of failing fast.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod model;
pub mod strategy;
pub mod ui;
pub mod validation;

pub use config::dip::DipBotConfig;
pub use config::grid::{GridBotConfig, GridField};
pub use config::momentum::MomentumBotConfig;
pub use config::strategy::BotConfig;
pub use error::{BotError, LadderError, NumberParseError};
pub use model::ValidationError;
pub use strategy::ladder::{generate_price_ladder, PriceLadder};
pub use strategy::types::{GridStrategy, StepPercent};
pub use validation::grid::{validate_grid_bot, ParsedGridConfig};
