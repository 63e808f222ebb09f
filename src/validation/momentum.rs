use super::{is_blank, parse_integer};
use crate::config::momentum::MomentumBotConfig;
use crate::model::ValidationError;

/// Required-field and lookback checks for a momentum submission.
pub fn validate_momentum_bot(config: &MomentumBotConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&config.base_symbol) {
        errors.push(ValidationError::new("baseSymbol", "Base Symbol is required"));
    }
    if config.symbols.iter().all(|s| is_blank(s)) {
        errors.push(ValidationError::new(
            "symbols",
            "At least one symbol must be selected",
        ));
    }
    if is_blank(&config.interval) {
        errors.push(ValidationError::new("interval", "Interval is required"));
    }
    if is_blank(&config.number_of_days) {
        errors.push(ValidationError::new(
            "numberOfDays",
            "Number of Days is required",
        ));
    } else if !matches!(parse_integer(&config.number_of_days), Ok(days) if days > 0) {
        errors.push(ValidationError::new(
            "numberOfDays",
            "Number of Days must be a positive integer",
        ));
    }

    errors
}
