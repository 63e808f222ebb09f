use super::{is_blank, parse_number};
use crate::config::dip::DipBotConfig;
use crate::model::ValidationError;
use tracing::debug;

pub const DUPLICATE_ORDER_MESSAGE: &str = "Duplicate Order: This configuration already exists";

/// Required-field and quantity checks. Unlike the grid checks nothing here
/// short-circuits: a bad quantity is reported alongside blank fields.
pub fn validate_dip_bot(config: &DipBotConfig) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = config
        .fields()
        .into_iter()
        .filter(|(_, _, value)| is_blank(value))
        .map(|(name, label, _)| ValidationError::new(name, format!("{} is required", label)))
        .collect();

    if !is_blank(&config.quantity) {
        let positive = matches!(parse_number(&config.quantity), Ok(q) if q > 0.0);
        if !positive {
            errors.push(ValidationError::new(
                "quantity",
                "Quantity must be a positive number",
            ));
        }
    }

    errors
}

/// True when `existing` already holds an order equal to `order`.
pub fn is_duplicate_order(order: &DipBotConfig, existing: &[DipBotConfig]) -> bool {
    existing.iter().any(|o| o.same_order_as(order))
}

/// [`validate_dip_bot`], plus a general error for an otherwise valid order
/// that duplicates one already placed.
pub fn validate_dip_bot_against(
    config: &DipBotConfig,
    existing: &[DipBotConfig],
) -> Vec<ValidationError> {
    let mut errors = validate_dip_bot(config);
    if errors.is_empty() && is_duplicate_order(config, existing) {
        debug!(symbol = %config.symbol, "Rejecting duplicate dip order");
        errors.push(ValidationError::general(DUPLICATE_ORDER_MESSAGE));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> DipBotConfig {
        DipBotConfig {
            symbol: "ETHUSDT".to_string(),
            quantity: "0.5".to_string(),
            order_type: "buy".to_string(),
            exchange: "binance".to_string(),
            dip_percentage: "5".to_string(),
            time_frame: "15".to_string(),
        }
    }

    #[test]
    fn test_valid_order() {
        assert!(validate_dip_bot(&order()).is_empty());
    }

    #[test]
    fn test_required_fields_in_order() {
        let errors = validate_dip_bot(&DipBotConfig::default());
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Symbol is required",
                "Quantity is required",
                "Order type is required",
                "Exchange is required",
                "Dip percentage is required",
                "Time frame is required"
            ]
        );
    }

    #[test]
    fn test_bad_quantity_reported_with_blank_fields() {
        let mut config = order();
        config.symbol.clear();
        config.quantity = "0".to_string();
        let errors = validate_dip_bot(&config);
        assert_eq!(
            errors,
            vec![
                ValidationError::new("symbol", "Symbol is required"),
                ValidationError::new("quantity", "Quantity must be a positive number"),
            ]
        );

        config.quantity = "lots".to_string();
        assert_eq!(validate_dip_bot(&config).len(), 2);
    }

    #[test]
    fn test_duplicate_detection() {
        let existing = vec![order()];
        let mut other = order();
        other.quantity = "2".to_string();
        other.exchange = "bybit".to_string();
        // Quantity and exchange are not part of an order's identity.
        assert!(is_duplicate_order(&other, &existing));

        other.time_frame = "60".to_string();
        assert!(!is_duplicate_order(&other, &existing));
    }

    #[test]
    fn test_duplicate_only_reported_for_valid_orders() {
        let existing = vec![order()];
        let errors = validate_dip_bot_against(&order(), &existing);
        assert_eq!(errors, vec![ValidationError::general(DUPLICATE_ORDER_MESSAGE)]);

        let mut invalid = order();
        invalid.quantity = "-1".to_string();
        let errors = validate_dip_bot_against(&invalid, &existing);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "quantity");

        assert!(validate_dip_bot_against(&order(), &[]).is_empty());
    }
}
