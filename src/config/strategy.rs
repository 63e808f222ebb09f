use serde::{Deserialize, Serialize};

pub use super::dip::DipBotConfig;
pub use super::grid::GridBotConfig;
pub use super::momentum::MomentumBotConfig;
pub use crate::strategy::types::GridStrategy;
use crate::model::ValidationError;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum BotConfig {
    #[serde(rename = "grid")]
    Grid(GridBotConfig),
    #[serde(rename = "dip")]
    Dip(DipBotConfig),
    #[serde(rename = "momentum")]
    Momentum(MomentumBotConfig),
}

impl BotConfig {
    pub fn type_name(&self) -> &str {
        match self {
            BotConfig::Grid(_) => "Grid Bot",
            BotConfig::Dip(_) => "Dip Bot",
            BotConfig::Momentum(_) => "Momentum Bot",
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            BotConfig::Grid(c) => &c.pair,
            BotConfig::Dip(c) => &c.symbol,
            BotConfig::Momentum(c) => &c.base_symbol,
        }
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        match self {
            BotConfig::Grid(c) => c.validate(),
            BotConfig::Dip(c) => c.validate(),
            BotConfig::Momentum(c) => c.validate(),
        }
    }
}

pub fn print_strategy_help() {
    println!("Available Bot Configurations:\n");

    println!("1. Grid Bot (type = 'grid')");
    println!("   Description: Places orders on a geometric price ladder inside a range.");
    println!("   Parameters (all entered as text):");
    println!("     - pair (String): Trading pair (e.g., 'BTCUSDT').");
    println!(
        "     - strategy (String): One of {}.",
        GridStrategy::ALL
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("     - lowerLimit (number): Bottom of the price range.");
    println!("     - upperLimit (number): Top of the price range.");
    println!("     - investment (number): Capital spread across the ladder.");
    println!("     - smallGrid (number): Percent step between levels (>= 0.2).");
    println!("     - bigGrid (integer): Requested number of grid levels.");
    println!("     - dipPercentage (number): Extra dip threshold (optional, default 0).");
    println!();

    println!("2. Dip Bot (type = 'dip')");
    println!("   Description: Buys or sells after a price dip within a time frame.");
    println!("   Parameters:");
    println!("     - symbol (String): Trading symbol (e.g., 'ETHUSDT').");
    println!("     - quantity (number): Order quantity, must be positive.");
    println!("     - orderType (String): 'buy' or 'sell'.");
    println!("     - exchange (String): 'bybit', 'binance' or 'bingx'.");
    println!("     - dipPercentage (number): Dip that triggers the order.");
    println!("     - timeFrame (String): Candle interval in minutes.");
    println!();

    println!("3. Momentum Bot (type = 'momentum')");
    println!("   Description: Ranks symbols by momentum against a base symbol.");
    println!("   Parameters:");
    println!("     - baseSymbol (String): Reference symbol.");
    println!("     - symbols (list of String): Symbols to rank, at least one.");
    println!("     - interval (String): Candle interval.");
    println!("     - numberOfDays (integer): Lookback window, must be positive.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_grid_config() {
        let toml_str = r#"
            type = "grid"
            pair = "BTCUSDT"
            strategy = "ISIB"
            lowerLimit = "100"
            upperLimit = "110"
            investment = "500"
            smallGrid = "1"
            bigGrid = "10"
        "#;
        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.type_name(), "Grid Bot");
        assert_eq!(config.symbol(), "BTCUSDT");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_parse_tagged_momentum_config() {
        let toml_str = r#"
            type = "momentum"
            baseSymbol = "BTCUSDT"
            symbols = ["ETHUSDT", "SOLUSDC"]
            interval = "1h"
            numberOfDays = 30
        "#;
        let config: BotConfig = toml::from_str(toml_str).unwrap();
        match &config {
            BotConfig::Momentum(c) => {
                assert_eq!(c.symbols.len(), 2);
                assert_eq!(c.number_of_days, "30");
            }
            other => panic!("unexpected config: {:?}", other),
        }
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_dispatches_to_dip_validation() {
        let config = BotConfig::Dip(DipBotConfig {
            symbol: "BTCUSDT".to_string(),
            quantity: "-1".to_string(),
            order_type: "buy".to_string(),
            exchange: "bybit".to_string(),
            dip_percentage: "5".to_string(),
            time_frame: "15".to_string(),
        });
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "quantity");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let res: Result<BotConfig, _> = toml::from_str(r#"type = "arbitrage""#);
        assert!(res.is_err());
    }
}
