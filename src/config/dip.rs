use super::form_text;
use crate::model::ValidationError;
use crate::validation::dip::{validate_dip_bot, validate_dip_bot_against};
use serde::{Deserialize, Serialize};

/// Dip bot form submission.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DipBotConfig {
    #[serde(deserialize_with = "form_text")]
    pub symbol: String,
    #[serde(deserialize_with = "form_text")]
    pub quantity: String,
    /// "buy" or "sell" on the form; not checked for membership.
    #[serde(deserialize_with = "form_text")]
    pub order_type: String,
    #[serde(deserialize_with = "form_text")]
    pub exchange: String,
    #[serde(deserialize_with = "form_text")]
    pub dip_percentage: String,
    /// Candle interval in minutes.
    #[serde(deserialize_with = "form_text")]
    pub time_frame: String,
}

impl DipBotConfig {
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_dip_bot(self)
    }

    /// Validates and additionally rejects an order that duplicates one of
    /// `existing`.
    pub fn validate_against(&self, existing: &[DipBotConfig]) -> Vec<ValidationError> {
        validate_dip_bot_against(self, existing)
    }

    /// `(field name, label, value)` in reporting order.
    pub fn fields(&self) -> [(&'static str, &'static str, &str); 6] {
        [
            ("symbol", "Symbol", self.symbol.as_str()),
            ("quantity", "Quantity", self.quantity.as_str()),
            ("orderType", "Order type", self.order_type.as_str()),
            ("exchange", "Exchange", self.exchange.as_str()),
            ("dipPercentage", "Dip percentage", self.dip_percentage.as_str()),
            ("timeFrame", "Time frame", self.time_frame.as_str()),
        ]
    }

    /// Two dip orders are the same order when they watch the same symbol for
    /// the same side, dip and time frame.
    pub fn same_order_as(&self, other: &DipBotConfig) -> bool {
        self.symbol == other.symbol
            && self.order_type == other.order_type
            && self.dip_percentage == other.dip_percentage
            && self.time_frame == other.time_frame
    }
}
