use super::form_text;
use crate::model::ValidationError;
use crate::validation::momentum::validate_momentum_bot;
use serde::{Deserialize, Serialize};

/// Momentum bot form submission.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MomentumBotConfig {
    #[serde(deserialize_with = "form_text")]
    pub base_symbol: String,
    pub symbols: Vec<String>,
    #[serde(deserialize_with = "form_text")]
    pub interval: String,
    #[serde(deserialize_with = "form_text")]
    pub number_of_days: String,
}

impl MomentumBotConfig {
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_momentum_bot(self)
    }
}
