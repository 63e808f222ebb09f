use super::{form_text, optional_form_text};
use crate::model::ValidationError;
use crate::validation::grid::validate_grid_bot;
use serde::{Deserialize, Serialize};

/// Grid bot form submission. Numeric fields hold the text the user typed.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GridBotConfig {
    #[serde(deserialize_with = "form_text")]
    pub pair: String,
    #[serde(deserialize_with = "form_text")]
    pub strategy: String,
    #[serde(deserialize_with = "form_text")]
    pub lower_limit: String,
    #[serde(deserialize_with = "form_text")]
    pub upper_limit: String,
    #[serde(deserialize_with = "form_text")]
    pub investment: String,
    /// Percentage step between ladder levels.
    #[serde(deserialize_with = "form_text")]
    pub small_grid: String,
    /// Requested number of grid levels.
    #[serde(deserialize_with = "form_text")]
    pub big_grid: String,
    /// Optional; treated as 0.0 when absent or blank.
    #[serde(
        deserialize_with = "optional_form_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dip_percentage: Option<String>,
}

/// Grid form fields, in the order errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridField {
    Pair,
    Strategy,
    LowerLimit,
    UpperLimit,
    Investment,
    SmallGrid,
    BigGrid,
    DipPercentage,
}

impl GridField {
    /// Fields that may not be left blank. `DipPercentage` is optional.
    pub const REQUIRED: [GridField; 7] = [
        GridField::Pair,
        GridField::Strategy,
        GridField::LowerLimit,
        GridField::UpperLimit,
        GridField::Investment,
        GridField::SmallGrid,
        GridField::BigGrid,
    ];

    pub const ALL: [GridField; 8] = [
        GridField::Pair,
        GridField::Strategy,
        GridField::LowerLimit,
        GridField::UpperLimit,
        GridField::Investment,
        GridField::SmallGrid,
        GridField::BigGrid,
        GridField::DipPercentage,
    ];

    /// Key used in config files and in reported errors.
    pub fn name(&self) -> &'static str {
        match self {
            GridField::Pair => "pair",
            GridField::Strategy => "strategy",
            GridField::LowerLimit => "lowerLimit",
            GridField::UpperLimit => "upperLimit",
            GridField::Investment => "investment",
            GridField::SmallGrid => "smallGrid",
            GridField::BigGrid => "bigGrid",
            GridField::DipPercentage => "dipPercentage",
        }
    }

    /// Human readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            GridField::Pair => "Pair",
            GridField::Strategy => "Strategy",
            GridField::LowerLimit => "Lower Limit",
            GridField::UpperLimit => "Upper Limit",
            GridField::Investment => "Investment",
            GridField::SmallGrid => "Small Grid",
            GridField::BigGrid => "Big Grid",
            GridField::DipPercentage => "Dip Percentage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        GridField::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl GridBotConfig {
    /// Every problem with this submission; empty means accepted.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_grid_bot(self)
    }

    /// Raw text of `field`, `None` only for an absent dip percentage.
    pub fn value(&self, field: GridField) -> Option<&str> {
        match field {
            GridField::Pair => Some(&self.pair),
            GridField::Strategy => Some(&self.strategy),
            GridField::LowerLimit => Some(&self.lower_limit),
            GridField::UpperLimit => Some(&self.upper_limit),
            GridField::Investment => Some(&self.investment),
            GridField::SmallGrid => Some(&self.small_grid),
            GridField::BigGrid => Some(&self.big_grid),
            GridField::DipPercentage => self.dip_percentage.as_deref(),
        }
    }

    pub fn set(&mut self, field: GridField, value: impl Into<String>) {
        let value = value.into();
        match field {
            GridField::Pair => self.pair = value,
            GridField::Strategy => self.strategy = value,
            GridField::LowerLimit => self.lower_limit = value,
            GridField::UpperLimit => self.upper_limit = value,
            GridField::Investment => self.investment = value,
            GridField::SmallGrid => self.small_grid = value,
            GridField::BigGrid => self.big_grid = value,
            GridField::DipPercentage => self.dip_percentage = Some(value),
        }
    }

    /// Builds a config from `(field name, text)` pairs, e.g. a submitted form
    /// or a CSV row. Unknown keys are ignored and missing keys stay blank.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = GridBotConfig::default();
        for (key, value) in fields {
            if let Some(field) = GridField::from_name(key.as_ref().trim()) {
                config.set(field, value);
            }
        }
        config
    }
}
