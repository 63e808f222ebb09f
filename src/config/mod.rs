use self::strategy::BotConfig;
use crate::error::BotError;
use serde::{Deserialize, Deserializer};
use std::fs;

pub mod batch;
pub mod creator;
pub mod dip;
pub mod grid;
pub mod momentum;
pub mod runtime;
pub mod strategy;

pub fn load_config(path: &str) -> Result<BotConfig, BotError> {
    let content = fs::read_to_string(path)?;
    let config: BotConfig = toml::from_str(&content)?;
    log::debug!("Parsed {} config from '{}'", config.type_name(), path);
    Ok(config)
}

/// A form value as it may appear in a config file. Numbers and booleans are
/// accepted and kept as the text a form would have submitted.
#[derive(Deserialize)]
#[serde(untagged)]
enum FormValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<FormValue> for String {
    fn from(value: FormValue) -> Self {
        match value {
            FormValue::Text(s) => s,
            FormValue::Integer(i) => i.to_string(),
            FormValue::Float(f) => f.to_string(),
            FormValue::Bool(b) => b.to_string(),
        }
    }
}

pub(crate) fn form_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    FormValue::deserialize(deserializer).map(String::from)
}

pub(crate) fn optional_form_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<FormValue>::deserialize(deserializer).map(|v| v.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
type = "grid"
pair = "ETHUSDT"
strategy = "straight"
lowerLimit = 100
upperLimit = 110
investment = 5
smallGrid = 1
bigGrid = 3
"#
        )
        .unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "investment");
    }

    #[test]
    fn test_load_config_missing_file() {
        let res = load_config("/nonexistent/grid.toml");
        assert!(matches!(res, Err(BotError::ConfigError(_))));
    }

    #[test]
    fn test_load_config_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "type = ").unwrap();
        let res = load_config(file.path().to_str().unwrap());
        assert!(matches!(res, Err(BotError::ParsingError(_))));
    }
}
