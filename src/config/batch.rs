//! Batch input: many grid form submissions in one CSV file.

use super::grid::GridBotConfig;
use crate::error::BotError;
use std::io::Read;
use std::path::Path;

/// Reads one `GridBotConfig` per CSV row. The header row names the fields
/// (`pair,strategy,lowerLimit,...`); columns may appear in any order and
/// unknown columns are ignored. An empty `dipPercentage` cell counts as absent.
pub fn load_grid_batch(path: impl AsRef<Path>) -> Result<Vec<GridBotConfig>, BotError> {
    let reader = csv::Reader::from_path(path.as_ref())?;
    let configs = read_rows(reader)?;
    log::info!(
        "Loaded {} grid submissions from '{}'",
        configs.len(),
        path.as_ref().display()
    );
    Ok(configs)
}

pub fn read_grid_batch<R: Read>(input: R) -> Result<Vec<GridBotConfig>, BotError> {
    read_rows(csv::Reader::from_reader(input))
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<GridBotConfig>, BotError> {
    let headers = reader.headers()?.clone();
    let mut configs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut config = GridBotConfig::from_fields(
            headers.iter().zip(record.iter()).map(|(k, v)| (k, v.to_string())),
        );
        if config
            .dip_percentage
            .as_deref()
            .is_some_and(|v| v.trim().is_empty())
        {
            config.dip_percentage = None;
        }
        configs.push(config);
    }
    Ok(configs)
}
