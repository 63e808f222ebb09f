use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    ConfigError(#[from] std::io::Error),
    #[error("Parsing error: {0}")]
    ParsingError(#[from] toml::de::Error),
    #[error("Batch file error: {0}")]
    BatchError(#[from] csv::Error),
}

/// Reasons a price ladder cannot be built from the given bounds and step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LadderError {
    #[error("Ladder bounds must be finite (lower {lower}, upper {upper})")]
    NonFiniteBounds { lower: f64, upper: f64 },
    #[error("Step percent {0} must be a positive, finite number")]
    InvalidStep(f64),
    #[error("Lower limit {0} must be positive for a geometric ladder")]
    NonPositiveBase(f64),
    #[error("Ladder would exceed {max} levels")]
    TooManyLevels { max: usize },
}

/// Why a form value could not be used as a number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberParseError {
    #[error("value is blank")]
    Blank,
    #[error("value is not a number")]
    Malformed,
    #[error("value is not a finite number")]
    NonFinite,
}
