pub mod ladder;
pub mod types;

pub use ladder::{generate_price_ladder, PriceLadder};
pub use types::{GridStrategy, StepPercent};
