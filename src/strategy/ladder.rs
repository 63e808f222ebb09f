//! Geometric price ladder construction.

use super::types::StepPercent;
use crate::constants::MAX_LADDER_LEVELS;
use crate::error::LadderError;
use serde::Serialize;
use tracing::{debug, trace};

/// Ordered price levels a grid strategy would place orders at.
///
/// Starts at the lower limit and, whenever the lower limit is below the upper
/// limit, ends exactly at the upper limit. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceLadder {
    levels: Vec<f64>,
}

impl PriceLadder {
    /// Builds the ladder after checking the inputs it needs to terminate in a
    /// sensible number of steps.
    ///
    /// * `lower_limit` - First level of the ladder.
    /// * `upper_limit` - Level the ladder is capped at.
    /// * `step_percent` - Geometric growth between levels, in percent.
    ///
    /// Descending or equal bounds are not an error: they produce the single
    /// level `[lower_limit]`.
    ///
    /// Ladders projected past [`MAX_LADDER_LEVELS`] are refused rather than
    /// built. Only steps below the 0.2% minimum can reach that size, so such a
    /// submission is reported with a `general` error in place of its grid count
    /// and investment errors.
    pub fn try_generate(
        lower_limit: f64,
        upper_limit: f64,
        step_percent: f64,
    ) -> Result<Self, LadderError> {
        if !lower_limit.is_finite() || !upper_limit.is_finite() {
            return Err(LadderError::NonFiniteBounds {
                lower: lower_limit,
                upper: upper_limit,
            });
        }
        if lower_limit >= upper_limit {
            return Ok(generate_price_ladder(lower_limit, upper_limit, step_percent));
        }
        if !step_percent.is_finite() || step_percent <= 0.0 {
            return Err(LadderError::InvalidStep(step_percent));
        }
        if lower_limit <= 0.0 {
            return Err(LadderError::NonPositiveBase(lower_limit));
        }

        let growth = StepPercent::new(step_percent).ratio().ln();
        let projected = (upper_limit / lower_limit).ln() / growth + 2.0;
        if growth <= 0.0 || !projected.is_finite() || projected > MAX_LADDER_LEVELS as f64 {
            return Err(LadderError::TooManyLevels {
                max: MAX_LADDER_LEVELS,
            });
        }

        Ok(generate_price_ladder(lower_limit, upper_limit, step_percent))
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Number of gaps between adjacent levels.
    pub fn intervals(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<f64> {
        self.levels.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.levels.last().copied()
    }
}

impl From<PriceLadder> for Vec<f64> {
    fn from(ladder: PriceLadder) -> Self {
        ladder.levels
    }
}

/// Calculates the ladder levels from `lower_limit` up to `upper_limit`.
///
/// Each level is the previous one grown by `step_percent`. When the next
/// level would reach or pass the upper limit, the upper limit itself closes
/// the ladder. Callers are expected to pass a positive step and positive lower
/// limit; if the step makes no upward progress the ladder is closed at the
/// upper limit immediately, so the loop always terminates.
pub fn generate_price_ladder(lower_limit: f64, upper_limit: f64, step_percent: f64) -> PriceLadder {
    let step = StepPercent::new(step_percent);
    let mut levels = vec![lower_limit];
    let mut current = lower_limit;

    while current < upper_limit {
        let next = step.advance(current);
        if next >= upper_limit || !(next > current) {
            levels.push(upper_limit);
            break;
        }
        trace!(level = next, "ladder level");
        levels.push(next);
        current = next;
    }

    debug!(
        lower_limit,
        upper_limit,
        step_percent,
        levels = levels.len(),
        "Generated price ladder"
    );
    PriceLadder { levels }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(lower: f64, upper: f64, step: f64) {
        let ladder = generate_price_ladder(lower, upper, step);
        let levels = ladder.levels();

        assert_eq!(levels[0], lower);
        assert_eq!(*levels.last().unwrap(), upper);
        for pair in levels.windows(2) {
            assert!(pair[1] > pair[0], "not increasing: {:?}", pair);
        }
        // Every interval but the closing one is a full geometric step.
        let ratio = 1.0 + step / 100.0;
        for pair in levels[..levels.len() - 1].windows(2) {
            assert!((pair[1] / pair[0] - ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ladder_one_percent_over_ten_percent_range() {
        let ladder = generate_price_ladder(100.0, 110.0, 1.0);
        assert_eq!(ladder.len(), 11);
        assert_eq!(ladder.intervals(), 10);

        let levels = ladder.levels();
        assert!((levels[1] - 101.0).abs() < 1e-9);
        assert!((levels[2] - 102.01).abs() < 1e-9);
        assert!((levels[9] - 109.368_527_268_436_09).abs() < 1e-6);
        assert_eq!(levels[10], 110.0);
    }

    #[test]
    fn test_ladder_shape_across_inputs() {
        assert_well_formed(100.0, 110.0, 1.0);
        assert_well_formed(0.45, 0.65, 0.2);
        assert_well_formed(25_000.0, 70_000.0, 2.5);
        assert_well_formed(1.0, 1.5, 50.0);
        assert_well_formed(10.0, 10.5, 7.0);
    }

    #[test]
    fn test_exact_landing_on_upper_limit() {
        // 100 -> 110 -> 121: the upper limit is hit exactly, not duplicated.
        let ladder = generate_price_ladder(100.0, 121.0, 10.0);
        assert_eq!(ladder.len(), 3);
        assert_eq!(ladder.last(), Some(121.0));
    }

    #[test]
    fn test_step_larger_than_range() {
        let ladder = generate_price_ladder(100.0, 101.0, 5.0);
        assert_eq!(ladder.levels(), &[100.0, 101.0]);
    }

    #[test]
    fn test_equal_and_descending_bounds_are_single_level() {
        assert_eq!(generate_price_ladder(100.0, 100.0, 1.0).levels(), &[100.0]);
        assert_eq!(generate_price_ladder(200.0, 100.0, 1.0).levels(), &[200.0]);
        assert_eq!(PriceLadder::try_generate(200.0, 100.0, 0.0).unwrap().len(), 1);
    }

    #[test]
    fn test_no_progress_step_terminates() {
        assert_eq!(generate_price_ladder(100.0, 110.0, 0.0).levels(), &[100.0, 110.0]);
        assert_eq!(generate_price_ladder(0.0, 10.0, 1.0).levels(), &[0.0, 10.0]);
        assert_eq!(generate_price_ladder(-10.0, -5.0, 1.0).levels(), &[-10.0, -5.0]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_price_ladder(0.45, 0.65, 0.3);
        let b = generate_price_ladder(0.45, 0.65, 0.3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_try_generate_rejects_unusable_inputs() {
        assert!(matches!(
            PriceLadder::try_generate(100.0, f64::INFINITY, 1.0),
            Err(LadderError::NonFiniteBounds { .. })
        ));
        assert_eq!(
            PriceLadder::try_generate(100.0, 110.0, 0.0),
            Err(LadderError::InvalidStep(0.0))
        );
        assert_eq!(
            PriceLadder::try_generate(100.0, 110.0, -1.0),
            Err(LadderError::InvalidStep(-1.0))
        );
        assert_eq!(
            PriceLadder::try_generate(0.0, 110.0, 1.0),
            Err(LadderError::NonPositiveBase(0.0))
        );
        assert_eq!(
            PriceLadder::try_generate(1.0, 1e12, 1e-9),
            Err(LadderError::TooManyLevels {
                max: MAX_LADDER_LEVELS
            })
        );
    }

    #[test]
    fn test_try_generate_matches_plain_generation() {
        let checked = PriceLadder::try_generate(100.0, 110.0, 1.0).unwrap();
        assert_eq!(checked, generate_price_ladder(100.0, 110.0, 1.0));
        let levels: Vec<f64> = checked.into();
        assert_eq!(levels.len(), 11);
    }
}
