//! Alternating subsidy reduction rule

use crate::errors::ScheduleError;
use crate::types::{Amount, EraIndex};
use serde::{Deserialize, Serialize};

/// One reduction step between consecutive eras.
///
/// The schedule alternates between the two ratios, so every pair of eras
/// roughly halves the subsidy (2/3 * 3/4 = 1/2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reduction {
    /// Multiply by 2/3, truncating
    TwoThirds,
    /// Multiply by 3/4, truncating
    ThreeQuarters,
}

impl Reduction {
    /// Reduction applied when deriving era `index` from its predecessor.
    ///
    /// Only meaningful for `index >= 1`; era 0 has no predecessor.
    pub fn for_era(index: EraIndex) -> Self {
        if index % 2 == 1 {
            Reduction::TwoThirds
        } else {
            Reduction::ThreeQuarters
        }
    }

    /// The ratio as an exact (numerator, denominator) pair.
    pub fn ratio(self) -> (Amount, Amount) {
        match self {
            Reduction::TwoThirds => (2, 3),
            Reduction::ThreeQuarters => (3, 4),
        }
    }

    /// Apply the ratio to a subsidy with exact integer arithmetic.
    ///
    /// Multiplies before dividing and truncates toward zero, so the result
    /// is bit-reproducible across platforms. The multiply is checked; the
    /// subsidy must stay representable when scaled by the numerator.
    pub fn apply(self, subsidy: Amount) -> Result<Amount, ScheduleError> {
        let (numer, denom) = self.ratio();
        let scaled = subsidy
            .checked_mul(numer)
            .ok_or(ScheduleError::CalculationOverflow(
                "subsidy scaled by reduction numerator",
            ))?;
        Ok(scaled / denom)
    }
}
