//! Schedule parameters and reference values

use crate::errors::ScheduleError;
use crate::types::{Amount, EraIndex};
use serde::{Deserialize, Serialize};

/// Reference subsidy paid per block during era 0, in base units
pub const DEFAULT_INITIAL_SUBSIDY: Amount = 2_000_000_000;

/// Reference era length in blocks
pub const DEFAULT_ERA_LENGTH: u64 = 394_000;

/// Reference number of reduction eras beyond era 0 (35 tiers total)
pub const DEFAULT_ERA_COUNT: EraIndex = 34;

/// Inputs to schedule generation.
///
/// Fixed constants in the reference tool; adjustable here so alternative
/// emission curves can be explored with the same generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleParams {
    /// Subsidy paid per block during era 0, in base units
    pub initial_subsidy: Amount,
    /// Length of every era in blocks
    pub era_length: u64,
    /// Number of reduction eras generated beyond era 0
    pub era_count: EraIndex,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            initial_subsidy: DEFAULT_INITIAL_SUBSIDY,
            era_length: DEFAULT_ERA_LENGTH,
            era_count: DEFAULT_ERA_COUNT,
        }
    }
}

impl ScheduleParams {
    /// Check the parameter constraints before any era is computed.
    ///
    /// Generation is all-or-nothing: an invalid parameter halts the run
    /// before any output exists.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.initial_subsidy == 0 {
            return Err(ScheduleError::InvalidParameter(
                "initial_subsidy must be greater than zero",
            ));
        }
        if self.era_length == 0 {
            return Err(ScheduleError::InvalidParameter(
                "era_length must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_reference_values() {
        let params = ScheduleParams::default();
        assert_eq!(params.initial_subsidy, 2_000_000_000);
        assert_eq!(params.era_length, 394_000);
        assert_eq!(params.era_count, 34);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_initial_subsidy_is_rejected() {
        let params = ScheduleParams {
            initial_subsidy: 0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ScheduleError::InvalidParameter(
                "initial_subsidy must be greater than zero"
            ))
        );
    }

    #[test]
    fn zero_era_length_is_rejected() {
        let params = ScheduleParams {
            era_length: 0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ScheduleError::InvalidParameter(
                "era_length must be greater than zero"
            ))
        );
    }

    #[test]
    fn zero_era_count_is_valid() {
        let params = ScheduleParams {
            era_count: 0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
