//! Core types for the tiered subsidy schedule

use crate::params::ScheduleParams;
use serde::{Deserialize, Serialize};

/// Monetary amount in base currency units
pub type Amount = u128;

/// Era index within a schedule (era 0 is the earliest, highest-subsidy era)
pub type EraIndex = u32;

/// One subsidy tier: a fixed-length range of blocks sharing one subsidy value.
///
/// `cumulative_threshold` is the total amount emitted across this era and all
/// prior eras; the era's subsidy applies while the observed emission total is
/// strictly below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    pub index: EraIndex,
    pub subsidy: Amount,
    pub cumulative_threshold: Amount,
}

/// The ordered sequence of eras produced for one set of parameters.
///
/// Immutable after construction. Era 0 first; subsidies are non-increasing
/// and cumulative thresholds are strictly increasing while subsidies stay
/// positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    params: ScheduleParams,
    eras: Vec<Era>,
}

impl Schedule {
    pub(crate) fn new(params: ScheduleParams, eras: Vec<Era>) -> Self {
        Self { params, eras }
    }

    /// Parameters the schedule was generated from
    pub fn params(&self) -> &ScheduleParams {
        &self.params
    }

    /// Eras in order, index 0 first
    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    /// Number of eras (`era_count + 1` for a generated schedule)
    pub fn len(&self) -> usize {
        self.eras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    /// Subsidy applicable once `emitted` base units have been issued.
    ///
    /// First-match-wins over the threshold chain: returns the subsidy of the
    /// earliest era whose cumulative threshold exceeds `emitted`, or `None`
    /// once the schedule is exhausted. This is the lookup the generated
    /// conditional chain encodes.
    pub fn subsidy_for_emitted(&self, emitted: Amount) -> Option<Amount> {
        self.eras
            .iter()
            .find(|era| emitted < era.cumulative_threshold)
            .map(|era| era.subsidy)
    }

    /// Total emission over all scheduled eras (the final cumulative threshold).
    pub fn total_emission(&self) -> Amount {
        self.eras
            .last()
            .map(|era| era.cumulative_threshold)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::generate_schedule;

    fn small_schedule() -> Schedule {
        // era 0: subsidy 100, threshold 1000
        // era 1: subsidy 66,  threshold 1660
        // era 2: subsidy 49,  threshold 2150
        let params = ScheduleParams {
            initial_subsidy: 100,
            era_length: 10,
            era_count: 2,
        };
        generate_schedule(&params).expect("valid params")
    }

    #[test]
    fn lookup_returns_first_matching_era() {
        let schedule = small_schedule();

        assert_eq!(schedule.subsidy_for_emitted(0), Some(100));
        assert_eq!(schedule.subsidy_for_emitted(999), Some(100));
        assert_eq!(schedule.subsidy_for_emitted(1000), Some(66));
        assert_eq!(schedule.subsidy_for_emitted(1659), Some(66));
        assert_eq!(schedule.subsidy_for_emitted(1660), Some(49));
        assert_eq!(schedule.subsidy_for_emitted(2149), Some(49));
    }

    #[test]
    fn lookup_exhausts_past_final_threshold() {
        let schedule = small_schedule();
        assert_eq!(schedule.subsidy_for_emitted(2150), None);
        assert_eq!(schedule.subsidy_for_emitted(Amount::MAX), None);
    }

    #[test]
    fn total_emission_is_final_threshold() {
        let schedule = small_schedule();
        assert_eq!(schedule.total_emission(), 2150);
        assert_eq!(
            schedule.total_emission(),
            schedule.eras().last().unwrap().cumulative_threshold
        );
    }

    #[test]
    fn schedule_serializes_round_trip() {
        let schedule = small_schedule();
        let json = serde_json::to_string(&schedule).expect("serialize");
        let decoded: Schedule = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, schedule);
    }
}
