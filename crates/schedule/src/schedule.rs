//! Schedule generation

use crate::errors::ScheduleError;
use crate::params::ScheduleParams;
use crate::reduction::Reduction;
use crate::types::{Amount, Era, Schedule};
use tracing::debug;

/// Compute the tiered subsidy schedule for the given parameters.
///
/// Era 0 carries the initial subsidy; each later era derives its subsidy
/// from its predecessor via the parity-selected [`Reduction`], and its
/// cumulative threshold by adding the era's own emission
/// (`subsidy * era_length`) to the running total.
///
/// The result always holds exactly `era_count + 1` eras. Once a subsidy
/// truncates to zero the remaining eras are still generated with zero
/// subsidy; bounding `era_count` to the economically relevant range is the
/// caller's responsibility.
pub fn generate_schedule(params: &ScheduleParams) -> Result<Schedule, ScheduleError> {
    params.validate()?;

    let mut eras = Vec::with_capacity(params.era_count as usize + 1);

    let mut subsidy = params.initial_subsidy;
    let mut cumulative = era_emission(subsidy, params.era_length)?;
    eras.push(Era {
        index: 0,
        subsidy,
        cumulative_threshold: cumulative,
    });

    for index in 1..=params.era_count {
        subsidy = Reduction::for_era(index).apply(subsidy)?;
        cumulative = cumulative
            .checked_add(era_emission(subsidy, params.era_length)?)
            .ok_or(ScheduleError::CalculationOverflow("cumulative threshold"))?;
        eras.push(Era {
            index,
            subsidy,
            cumulative_threshold: cumulative,
        });
    }

    debug!(
        eras = eras.len(),
        total_emission = %cumulative,
        "generated subsidy schedule"
    );

    Ok(Schedule::new(params.clone(), eras))
}

/// Total emission of one era: `subsidy * era_length`, checked.
fn era_emission(subsidy: Amount, era_length: u64) -> Result<Amount, ScheduleError> {
    subsidy
        .checked_mul(era_length as Amount)
        .ok_or(ScheduleError::CalculationOverflow("era emission"))
}
