//! Subsidy Schedule Generation Tool
//!
//! Computes the tiered block-subsidy schedule and prints it as the
//! conditional chain embedded in the consensus subsidy lookup, or as JSON
//! for inspection. Run offline at protocol-design time; the consensus
//! codebase consumes only the emitted text.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use emission_schedule::{
    generate_schedule, Amount, EraIndex, ScheduleParams, DEFAULT_ERA_COUNT, DEFAULT_ERA_LENGTH,
    DEFAULT_INITIAL_SUBSIDY,
};
use tracing::debug;

mod render;

#[derive(Parser)]
#[command(name = "emission-schedule-gen")]
#[command(about = "Subsidy schedule generation tool")]
#[command(version)]
struct Cli {
    /// Subsidy paid per block during era 0, in base units
    #[arg(long, default_value_t = DEFAULT_INITIAL_SUBSIDY)]
    initial_subsidy: Amount,

    /// Era length in blocks
    #[arg(long, default_value_t = DEFAULT_ERA_LENGTH)]
    era_length: u64,

    /// Number of reduction eras beyond era 0
    #[arg(long, default_value_t = DEFAULT_ERA_COUNT)]
    era_count: EraIndex,

    /// Output format
    #[arg(long, value_enum, default_value = "chain")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// if/else-if chain for the consensus subsidy lookup
    Chain,
    /// JSON rendering of the schedule
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let params = ScheduleParams {
        initial_subsidy: cli.initial_subsidy,
        era_length: cli.era_length,
        era_count: cli.era_count,
    };

    let schedule = generate_schedule(&params)?;
    debug!(eras = schedule.len(), "schedule generated");

    match cli.format {
        Format::Chain => print!("{}", render::subsidy_chain(&schedule)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
    }

    Ok(())
}
