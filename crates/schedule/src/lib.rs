//! Emission Schedule Module
//!
//! Computes the tiered block-subsidy schedule for proof-of-work emission:
//! - Deterministic alternating-ratio subsidy reduction (2/3 and 3/4)
//! - Cumulative emission thresholds per era
//! - Exact integer arithmetic with overflow detection
//!
//! The schedule is computed once, offline, at protocol-design time. The
//! consensus subsidy lookup embedded in validation code is generated from
//! this schedule by the `emission-schedule-gen` tool.

pub mod errors;
pub mod params;
pub mod reduction;
pub mod schedule;
pub mod types;

pub use errors::*;
pub use params::*;
pub use reduction::*;
pub use schedule::*;
pub use types::*;

/// Module version for API introspection
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
