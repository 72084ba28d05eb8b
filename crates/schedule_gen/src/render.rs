//! Textual rendering of a subsidy schedule

use emission_schedule::Schedule;

/// Render the schedule as the conditional chain embedded in consensus code.
///
/// One branch per era in order: era 0 opens the chain with `if`, every
/// later era is an `else if`, so the first matching threshold wins. No
/// arithmetic happens here; the values are serialized as computed.
pub fn subsidy_chain(schedule: &Schedule) -> String {
    let mut out = String::new();

    for era in schedule.eras() {
        let keyword = if era.index == 0 { "if" } else { "else if" };
        out.push_str(&format!(
            "{} (emitted < {}) {{\n",
            keyword, era.cumulative_threshold
        ));
        out.push_str(&format!("\tbaseSubsidy = {};\n", era.subsidy));
        out.push_str("}\n");
    }

    out
}
