//! End-of-run batch report.

use serde::{Deserialize, Serialize};
use surfhatch_scene::{ConversionOutcome, ObjectId};

/// Ordered outcomes of one batch run plus the aggregate views the host's
/// report sink displays.
///
/// Lives only until the report is emitted; nothing here is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// One outcome per input object, in input order.
    pub outcomes: Vec<ConversionOutcome>,
}

impl BatchReport {
    /// Wrap a finished outcome sequence.
    pub fn new(outcomes: Vec<ConversionOutcome>) -> Self {
        Self { outcomes }
    }

    /// Number of objects that converted.
    pub fn converted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status.is_converted())
            .count()
    }

    /// Objects that ended Skipped or Failed, in input order.
    ///
    /// This is the subset the host selects and surfaces in one summary
    /// rather than interrupting the batch with per-object prompts.
    pub fn failed_objects(&self) -> Vec<ObjectId> {
        self.outcomes
            .iter()
            .filter(|o| o.status.is_failure())
            .map(|o| o.object)
            .collect()
    }

    /// Whether every object converted.
    pub fn all_converted(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_converted())
    }

    /// Human-readable summary for the host's report sink.
    pub fn summary(&self) -> String {
        let failed = self.failed_objects();
        if failed.is_empty() {
            return "All surfaces were successfully converted to hatch.".to_string();
        }
        let ids: Vec<String> = failed.iter().map(|id| id.to_string()).collect();
        format!(
            "The following surfaces could not be converted to hatch:\n{}",
            ids.join(", ")
        )
    }
}
