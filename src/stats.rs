use serde::{Deserialize, Serialize};

use crate::matcher::{detect_clause, ClauseResult, ClauseStatus};
use crate::registry::{registry, ClauseRegistry};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "total_clauses")]
    pub total: usize,
    pub present: usize,
    pub missing: usize,
    pub corrupted: usize,
    pub completion_percentage: f64,
}

/// Per-clause results in registry order plus their statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseAnalysis {
    pub results: Vec<ClauseResult>,
    pub statistics: Statistics,
}

/// Run every clause of the built-in registry over `text`.
pub fn aggregate(text: &str) -> ClauseAnalysis {
    aggregate_in(registry(), text)
}

pub fn aggregate_in(registry: &ClauseRegistry, text: &str) -> ClauseAnalysis {
    let results = detect_all_in(registry, text);
    let statistics = clause_statistics(&results);
    ClauseAnalysis { results, statistics }
}

pub fn detect_all_in(registry: &ClauseRegistry, text: &str) -> Vec<ClauseResult> {
    registry
        .iter()
        .map(|definition| ClauseResult::new(definition, detect_clause(definition, text)))
        .collect()
}

pub fn clause_statistics(results: &[ClauseResult]) -> Statistics {
    let count = |status: ClauseStatus| results.iter().filter(|r| r.status() == status).count();
    let total = results.len();
    let present = count(ClauseStatus::Present);
    Statistics {
        total,
        present,
        missing: count(ClauseStatus::Missing),
        corrupted: count(ClauseStatus::Corrupted),
        completion_percentage: completion_percentage(present, total),
    }
}

/// `present / total * 100` rounded to two decimals, 0 for an empty registry.
pub fn completion_percentage(present: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = present as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}
