//! Clause detection and corruption scanning for extracted judgment text.
//!
//! The analysis is a pure function of the input string and the built-in clause registry: every
//! clause is matched in registry order, statistics are computed over the results, and corrupted
//! clause spans are merged with generic extraction artifacts into one non-overlapping list.

pub mod config;
pub mod corruption;
pub mod emit;
pub mod matcher;
pub mod patterns;
pub mod registry;
pub mod stats;
pub mod text;

use serde::Serialize;

pub use config::{enumerate_inputs, load_config, ConfigError, EnumerateError, ScanConfig};
pub use corruption::{correlate, merge_regions, scan, ArtifactKind, CorruptionRegion, RegionLabel};
pub use emit::{emit_report, sha256_hex, EmitError, ReportMeta};
pub use matcher::{detect, detect_clause, detect_in, ClauseMatch, ClauseResult, ClauseStatus, Detection};
pub use registry::{registry, ClauseDefinition, ClauseInfo, ClauseRegistry, RuleError};
pub use stats::{aggregate, aggregate_in, clause_statistics, ClauseAnalysis, Statistics};
pub use text::{join_pages, normalize_text, split_pages, text_metadata, TextMetadata};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub text_length: usize,
    pub word_count: usize,
    pub clauses_analyzed: usize,
    pub clauses: Vec<ClauseResult>,
    pub statistics: Statistics,
    pub corrupted_regions: Vec<CorruptionRegion>,
    pub metadata: TextMetadata,
}

/// Analyse `text` against the built-in registry.
pub fn analyze(text: &str) -> Analysis {
    analyze_with(registry(), text)
}

pub fn analyze_with(registry: &ClauseRegistry, text: &str) -> Analysis {
    let ClauseAnalysis { results, statistics } = aggregate_in(registry, text);
    let corrupted_regions = correlate(text, &results);
    let metadata = text_metadata(text);
    Analysis {
        text_length: metadata.total_characters,
        word_count: metadata.total_words,
        clauses_analyzed: results.len(),
        clauses: results,
        statistics,
        corrupted_regions,
        metadata,
    }
}

/// Supported clauses in registry order, without running detection.
pub fn list_clauses() -> Vec<ClauseInfo> {
    registry().catalog()
}
