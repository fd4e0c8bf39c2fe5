//! Registry-independent corruption heuristics and region merging.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::matcher::{ClauseResult, Detection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// `[CORRUPTED: ...]`
    Marker,
    /// `[MISSING: ...]`
    MissingMarker,
    Hashes,
    PlaceholderX,
    ReplacementChar,
    NonwordSeq,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Marker => "marker",
            ArtifactKind::MissingMarker => "missing_marker",
            ArtifactKind::Hashes => "hashes",
            ArtifactKind::PlaceholderX => "placeholder_x",
            ArtifactKind::ReplacementChar => "replacement_char",
            ArtifactKind::NonwordSeq => "nonword_seq",
        }
    }
}

// Order matters: at an identical span the earlier rule's candidate is the one kept.
static ARTIFACT_RULES: Lazy<Vec<(ArtifactKind, Regex)>> = Lazy::new(|| {
    [
        (ArtifactKind::Marker, r"\[CORRUPTED:[^\]]+\]"),
        (ArtifactKind::MissingMarker, r"\[MISSING:[^\]]+\]"),
        (ArtifactKind::Hashes, r"#{2,}"),
        (ArtifactKind::PlaceholderX, r"\bX{2,}\b"),
        (ArtifactKind::ReplacementChar, r"\x{FFFD}+"),
        (ArtifactKind::NonwordSeq, r"[^\w\s]{2,}"),
    ]
    .into_iter()
    .filter_map(|(kind, pattern)| Regex::new(pattern).ok().map(|re| (kind, re)))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionLabel {
    /// Name of the clause whose match was corrupted.
    Clause(String),
    Artifact(ArtifactKind),
}

impl RegionLabel {
    pub fn source(&self) -> &'static str {
        match self {
            RegionLabel::Clause(_) => "clause",
            RegionLabel::Artifact(_) => "artifact",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegionLabel::Clause(name) => name,
            RegionLabel::Artifact(kind) => kind.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptionRegion {
    pub label: RegionLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Serialize)]
struct CorruptionRegionRecord<'a> {
    source: &'static str,
    label: &'a str,
    text: &'a str,
    start: usize,
    end: usize,
}

impl Serialize for CorruptionRegion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CorruptionRegionRecord {
            source: self.label.source(),
            label: self.label.as_str(),
            text: &self.text,
            start: self.start,
            end: self.end,
        }
        .serialize(serializer)
    }
}

/// Every generic artifact match in `text`, rule by rule, unmerged.
pub fn artifact_candidates(text: &str) -> Vec<CorruptionRegion> {
    let mut out = Vec::new();
    for (kind, re) in ARTIFACT_RULES.iter() {
        for m in re.find_iter(text) {
            out.push(CorruptionRegion {
                label: RegionLabel::Artifact(*kind),
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            });
        }
    }
    out
}

/// One region per corrupted clause result, labelled with the clause name.
pub fn clause_regions(results: &[ClauseResult]) -> Vec<CorruptionRegion> {
    results
        .iter()
        .filter_map(|r| match &r.detection {
            Detection::Corrupted(m) => Some(CorruptionRegion {
                label: RegionLabel::Clause(r.clause_name.clone()),
                text: m.content.clone(),
                start: m.start,
                end: m.end,
            }),
            _ => None,
        })
        .collect()
}

/// Generic artifacts in `text`, merged so that no two regions overlap.
pub fn scan(text: &str) -> Vec<CorruptionRegion> {
    merge_regions(artifact_candidates(text))
}

/// Corrupted clause spans and generic artifacts as one merged list.
pub fn correlate(text: &str, results: &[ClauseResult]) -> Vec<CorruptionRegion> {
    let mut candidates = clause_regions(results);
    candidates.extend(artifact_candidates(text));
    merge_regions(candidates)
}

/// Sort by start ascending then end descending, drop exact duplicates, then keep a region only
/// when it starts at or after the end of the last kept one.
pub fn merge_regions(mut candidates: Vec<CorruptionRegion>) -> Vec<CorruptionRegion> {
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut seen: HashSet<(usize, usize, String)> = HashSet::new();
    let mut merged: Vec<CorruptionRegion> = Vec::with_capacity(candidates.len());
    for region in candidates {
        if !seen.insert((region.start, region.end, region.text.clone())) {
            continue;
        }
        if matches!(merged.last(), Some(kept) if region.start < kept.end) {
            continue;
        }
        merged.push(region);
    }
    merged
}
