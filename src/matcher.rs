use serde::{Deserialize, Serialize, Serializer};

use crate::registry::{registry, ClauseDefinition, ClauseRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseStatus {
    Present,
    Missing,
    Corrupted,
}

impl ClauseStatus {
    /// Fixed per-status confidence; not a computed score.
    pub fn confidence(self) -> f64 {
        match self {
            ClauseStatus::Present => 1.0,
            ClauseStatus::Corrupted => 0.5,
            ClauseStatus::Missing => 0.0,
        }
    }
}

/// Located clause text. `start..end` are byte offsets into the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseMatch {
    pub content: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Present(ClauseMatch),
    Corrupted(ClauseMatch),
    Missing,
}

impl Detection {
    pub fn status(&self) -> ClauseStatus {
        match self {
            Detection::Present(_) => ClauseStatus::Present,
            Detection::Corrupted(_) => ClauseStatus::Corrupted,
            Detection::Missing => ClauseStatus::Missing,
        }
    }

    pub fn matched(&self) -> Option<&ClauseMatch> {
        match self {
            Detection::Present(m) | Detection::Corrupted(m) => Some(m),
            Detection::Missing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClauseResult {
    pub clause_key: String,
    pub clause_name: String,
    pub description: String,
    pub detection: Detection,
}

impl ClauseResult {
    pub fn new(definition: &ClauseDefinition, detection: Detection) -> Self {
        ClauseResult {
            clause_key: definition.key.to_string(),
            clause_name: definition.name.to_string(),
            description: definition.description.to_string(),
            detection,
        }
    }

    pub fn status(&self) -> ClauseStatus {
        self.detection.status()
    }

    pub fn confidence(&self) -> f64 {
        self.status().confidence()
    }

    pub fn content(&self) -> Option<&str> {
        self.detection.matched().map(|m| m.content.as_str())
    }

    pub fn start(&self) -> Option<usize> {
        self.detection.matched().map(|m| m.start)
    }

    pub fn end(&self) -> Option<usize> {
        self.detection.matched().map(|m| m.end)
    }
}

#[derive(Serialize)]
struct ClauseResultRecord<'a> {
    clause_key: &'a str,
    clause_name: &'a str,
    description: &'a str,
    status: ClauseStatus,
    confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<usize>,
}

// Missing clauses omit content/start/end instead of writing nulls.
impl Serialize for ClauseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ClauseResultRecord {
            clause_key: &self.clause_key,
            clause_name: &self.clause_name,
            description: &self.description,
            status: self.status(),
            confidence: self.confidence(),
            content: self.content(),
            start: self.start(),
            end: self.end(),
        }
        .serialize(serializer)
    }
}

/// Evaluate one definition against `text`.
///
/// Rules are tried in declared order and the first one that matches decides the span. The
/// indicators only ever see the matched span; for definitions that expand on corruption the
/// reported span widens to the enclosing line and the content is that line, trimmed.
pub fn detect_clause(definition: &ClauseDefinition, text: &str) -> Detection {
    let Some(span) = definition.patterns.iter().find_map(|rule| rule.find(text)) else {
        return Detection::Missing;
    };
    let matched = &text[span.clone()];

    let corrupted = definition
        .corruption_indicators
        .iter()
        .any(|indicator| indicator.is_match(matched));
    if !corrupted {
        return Detection::Present(ClauseMatch { content: matched.to_string(), start: span.start, end: span.end });
    }

    if definition.expand_line_on_corruption {
        let (start, end) = enclosing_line(text, span.start, span.end);
        Detection::Corrupted(ClauseMatch { content: text[start..end].trim().to_string(), start, end })
    } else {
        Detection::Corrupted(ClauseMatch { content: matched.to_string(), start: span.start, end: span.end })
    }
}

/// From the character after the previous newline (or 0) to the next newline at or after `end`
/// (or the end of text).
fn enclosing_line(text: &str, start: usize, end: usize) -> (usize, usize) {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i);
    (line_start, line_end)
}

/// Detect `clause_key` in `text` using the built-in registry.
pub fn detect(text: &str, clause_key: &str) -> ClauseResult {
    detect_in(registry(), text, clause_key)
}

/// Detect `clause_key` using `registry`. Unknown keys resolve to Missing.
pub fn detect_in(registry: &ClauseRegistry, text: &str, clause_key: &str) -> ClauseResult {
    match registry.get(clause_key) {
        Some(definition) => ClauseResult::new(definition, detect_clause(definition, text)),
        None => ClauseResult {
            clause_key: clause_key.to_string(),
            clause_name: clause_key.to_string(),
            description: String::new(),
            detection: Detection::Missing,
        },
    }
}
