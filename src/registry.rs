//! Compiled clause registry.
//!
//! The process-wide registry is built once from [`CLAUSE_SPECS`] on first use and never mutated.
//! Rules that fail to compile are left out of their clause and reported through
//! [`ClauseRegistry::diagnostics`], so one bad rule never stops detection of the others.

use std::collections::HashMap;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::patterns::{ClauseSpec, RuleSource, CLAUSE_SPECS};

const CONTEXT_GROUP: &str = "followed_by";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("InvalidPattern: {clause_key} rule {index}: {message}")]
    InvalidPattern { clause_key: String, index: usize, message: String },
    #[error("InvalidIndicator: {clause_key} indicator {index}: {message}")]
    InvalidIndicator { clause_key: String, index: usize, message: String },
    #[error("DuplicateKey: {0}")]
    DuplicateKey(String),
}

/// A compiled detection rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    has_context: bool,
}

impl PatternRule {
    /// Compile with case-insensitive, multi-line semantics. Trailing context is appended as a
    /// named group so the reported span can stop where the context starts.
    pub fn compile(source: &RuleSource) -> Result<Self, regex::Error> {
        let (pattern, has_context) = match source.followed_by {
            Some(context) => (format!("(?:{})(?P<{}>{})", source.pattern, CONTEXT_GROUP, context), true),
            None => (source.pattern.to_string(), false),
        };
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()?;
        Ok(Self { regex, has_context })
    }

    /// Leftmost span reported by this rule, if it matches anywhere in `text`.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        if !self.has_context {
            return self.regex.find(text).map(|m| m.range());
        }
        let caps = self.regex.captures(text)?;
        let whole = caps.get(0)?;
        let end = caps.name(CONTEXT_GROUP).map_or(whole.end(), |m| m.start());
        Some(whole.start()..end)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct ClauseDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub patterns: Vec<PatternRule>,
    pub corruption_indicators: Vec<Regex>,
    pub expand_line_on_corruption: bool,
}

impl ClauseDefinition {
    /// Compile one table entry. Rules and indicators that fail to compile are dropped and
    /// returned alongside the definition.
    pub fn compile(spec: &ClauseSpec) -> (Self, Vec<RuleError>) {
        let mut errors = Vec::new();

        let mut patterns = Vec::with_capacity(spec.patterns.len());
        for (index, source) in spec.patterns.iter().enumerate() {
            match PatternRule::compile(source) {
                Ok(rule) => patterns.push(rule),
                Err(e) => errors.push(RuleError::InvalidPattern {
                    clause_key: spec.key.to_string(),
                    index,
                    message: e.to_string(),
                }),
            }
        }

        let mut corruption_indicators = Vec::with_capacity(spec.corruption_indicators.len());
        for (index, source) in spec.corruption_indicators.iter().enumerate() {
            match Regex::new(source) {
                Ok(re) => corruption_indicators.push(re),
                Err(e) => errors.push(RuleError::InvalidIndicator {
                    clause_key: spec.key.to_string(),
                    index,
                    message: e.to_string(),
                }),
            }
        }

        let definition = ClauseDefinition {
            key: spec.key,
            name: spec.name,
            description: spec.description,
            patterns,
            corruption_indicators,
            expand_line_on_corruption: spec.expand_line_on_corruption,
        };
        (definition, errors)
    }
}

/// Display data for one clause, without its rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseInfo {
    pub key: String,
    pub name: String,
    pub description: String,
}

/// Ordered, read-only catalog of compiled clause definitions.
#[derive(Debug, Clone, Default)]
pub struct ClauseRegistry {
    clauses: Vec<ClauseDefinition>,
    by_key: HashMap<&'static str, usize>,
    diagnostics: Vec<RuleError>,
}

impl ClauseRegistry {
    /// Build a registry preserving the order of `specs`. A repeated key keeps its first entry.
    pub fn load(specs: &[ClauseSpec]) -> Self {
        let mut registry = ClauseRegistry::default();
        for spec in specs {
            if registry.by_key.contains_key(spec.key) {
                registry.diagnostics.push(RuleError::DuplicateKey(spec.key.to_string()));
                continue;
            }
            let (definition, errors) = ClauseDefinition::compile(spec);
            registry.diagnostics.extend(errors);
            registry.by_key.insert(spec.key, registry.clauses.len());
            registry.clauses.push(definition);
        }
        registry
    }

    pub fn get(&self, key: &str) -> Option<&ClauseDefinition> {
        self.by_key.get(key).map(|&i| &self.clauses[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClauseDefinition> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Problems found while compiling the table.
    pub fn diagnostics(&self) -> &[RuleError] {
        &self.diagnostics
    }

    /// Key, name and description of every clause in registry order.
    pub fn catalog(&self) -> Vec<ClauseInfo> {
        self.clauses
            .iter()
            .map(|c| ClauseInfo {
                key: c.key.to_string(),
                name: c.name.to_string(),
                description: c.description.to_string(),
            })
            .collect()
    }
}

static REGISTRY: Lazy<ClauseRegistry> = Lazy::new(|| ClauseRegistry::load(CLAUSE_SPECS));

/// The built-in registry.
pub fn registry() -> &'static ClauseRegistry {
    &REGISTRY
}
