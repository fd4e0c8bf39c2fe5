//! Helpers for producing the normalised text the analysis runs on.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BLANK_RUN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\n{3,}").ok());
static SPACE_RUN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[ \t]+").ok());
static CASE_NUMBER: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Case No\.|C\.A\. No\.|Civil Appeal No\.|Criminal Appeal No\.)\s*(\d+/\d+)").ok()
});

/// Normalise extracted text.
/// - `\r\n` and `\r` become `\n`; three or more consecutive newlines collapse to two
/// - trailing whitespace is stripped per line, runs of spaces/tabs become one space
/// - ASCII control characters other than `\n` are removed
/// - inline `<<F:...>>` formatting markers are left as they are
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = match BLANK_RUN.as_ref() {
        Some(re) => re.replace_all(&unified, "\n\n").into_owned(),
        None => unified,
    };
    let stripped: Vec<&str> = collapsed.split('\n').map(str::trim_end).collect();
    let joined = stripped.join("\n");
    let spaced = match SPACE_RUN.as_ref() {
        Some(re) => re.replace_all(&joined, " ").into_owned(),
        None => joined,
    };
    let printable: String = spaced
        .chars()
        .filter(|&c| c == '\n' || !c.is_ascii_control())
        .collect();
    printable.trim().to_string()
}

/// Split extractor output on form feeds, dropping trailing blank pages.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\u{000C}').map(|p| p.to_string()).collect();
    while matches!(pages.last(), Some(last) if last.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Join per-page text with `--- Page N ---` separator lines. Blank pages are skipped but keep
/// their number.
pub fn join_pages(pages: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (i, page) in pages.iter().enumerate() {
        if page.trim().is_empty() {
            continue;
        }
        parts.push(format!("\n--- Page {} ---\n", i + 1));
        parts.push(page.clone());
    }
    parts.join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetadata {
    pub total_characters: usize,
    pub total_words: usize,
    pub total_lines: usize,
    pub has_content: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn text_metadata(text: &str) -> TextMetadata {
    let case_number = CASE_NUMBER
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    TextMetadata {
        total_characters: text.chars().count(),
        total_words: word_count(text),
        total_lines: text.split('\n').count(),
        has_content: !text.trim().is_empty(),
        case_number,
    }
}
