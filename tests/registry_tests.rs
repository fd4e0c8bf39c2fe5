use std::collections::HashSet;

use judgment_clauses::patterns::{rule, ClauseSpec};
use judgment_clauses::{detect_in, list_clauses, registry, ClauseRegistry, ClauseStatus, RuleError};

const WITH_BROKEN_RULE: &[ClauseSpec] = &[ClauseSpec {
    key: "Greeting",
    name: "Greeting",
    description: "A greeting",
    patterns: &[rule(r"(unclosed"), rule(r"hello")],
    corruption_indicators: &[r"[z-a]", r"!!"],
    expand_line_on_corruption: false,
}];

const DUPLICATED: &[ClauseSpec] = &[
    ClauseSpec {
        key: "Same",
        name: "First",
        description: "",
        patterns: &[rule(r"alpha")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
    ClauseSpec {
        key: "Same",
        name: "Second",
        description: "",
        patterns: &[rule(r"beta")],
        corruption_indicators: &[],
        expand_line_on_corruption: false,
    },
];

#[test]
fn builtin_registry_compiles_cleanly() {
    let reg = registry();
    assert!(reg.diagnostics().is_empty(), "unexpected diagnostics: {:?}", reg.diagnostics());
    assert_eq!(reg.len(), 29);
    assert!(reg.iter().all(|c| !c.patterns.is_empty()));
}

#[test]
fn builtin_keys_are_unique_and_ordered() {
    let reg = registry();
    let keys: Vec<&str> = reg.iter().map(|c| c.key).collect();
    let unique: HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(unique.len(), keys.len());
    assert_eq!(keys.first(), Some(&"CourtTitle"));
    assert_eq!(keys.last(), Some(&"DefendantBlock"));
    assert_eq!(list_clauses(), list_clauses());
}

#[test]
fn only_court_title_expands_to_line() {
    let expanding: Vec<&str> = registry()
        .iter()
        .filter(|c| c.expand_line_on_corruption)
        .map(|c| c.key)
        .collect();
    assert_eq!(expanding, vec!["CourtTitle"]);
}

#[test]
fn catalog_lists_display_fields() {
    let catalog = list_clauses();
    assert_eq!(catalog.len(), registry().len());
    let title = &catalog[0];
    assert_eq!(title.key, "CourtTitle");
    assert_eq!(title.name, "Court Title");
    assert_eq!(title.description, "The title of the court where the case was heard");
}

#[test]
fn broken_rules_are_skipped_and_reported() {
    let reg = ClauseRegistry::load(WITH_BROKEN_RULE);
    assert_eq!(reg.len(), 1);
    let def = reg.get("Greeting").unwrap();
    assert_eq!(def.patterns.len(), 1);
    assert_eq!(def.corruption_indicators.len(), 1);

    let diags = reg.diagnostics();
    assert_eq!(diags.len(), 2);
    assert!(matches!(&diags[0], RuleError::InvalidPattern { clause_key, index: 0, .. } if clause_key == "Greeting"));
    assert!(matches!(&diags[1], RuleError::InvalidIndicator { index: 0, .. }));
    assert!(diags[0].to_string().starts_with("InvalidPattern: Greeting rule 0"));

    // the remaining rule still detects, case-insensitively
    let res = detect_in(&reg, "Well, HELLO there", "Greeting");
    assert_eq!(res.status(), ClauseStatus::Present);
    assert_eq!(res.content(), Some("HELLO"));

    let res = detect_in(&reg, "Well, hello!! there", "Greeting");
    assert_eq!(res.status(), ClauseStatus::Present, "indicator only sees the matched span");
}

#[test]
fn duplicate_keys_keep_first_entry() {
    let reg = ClauseRegistry::load(DUPLICATED);
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.get("Same").unwrap().name, "First");
    assert_eq!(reg.diagnostics(), &[RuleError::DuplicateKey("Same".into())]);
}
