use judgment_clauses::stats::completion_percentage;
use judgment_clauses::{analyze, detect, registry, scan, ClauseStatus};
use proptest::prelude::*;

fn judgment_like() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("IN THE SUPREME COURT OF XYZ\n".to_string()),
        Just("IN THE HIGH COURT ##OF@@ ABC\n".to_string()),
        Just("SC Appeal No: 45/2019\n".to_string()),
        Just("Before: Hon. Justice A. B. Perera, J.\n".to_string()),
        Just("PETITIONER\nJohn Silva\nvs\nRESPONDENT\n".to_string()),
        Just("Argued On: 12.03.2021\n".to_string()),
        Just("[CORRUPTED: page 3] XXXX \u{FFFD}\u{FFFD}\n".to_string()),
        Just("<<F:b=1>>Held<</F>>\n".to_string()),
        "[a-zA-Z0-9 #@=%.,:;/()\\-\n]{0,40}",
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn statistics_add_up(text in judgment_like()) {
        let analysis = analyze(&text);
        let s = &analysis.statistics;
        prop_assert_eq!(s.total, registry().len());
        prop_assert_eq!(s.present + s.missing + s.corrupted, s.total);
        prop_assert_eq!(s.completion_percentage, completion_percentage(s.present, s.total));
    }

    #[test]
    fn merged_regions_are_sorted_and_disjoint(text in judgment_like()) {
        let analysis = analyze(&text);
        for regions in [analysis.corrupted_regions, scan(&text)] {
            for w in regions.windows(2) {
                prop_assert!(w[0].start <= w[1].start);
                prop_assert!(w[0].end <= w[1].start, "{:?} overlaps {:?}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn spans_match_content(text in judgment_like()) {
        for def in registry().iter() {
            let res = detect(&text, def.key);
            match res.status() {
                ClauseStatus::Missing => {
                    prop_assert!(res.content().is_none() && res.start().is_none() && res.end().is_none());
                }
                ClauseStatus::Corrupted if def.expand_line_on_corruption => {
                    let (start, end) = (res.start().unwrap(), res.end().unwrap());
                    prop_assert_eq!(text[start..end].trim(), res.content().unwrap());
                }
                _ => {
                    let (start, end) = (res.start().unwrap(), res.end().unwrap());
                    prop_assert_eq!(&text[start..end], res.content().unwrap());
                }
            }
        }
    }

    #[test]
    fn analysis_is_deterministic(text in judgment_like()) {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }
}
