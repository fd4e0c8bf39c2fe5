use judgment_clauses::{join_pages, normalize_text, split_pages, text_metadata};

#[test]
fn normalize_unifies_lines_and_spacing() {
    let raw = "  IN THE  SUPREME\tCOURT   \r\nBefore:\r\n\r\n\r\n\r\nHeld.\u{0007}  ";
    assert_eq!(normalize_text(raw), "IN THE SUPREME COURT\nBefore:\n\nHeld.");
}

#[test]
fn normalize_keeps_format_markers_and_unicode() {
    let raw = "<<F:b=1>>Held<</F>> \u{FFFD} café";
    assert_eq!(normalize_text(raw), raw);
}

#[test]
fn normalize_empty_is_empty() {
    assert_eq!(normalize_text(""), "");
    assert_eq!(normalize_text(" \n\t "), "");
}

#[test]
fn split_pages_drops_trailing_blank_pages() {
    let pages = split_pages("first\u{000C}second\u{000C}\n\u{000C}");
    assert_eq!(pages, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn join_pages_marks_page_numbers() {
    let pages = vec!["first".to_string(), "  ".to_string(), "third".to_string()];
    let joined = join_pages(&pages);
    assert_eq!(joined, "\n--- Page 1 ---\n\nfirst\n\n--- Page 3 ---\n\nthird");
}

#[test]
fn metadata_counts_and_case_number() {
    let text = "Civil Appeal No. 123/2019\nBetween the parties";
    let meta = text_metadata(text);
    assert_eq!(meta.total_words, 7);
    assert_eq!(meta.total_lines, 2);
    assert_eq!(meta.total_characters, text.chars().count());
    assert!(meta.has_content);
    assert_eq!(meta.case_number.as_deref(), Some("123/2019"));

    let meta = text_metadata("nothing here");
    assert_eq!(meta.case_number, None);
}
