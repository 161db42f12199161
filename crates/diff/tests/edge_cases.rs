use line_diff::{compare_lines, ratio, round2, Line, SequenceMatcher, Verdict};

#[test]
fn test_empty_versus_non_empty_ratio() {
    assert_eq!(ratio("", ""), 1.0);
    assert_eq!(ratio("", "anything"), 0.0);
    assert_eq!(ratio("anything", ""), 0.0);
}

#[test]
fn test_disjoint_strings() {
    assert_eq!(ratio("abc", "xyz"), 0.0);
}

#[test]
fn test_ratio_counts_characters_not_bytes() {
    // Each emoji is a single character on both sides
    assert_eq!(ratio("🚀a", "🚀b"), 0.5);
    assert_eq!(SequenceMatcher::new("é", "e").ratio(), 0.0);
}

#[test]
fn test_case_sensitive() {
    assert!(ratio("Hello", "hello") < 1.0);
}

#[test]
fn test_matching_blocks_are_ordered() {
    let matcher = SequenceMatcher::new("qabxcd", "abycdf");
    let blocks = matcher.matching_blocks();

    assert!(blocks.windows(2).all(|w| w[0].a < w[1].a && w[0].b < w[1].b));
    // "ab" and "cd"
    assert_eq!(matcher.matched_chars(), 4);
    assert_eq!(matcher.ratio(), 2.0 * 4.0 / 12.0);
}

#[test]
fn test_very_large_comparison() {
    // 1000 lines, every 10th line modified
    let mut left = Vec::new();
    let mut right = Vec::new();

    for i in 0..1000 {
        left.push(format!("Line {} of old text", i));
        if i % 10 == 0 {
            right.push(format!("MODIFIED Line {} of new text", i));
        } else {
            right.push(format!("Line {} of old text", i));
        }
    }

    let result = compare_lines(&Line::numbered(left), &Line::numbered(right));

    assert_eq!(result.pairs_compared, 1000);
    assert_eq!(result.differences_count, 100);
    assert!(result.average_similarity > 90.0 && result.average_similarity < 100.0);
    assert_eq!(result.verdict(), Verdict::NearlyIdentical);
}

#[test]
fn test_unicode_lines() {
    let left = Line::numbered(["Line 1", "Line 2 🚀", "Line 3 😊"]);
    let right = Line::numbered(["Line 1", "Line 2 🚀", "Line 3 🎉"]);

    let result = compare_lines(&left, &right);

    assert_eq!(result.differences_count, 1);
    assert_eq!(result.differences[0].position, 3);
    assert_eq!(result.differences[0].left, "Line 3 😊");
}

#[test]
fn test_verdict_thresholds() {
    assert_eq!(Verdict::from_percent(100.0), Verdict::NearlyIdentical);
    assert_eq!(Verdict::from_percent(95.0), Verdict::NearlyIdentical);
    assert_eq!(Verdict::from_percent(94.99), Verdict::QuiteSimilar);
    assert_eq!(Verdict::from_percent(80.0), Verdict::QuiteSimilar);
    assert_eq!(Verdict::from_percent(79.99), Verdict::ModerateSimilarity);
    assert_eq!(Verdict::from_percent(50.0), Verdict::ModerateSimilarity);
    assert_eq!(Verdict::from_percent(49.99), Verdict::SignificantlyDifferent);
    assert_eq!(Verdict::from_percent(0.0), Verdict::SignificantlyDifferent);
}

#[test]
fn test_empty_documents_are_significantly_different() {
    let result = compare_lines(&[], &[]);
    assert_eq!(result.verdict(), Verdict::SignificantlyDifferent);
}

#[test]
fn test_verdict_display() {
    assert_eq!(Verdict::QuiteSimilar.to_string(), "Quite similar");
    assert_eq!(
        Verdict::NearlyIdentical.description(),
        "Files are nearly identical!"
    );
}

#[test]
fn test_round2() {
    assert_eq!(round2(2.0 / 3.0 * 100.0), 66.67);
    assert_eq!(round2(12.5), 12.5);
    assert_eq!(round2(0.0), 0.0);
}
