use reply_extract::{has_reply_content, score_extraction};

#[test]
fn test_empty_input_scores_zero() {
    let result = score_extraction("", "", 0);

    assert!((result.score - 0.0).abs() < f64::EPSILON);
    assert_eq!(result.factors.get("empty_input"), Some(&serde_json::json!(true)));
}

#[test]
fn test_score_saturates_with_marker_and_aggressive_extraction() {
    // Band 0.95 for ratio < 0.1, plus 0.1 for a present quote marker,
    // clamped at 1.0.
    let original = format!(
        "<blockquote>{}</blockquote>",
        "quoted history ".repeat(100)
    );
    let extracted = "<p>Thanks, that answers everything.</p>";

    let result = score_extraction(&original, extracted, original.len());

    assert!((result.score - 1.0).abs() < f64::EPSILON);
    assert_eq!(
        result.factors.get("has_quote_markers"),
        Some(&serde_json::json!(true))
    );
}

#[test]
fn test_short_extraction_penalty() {
    let original = "x".repeat(1000);
    let extracted = "<p>Ok</p>";

    let result = score_extraction(&original, extracted, original.len());

    // 0.95 band, no marker bonus, minus 0.2 short-extraction penalty.
    assert!((result.score - 0.75).abs() < f64::EPSILON);
    assert_eq!(
        result.factors.get("short_extraction"),
        Some(&serde_json::json!(true))
    );
}

#[test]
fn test_middle_band_without_markers() {
    let original = "x".repeat(1000);
    let extracted = "y".repeat(400);

    let result = score_extraction(&original, &extracted, original.len());

    assert!((result.score - 0.7).abs() < f64::EPSILON);
    assert_eq!(
        result.factors.get("ratio_band"),
        Some(&serde_json::json!("<0.5"))
    );
    assert_eq!(
        result.factors.get("has_quote_markers"),
        Some(&serde_json::json!(false))
    );
}

#[test]
fn test_score_stays_in_range() {
    let cases = [
        ("<p>short</p>", "<p>short</p>"),
        ("<blockquote>a</blockquote>", ""),
        ("<p>something longer than the extraction</p>", "<p>x</p>"),
    ];
    for (original, extracted) in &cases {
        let result = score_extraction(original, extracted, original.len());
        assert!(
            (0.0..=1.0).contains(&result.score),
            "score {} out of range for {original}",
            result.score
        );
    }
}

#[test]
fn test_has_reply_content() {
    assert!(has_reply_content("<p>short reply</p>", 1000));
    assert!(!has_reply_content("", 1000));
    assert!(!has_reply_content("<p>anything</p>", 0));
    assert!(!has_reply_content("same length", 11));
}
