use reply_extract::{
    ThreadConfig, detect_thread, extract_first_message, is_quoted_header_line, split_thread,
};

fn threaded_html() -> String {
    // Enough new content to push the quoted headers past the header
    // offset threshold.
    let filler = "<p>This reply has plenty of newly written content in it.</p>\n".repeat(12);
    format!(
        r#"<html><body>
{filler}<div style="border:none; border-top:solid #E1E1E1 1.0pt">
<p><b>Van:</b> sender@example.com</p>
<p><b>Verzonden:</b> maandag 17 februari 2026</p>
<p>Older message content</p>
</div>
</body></html>"#
    )
}

#[test]
fn test_simple_email_is_not_a_thread() {
    let html = "<html><body><p>Just a simple reply without any quoted content.</p></body></html>";

    let result = detect_thread(html, &ThreadConfig::default());

    assert!(!result.is_thread);
    assert_eq!(result.message_count, 1);
    assert!(result.positions.is_empty());
}

#[test]
fn test_detect_thread_with_border_top_and_headers() {
    let html = threaded_html();

    let result = detect_thread(&html, &ThreadConfig::default());

    assert!(result.is_thread);
    assert!(result.message_count >= 2);
    assert_eq!(result.message_count, result.positions.len() + 1);
}

#[test]
fn test_detect_thread_with_blockquote_and_headers() {
    let filler = "<p>Reply content with enough text to pass the offset threshold.</p>\n".repeat(10);
    let html = format!(
        r#"<html><body>
{filler}<blockquote type="cite">
<b>From:</b> sender@example.com
<p>Quoted content</p>
</blockquote>
</body></html>"#
    );

    let result = detect_thread(&html, &ThreadConfig::default());

    assert!(result.is_thread);
    assert!(result.message_count >= 2);
}

#[test]
fn test_early_headers_are_ignored() {
    // Header-looking lines near the top of a document are legitimate new
    // content, not thread boundaries.
    let html = "<html><body><p><b>From:</b> me@example.com</p><p>Short note.</p></body></html>";

    let result = detect_thread(html, &ThreadConfig::default());

    assert!(!result.is_thread);
}

#[test]
fn test_header_threshold_is_configurable() {
    let html = "<html><body><p><b>From:</b> a@b.com</p><p><b>Sent:</b> Monday</p></body></html>";
    let config = ThreadConfig {
        header_offset_threshold: 0,
    };

    let result = detect_thread(html, &config);

    assert!(result.is_thread);
    assert_eq!(result.message_count, 3);
}

#[test]
fn test_positions_are_sorted_ascending() {
    let html = threaded_html();

    let result = detect_thread(&html, &ThreadConfig::default());

    let mut sorted = result.positions.clone();
    sorted.sort_unstable();
    assert_eq!(result.positions, sorted);
}

#[test]
fn test_split_round_trip_reconstructs_input() {
    let html = threaded_html();

    let messages = split_thread(&html, &ThreadConfig::default());

    let reconstructed: String = messages.iter().map(|m| m.raw.as_str()).collect();
    assert_eq!(reconstructed, html);
}

#[test]
fn test_split_labels_first_fragment_newest() {
    let html = threaded_html();

    let messages = split_thread(&html, &ThreadConfig::default());

    assert!(messages.len() >= 2);
    assert!(messages[0].is_newest);
    assert!(messages[0].raw.contains("newly written content"));
    assert!(messages.iter().skip(1).all(|m| !m.is_newest));
    assert!(messages.last().unwrap().raw.contains("Older message content"));
    for (i, message) in messages.iter().enumerate() {
        assert_eq!(message.index, i);
    }
}

#[test]
fn test_split_without_thread_returns_whole_input() {
    let html = "<html><body><p>Single message.</p></body></html>";

    let messages = split_thread(html, &ThreadConfig::default());

    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_newest);
    assert_eq!(messages[0].raw, html);
}

#[test]
fn test_leading_marker_does_not_inflate_message_count() {
    // A blockquote at the very start of the document opens with quoted
    // content; it is not a boundary between two messages.
    let filler = "<p>New content line for this particular reply message.</p>\n".repeat(12);
    let html = format!(
        r#"<blockquote><p>Quoted at the very top</p></blockquote>{filler}<div style="border-top:solid #ccc"><p><b>Van:</b> a@b.nl</p></div>"#
    );

    let structure = detect_thread(&html, &ThreadConfig::default());
    let messages = split_thread(&html, &ThreadConfig::default());

    assert_eq!(structure.message_count, messages.len());
    assert!(!structure.positions.contains(&0));

    let reconstructed: String = messages.iter().map(|m| m.raw.as_str()).collect();
    assert_eq!(reconstructed, html);
}

#[test]
fn test_extract_first_message_matches_first_fragment() {
    let html = threaded_html();

    let first = extract_first_message(&html, &ThreadConfig::default());
    let messages = split_thread(&html, &ThreadConfig::default());

    assert_eq!(first.raw, messages[0].raw);
    assert!(first.is_newest);
    assert!(first.raw.contains("newly written content"));
    assert!(!first.raw.contains("Older message content"));
}

#[test]
fn test_is_quoted_header_line() {
    assert!(is_quoted_header_line("Van: Jan Jansen <jan@example.nl>"));
    assert!(is_quoted_header_line("  Sent: Monday 9 February"));
    assert!(is_quoted_header_line("subject: RE: plan"));
    assert!(!is_quoted_header_line("Vanuit het niets gebeurde er iets."));
    assert!(!is_quoted_header_line("A plain sentence."));
}

#[test]
fn test_fragments_are_repaired() {
    let html = threaded_html();

    let messages = split_thread(&html, &ThreadConfig::default());

    // The first cut truncates the document mid-body; its repaired html
    // regains closing tags.
    assert!(messages[0].html.ends_with("</body></html>"));
}
