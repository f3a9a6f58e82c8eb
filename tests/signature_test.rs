use reply_extract::extract_signature;

#[test]
fn test_dash_dash_paragraph_separator() {
    let html = "<html><body>\
<p>Hello, this is my reply.</p>\
<p>--</p>\
<p>John Doe</p>\
<p>john@example.com</p>\
</body></html>";

    let (remaining, signature) = extract_signature(html, true);

    assert!(signature.contains("John Doe"));
    assert!(signature.contains("john@example.com"));
    assert!(remaining.contains("Hello, this is my reply."));
    assert!(!remaining.contains("John Doe"));
}

#[test]
fn test_signature_class_container() {
    let html = r#"<html><body><p>Reply content</p><div class="signature"><p>Jane Smith</p><p>jane@company.com</p></div></body></html>"#;

    let (remaining, signature) = extract_signature(html, true);

    assert!(signature.contains("Jane Smith"));
    assert!(signature.contains("jane@company.com"));
    assert!(!remaining.contains("Jane Smith"));
}

#[test]
fn test_div_with_dash_dash_and_break() {
    let html = "<p>Body text here</p><div> -- <br>Alex Example<br>555-0100</div>";

    let (remaining, signature) = extract_signature(html, true);

    assert!(signature.contains("Alex Example"));
    assert!(!remaining.contains("Alex Example"));
}

#[test]
fn test_plain_text_dash_line_fallback() {
    let html = "<div>First line of the reply<br>Second line of the reply<br>--<br>Sam</div>";

    let (remaining, signature) = extract_signature(html, true);

    assert!(signature.contains("Sam"));
    assert!(remaining.contains("First line of the reply"));
    assert!(!remaining.contains("Sam"));
}

#[test]
fn test_signature_is_normalized_to_text() {
    let html = "<p>Hi</p><p>--</p><p>Jane Doe</p>";

    let (remaining, signature) = extract_signature(html, true);

    assert!(signature.contains("Jane Doe"));
    assert!(!signature.contains('<'));
    assert!(!remaining.contains("Jane Doe"));
}

#[test]
fn test_include_signature_false_is_noop() {
    let html = "<html><body><p>Hello.</p><p>--</p><p>John Doe</p></body></html>";

    let (remaining, signature) = extract_signature(html, false);

    assert_eq!(signature, "");
    assert_eq!(remaining, html);
}

#[test]
fn test_no_signature_found() {
    let html = "<html><body><p>Just a simple reply without any signature.</p></body></html>";

    let (remaining, signature) = extract_signature(html, true);

    assert_eq!(signature, "");
    assert_eq!(remaining, html);
}
