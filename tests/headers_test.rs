use reply_extract::{extract_sender, parse_received_date};

#[test]
fn test_extract_sender_with_display_name() {
    let html = "<p><b>Van:</b> Jan Jansen &lt;jan@example.nl&gt;</p>";

    let sender = extract_sender(html);

    assert_eq!(sender.email, "jan@example.nl");
    assert_eq!(sender.name, "Jan Jansen");
    assert!(sender.raw.contains("Jan Jansen"));
}

#[test]
fn test_extract_sender_plain_address() {
    let html = "<p><b>From:</b> sender@example.com</p>";

    let sender = extract_sender(html);

    assert_eq!(sender.email, "sender@example.com");
    assert_eq!(sender.name, "");
    assert_eq!(sender.raw, "sender@example.com");
}

#[test]
fn test_extract_sender_with_mailto_anchor() {
    let html = r#"<p><b>From:</b> Ann Lee &lt;<a href="mailto:ann@corp.io">ann@corp.io</a>&gt;</p>"#;

    let sender = extract_sender(html);

    assert_eq!(sender.email, "ann@corp.io");
    assert_eq!(sender.name, "Ann Lee");
}

#[test]
fn test_extract_sender_absent() {
    let sender = extract_sender("<p>No header lines at all</p>");

    assert_eq!(sender.name, "");
    assert_eq!(sender.email, "");
    assert_eq!(sender.raw, "");
}

#[test]
fn test_parse_received_date_rfc2822() {
    let html = "<p><b>Sent:</b> Tue, 10 Feb 2026 14:30:00 +0100</p>";

    let date = parse_received_date(html);

    assert_eq!(date.raw, "Tue, 10 Feb 2026 14:30:00 +0100");
    assert!(date.parsed.starts_with("2026-02-10"));
    assert!(date.timestamp.is_some());
}

#[test]
fn test_parse_received_date_unparseable_keeps_raw() {
    let html = "<p><b>Verzonden:</b> maandag 9 februari 2026</p>";

    let date = parse_received_date(html);

    assert_eq!(date.raw, "maandag 9 februari 2026");
    assert_eq!(date.parsed, date.raw);
    assert!(date.timestamp.is_none());
}

#[test]
fn test_parse_received_date_absent() {
    let date = parse_received_date("<p>Nothing here</p>");

    assert_eq!(date.raw, "");
    assert!(date.timestamp.is_none());
}
