//! Best-effort tag-balance repair for truncated documents

/// Append closing tags for unbalanced `div`, `span` and `p` elements and
/// restore missing `</body></html>` closers.
///
/// This is not a parser: balance is computed by counting literal opening
/// and closing substrings, so tags appearing inside attribute values or
/// comments are miscounted. The output is best-effort, not guaranteed
/// well-formed markup.
#[must_use]
pub fn repair_structure(html: &str) -> String {
    let mut repaired = html.to_string();

    for tag in ["div", "span", "p"] {
        let open = repaired.matches(&format!("<{tag}")).count();
        let close = repaired.matches(&format!("</{tag}")).count();
        for _ in close..open {
            repaired.push_str(&format!("</{tag}>"));
        }
    }

    match (repaired.contains("</body>"), repaired.contains("</html>")) {
        (false, false) => repaired.push_str("</body></html>"),
        (false, true) => {
            if let Some(pos) = repaired.rfind("</html>") {
                repaired.insert_str(pos, "</body>");
            }
        }
        _ => {}
    }

    repaired
}
