//! Minimal HTML text helpers. All resume text goes through [`escape`] before it
//! is interpolated into markup.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `target`/`rel` attributes for links that leave the page.
pub fn external_link_attrs(href: &str) -> &'static str {
    if href.starts_with("http://") || href.starts_with("https://") {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    }
}

/// Two-digit card number: 1 -> "01".
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}
