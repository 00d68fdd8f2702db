/// Escape text for insertion into HTML element content.
///
/// Matches what a browser produces when serializing a text node: `&`, `<`,
/// `>` and non-breaking spaces are replaced; quotes are left alone.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}
