//! Escaping and match highlighting.

use std::ops::Range;

/// Escape text for HTML content and double- or single-quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Byte ranges of non-overlapping, case-insensitive occurrences of `query`
/// in `text`, left to right. A blank query matches nothing.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle = query.trim();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start < text.len() {
        match match_len_at(&text[start..], needle) {
            Some(len) => {
                ranges.push(start..start + len);
                start += len;
            }
            None => {
                start += text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Length in bytes of `haystack`'s prefix that equals `needle` ignoring case.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut len = 0;
    let mut hay = haystack.chars();
    for n in needle.chars() {
        let h = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
        len += h.len_utf8();
    }
    Some(len)
}

/// Escape `text`, wrapping each match of `query` in `<mark>`.
pub fn highlight(text: &str, query: &str) -> String {
    let mut html = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for range in match_ranges(text, query) {
        html.push_str(&html_escape(&text[last..range.start]));
        html.push_str(r#"<mark class="match">"#);
        html.push_str(&html_escape(&text[range.clone()]));
        html.push_str("</mark>");
        last = range.end;
    }
    html.push_str(&html_escape(&text[last..]));
    html
}
