use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Built once, shared by every part writer
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// XML 1.0 forbids C0 controls other than tab, line feed and carriage return.
#[inline]
fn is_forbidden(c: char) -> bool {
    (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r')
}

/// Escape a string for use in XML text content or attribute values.
///
/// Characters that cannot appear in an XML 1.0 document are dropped. Input
/// that needs no change is returned borrowed.
///
/// # Examples
///
/// ```
/// use deckwright::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("Σ = 285h"), "Σ = 285h");
/// assert_eq!(escape_xml("x<\u{0007}y"), "x&lt;y");
/// ```
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    let needs_filter = s.chars().any(is_forbidden);
    if !needs_filter && !XML_ESCAPER.is_match(s) {
        return Cow::Borrowed(s);
    }

    let filtered: Cow<'_, str> = if needs_filter {
        Cow::Owned(s.chars().filter(|c| !is_forbidden(*c)).collect())
    } else {
        Cow::Borrowed(s)
    };

    Cow::Owned(XML_ESCAPER.replace_all(&filtered, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]))
}
