//! Known HTML element names
//!
//! Element selectors are case-insensitive, so a word that names a known
//! element can be lower-cased safely.

use std::collections::HashSet;
use once_cell::sync::Lazy;

/// Every element name of current and historical HTML, lower case
pub static HTML_TAG_NAMES: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside",
    "audio", "b", "base", "basefont", "bdi", "bdo", "bgsound", "big", "blink",
    "blockquote", "body", "br", "button", "canvas", "caption", "center", "cite",
    "code", "col", "colgroup", "command", "content", "data", "datalist", "dd",
    "del", "details", "dfn", "dialog", "dir", "div", "dl", "dt", "element",
    "em", "embed", "fieldset", "figcaption", "figure", "font", "footer", "form",
    "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header",
    "hgroup", "hr", "html", "i", "iframe", "image", "img", "input", "ins",
    "isindex", "kbd", "keygen", "label", "legend", "li", "link", "listing",
    "main", "map", "mark", "marquee", "math", "menu", "menuitem", "meta",
    "meter", "multicol", "nav", "nextid", "nobr", "noembed", "noframes",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "param",
    "picture", "plaintext", "pre", "progress", "q", "rb", "rbc", "rp", "rt",
    "rtc", "ruby", "s", "samp", "script", "search", "section", "select",
    "shadow", "slot", "small", "source", "spacer", "span", "strike", "strong",
    "style", "sub", "summary", "sup", "svg", "table", "tbody", "td",
    "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr",
    "track", "tt", "u", "ul", "var", "video", "wbr", "xmp",
];

static TAG_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| HTML_TAG_NAMES.iter().copied().collect());

/// Check whether `value` names a known HTML element, ignoring case
pub fn is_known_markup_tag(value: &str) -> bool {
    TAG_SET.contains(value.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert!(is_known_markup_tag("div"));
        assert!(is_known_markup_tag("DIV"));
        assert!(is_known_markup_tag("BlockQuote"));
        assert!(is_known_markup_tag("h6"));
    }

    #[test]
    fn test_unknown_tags() {
        assert!(!is_known_markup_tag("foo-bar"));
        assert!(!is_known_markup_tag(""));
        assert!(!is_known_markup_tag("h7"));
    }

    #[test]
    fn test_table_is_lower_case() {
        assert!(HTML_TAG_NAMES.iter().all(|t| t.to_lowercase() == *t));
    }
}
