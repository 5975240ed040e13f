//! Allow-list sanitizer for ad markup.
//!
//! [`AdSanitizer`] reduces a snippet to a fixed subset of tags and
//! attributes. It is a shape-level filter with no branching policy logic:
//! it performs no origin checking and never decides pass/fail. It is meant
//! to run as a second line of defense around the validator, not as a
//! replacement for it.

use scraper::{Html, node::Node};

/// Trait for ad markup sanitizers.
///
/// Each sanitizer receives a markup string and returns a reduced version.
/// Implementations must be `Send + Sync` so they can be shared across ad
/// slots rendering in parallel.
pub trait Sanitizer: Send + Sync {
    /// Transform the given markup, returning the sanitized result.
    fn sanitize(&self, markup: &str) -> String;
}

/// Tags sufficient to render ad network markup. Anything else is stripped
/// and its children unwrapped in place.
const ALLOWED_TAGS: &[&str] = &["div", "ins", "script", "span", "a", "img"];

/// Attributes kept on allowed elements. Any `data-*` attribute is also
/// kept, covering ad-network data attributes beyond the named ones.
const ALLOWED_ATTRS: &[&str] = &[
    "class",
    "id",
    "style",
    "data-ad-client",
    "data-ad-slot",
    "data-ad-format",
    "data-full-width-responsive",
    "src",
    "href",
    "alt",
    "width",
    "height",
    "async",
];

/// HTML5 void elements that must not have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Sanitizer that strips every element and attribute outside a fixed
/// allow-list.
///
/// Disallowed elements are unwrapped (their children survive in place),
/// disallowed attributes are dropped, and comments are removed. Script
/// elements are preserved structurally so that a separately validated
/// script tag is not silently destroyed. The output never contains
/// anything absent from the input, and sanitizing twice yields the same
/// string as sanitizing once.
///
/// # Example
///
/// ```
/// use ad_gate::{AdSanitizer, Sanitizer};
///
/// let sanitizer = AdSanitizer::new();
/// let out = sanitizer.sanitize(r#"<section><span onclick="x()">Ad</span></section>"#);
/// assert_eq!(out, "<span>Ad</span>");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AdSanitizer;

impl AdSanitizer {
    /// Create a sanitizer with the ad markup allow-lists.
    pub fn new() -> Self {
        Self
    }

    fn attr_allowed(name: &str) -> bool {
        ALLOWED_ATTRS.contains(&name) || name.starts_with("data-")
    }

    fn write_node(node: ego_tree::NodeRef<Node>, out: &mut String) {
        match node.value() {
            Node::Document | Node::Fragment => {
                for child in node.children() {
                    Self::write_node(child, out);
                }
            }
            Node::Element(el) => {
                let tag = el.name();
                if !ALLOWED_TAGS.contains(&tag) {
                    // Unwrap: the element is dropped, its children stay.
                    // This also discards the fragment parser's synthetic
                    // <html> container.
                    for child in node.children() {
                        Self::write_node(child, out);
                    }
                    return;
                }

                out.push('<');
                out.push_str(tag);
                for (name, value) in el.attrs() {
                    if !Self::attr_allowed(name) {
                        continue;
                    }
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                if tag == "script" {
                    // Script bodies are raw text: the parser neither
                    // decodes entities in them nor would re-encoding
                    // round-trip, so emit verbatim.
                    for child in node.children() {
                        if let Node::Text(text) = child.value() {
                            out.push_str(text.as_ref());
                        }
                    }
                } else {
                    for child in node.children() {
                        Self::write_node(child, out);
                    }
                }

                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            Node::Text(text) => {
                escape_text(text.as_ref(), out);
            }
            // Comments, doctypes and processing instructions are dropped.
            _ => {}
        }
    }
}

impl Sanitizer for AdSanitizer {
    fn sanitize(&self, markup: &str) -> String {
        if markup.trim().is_empty() {
            return String::new();
        }
        let fragment = Html::parse_fragment(markup);
        let mut out = String::with_capacity(markup.len());
        Self::write_node(fragment.tree.root(), &mut out);
        out
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
