//! Static policy tables shared by the validator.
//!
//! All tables are fixed at build time. Nothing in this crate mutates them
//! or reads configuration at runtime; validation is a pure function over
//! these constants and its input.

/// Hostname suffixes of trusted ad and analytics networks.
///
/// A `<script src>` is accepted when its host equals one of these entries
/// or is a subdomain of one (`pagead2.googlesyndication.com` matches
/// `googlesyndication.com`). Append-only in practice.
pub(crate) const ALLOWED_DOMAINS: &[&str] = &[
    "googlesyndication.com",
    "doubleclick.net",
    "googletagmanager.com",
    "google-analytics.com",
    "googletagservices.com",
    "adservice.google.com",
    "amazon-adsystem.com",
    "media.net",
    "effectivegatecpm.com",
    "highperformanceformat.com",
    "profitablecreativeformat.com",
    "outbrain.com",
    "taboola.com",
];

/// Elements that can never appear in accepted ad markup, regardless of
/// content or attributes. Matched by tag-name equality.
pub(crate) const FORBIDDEN_TAGS: &[&str] = &[
    "iframe", "object", "embed", "link", "meta", "base", "form", "input", "svg",
];

/// URL scheme prefixes rejected in any `src`/`href` attribute. Matched
/// case-insensitively against the trimmed attribute value.
pub(crate) const FORBIDDEN_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:"];

/// Intrinsic event-handler attribute names, rejected on every element.
/// Matched case-insensitively.
pub(crate) const EVENT_HANDLER_ATTRS: &[&str] = &[
    "onabort",
    "onanimationend",
    "onanimationiteration",
    "onanimationstart",
    "onauxclick",
    "onbeforeinput",
    "onbeforeunload",
    "onblur",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "onclose",
    "oncontextmenu",
    "oncopy",
    "oncuechange",
    "oncut",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "onfocusin",
    "onfocusout",
    "onformdata",
    "onfullscreenchange",
    "onfullscreenerror",
    "ongotpointercapture",
    "onhashchange",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadstart",
    "onlostpointercapture",
    "onmessage",
    "onmousedown",
    "onmouseenter",
    "onmouseleave",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onmousewheel",
    "onpagehide",
    "onpageshow",
    "onpaste",
    "onpause",
    "onplay",
    "onplaying",
    "onpointercancel",
    "onpointerdown",
    "onpointerenter",
    "onpointerleave",
    "onpointermove",
    "onpointerout",
    "onpointerover",
    "onpointerup",
    "onpopstate",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onsearch",
    "onseeked",
    "onseeking",
    "onselect",
    "onselectionchange",
    "onselectstart",
    "onstalled",
    "onstorage",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "ontouchcancel",
    "ontouchend",
    "ontouchmove",
    "ontouchstart",
    "ontransitionend",
    "onunload",
    "onvolumechange",
    "onwaiting",
    "onwheel",
];

/// Returns a copy of the trusted ad network domain list.
///
/// Intended for display purposes (an admin UI listing which networks are
/// supported). The returned vector is a defensive copy; mutating it has no
/// effect on validation.
///
/// # Example
///
/// ```
/// let domains = ad_gate::allowed_domains();
/// assert!(domains.contains(&"googlesyndication.com"));
/// ```
pub fn allowed_domains() -> Vec<&'static str> {
    ALLOWED_DOMAINS.to_vec()
}
