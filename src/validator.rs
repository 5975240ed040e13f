//! Policy validation for admin-supplied ad markup.
//!
//! [`validate`] parses a snippet into an element tree and checks it against
//! the static tables in [`policy`](crate::policy). Rules are applied in a
//! fixed order of precedence and the first violation wins; the routine
//! never aggregates multiple violations into one result.

use scraper::{ElementRef, Html};
use url::Url;

use crate::error::{Verdict, Violation};
use crate::policy::{ALLOWED_DOMAINS, EVENT_HANDLER_ATTRS, FORBIDDEN_SCHEMES, FORBIDDEN_TAGS};

/// Neutral base used to resolve relative and protocol-relative script
/// sources so they can be host-checked without a real page origin.
const PLACEHOLDER_ORIGIN: &str = "https://ad-slot.invalid/";

/// Decide whether an ad snippet is safe to mount into the live document.
///
/// Returns `Ok(())` for acceptable markup and the first [`Violation`]
/// encountered otherwise, checking in order: forbidden tags, dangerous URL
/// schemes, script source allow-listing, inline script bodies, and inline
/// event-handler attributes. Empty or whitespace-only input is valid --
/// absence of ad code is not a policy violation.
///
/// The input is never mutated and no I/O is performed; calling twice on
/// the same string yields the same verdict.
///
/// # Example
///
/// ```
/// use ad_gate::{Violation, validate};
///
/// assert!(validate(r#"<div class="slot"></div>"#).is_ok());
/// assert_eq!(
///     validate(r#"<iframe src="https://x.test"></iframe>"#),
///     Err(Violation::ForbiddenTag("iframe".into())),
/// );
/// ```
pub fn validate(markup: &str) -> Verdict {
    if markup.trim().is_empty() {
        return Ok(());
    }

    // html5ever degrades gracefully on malformed input, so a panic here
    // is a parser fault, not a property of the snippet. Convert it into a
    // rejection instead of unwinding into render code.
    let fragment = match std::panic::catch_unwind(|| Html::parse_fragment(markup)) {
        Ok(fragment) => fragment,
        Err(_) => return Err(Violation::Parse("HTML fragment parser failed".into())),
    };

    check_forbidden_tags(&fragment)?;
    check_url_schemes(&fragment)?;
    check_scripts(&fragment)?;
    check_event_handlers(&fragment)?;
    Ok(())
}

fn elements(fragment: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    fragment
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
}

fn check_forbidden_tags(fragment: &Html) -> Verdict {
    for element in elements(fragment) {
        let tag = element.value().name();
        if FORBIDDEN_TAGS.contains(&tag) {
            return Err(Violation::ForbiddenTag(tag.to_string()));
        }
    }
    Ok(())
}

fn check_url_schemes(fragment: &Html) -> Verdict {
    // Every element with a src/href is checked, not only <script>/<a>.
    for element in elements(fragment) {
        for attr in ["src", "href"] {
            let Some(value) = element.value().attr(attr) else {
                continue;
            };
            let trimmed = value.trim();
            let lower = trimmed.to_ascii_lowercase();
            if FORBIDDEN_SCHEMES.iter().any(|s| lower.starts_with(s)) {
                return Err(Violation::ForbiddenScheme(trimmed.to_string()));
            }
        }
    }
    Ok(())
}

fn check_scripts(fragment: &Html) -> Verdict {
    for element in elements(fragment) {
        if element.value().name() != "script" {
            continue;
        }
        match element.value().attr("src") {
            Some(src) => {
                if !script_source_allowed(src) {
                    return Err(Violation::UntrustedScriptSource(src.trim().to_string()));
                }
            }
            None => {
                // Inline bodies cannot be origin-verified, so content is
                // irrelevant: any non-blank body is rejected.
                let body: String = element.text().collect();
                if !body.trim().is_empty() {
                    return Err(Violation::InlineScript);
                }
            }
        }
    }
    Ok(())
}

fn check_event_handlers(fragment: &Html) -> Verdict {
    for element in elements(fragment) {
        for (name, _) in element.value().attrs() {
            let lower = name.to_ascii_lowercase();
            if EVENT_HANDLER_ATTRS.contains(&lower.as_str()) {
                return Err(Violation::DangerousEventHandler(lower));
            }
        }
    }
    Ok(())
}

/// Host check for a `<script src>` value.
///
/// The source is parsed as a URL, resolving relative and protocol-relative
/// forms against [`PLACEHOLDER_ORIGIN`]; the host must equal an
/// allow-listed domain or be a subdomain of one. If the value cannot be
/// parsed as a URL at all, fall back to substring containment against each
/// allow-listed domain.
fn script_source_allowed(src: &str) -> bool {
    let src = src.trim();
    match resolve_host(src) {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            ALLOWED_DOMAINS
                .iter()
                .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
        }
        None => {
            let lower = src.to_ascii_lowercase();
            ALLOWED_DOMAINS.iter().any(|domain| lower.contains(domain))
        }
    }
}

fn resolve_host(src: &str) -> Option<String> {
    Url::parse(src)
        .or_else(|_| Url::parse(PLACEHOLDER_ORIGIN)?.join(src))
        .ok()?
        .host_str()
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_input_is_valid() {
        assert!(validate("").is_ok());
        assert!(validate("   \n\t  ").is_ok());
    }

    #[test]
    fn plain_container_markup_is_valid() {
        assert!(validate(r#"<div class="ad-slot"><span>Ad</span></div>"#).is_ok());
    }

    #[test]
    fn every_forbidden_tag_is_rejected() {
        for tag in [
            "iframe", "object", "embed", "link", "meta", "base", "form", "input", "svg",
        ] {
            let markup = format!("<div><{tag}></{tag}></div>");
            assert_eq!(
                validate(&markup),
                Err(Violation::ForbiddenTag(tag.to_string())),
                "expected <{tag}> to be rejected",
            );
        }
    }

    #[test]
    fn tag_check_is_equality_not_substring() {
        // <ins> contains "in" but is not <input>; <b> is not <base>.
        assert!(validate("<ins class=\"adsbygoogle\"></ins>").is_ok());
        assert!(validate("<b>bold</b>").is_ok());
    }

    #[test]
    fn javascript_scheme_in_href_is_rejected() {
        let verdict = validate(r#"<a href="javascript:alert(1)">click</a>"#);
        match verdict {
            Err(Violation::ForbiddenScheme(value)) => assert!(value.contains("javascript:")),
            other => panic!("expected ForbiddenScheme, got {other:?}"),
        }
    }

    #[test]
    fn scheme_check_is_case_insensitive_and_trims() {
        assert!(matches!(
            validate(r#"<a href="  JaVaScRiPt:alert(1)">x</a>"#),
            Err(Violation::ForbiddenScheme(_)),
        ));
        assert!(matches!(
            validate(r#"<img src="DATA:text/html,<script>alert(1)</script>">"#),
            Err(Violation::ForbiddenScheme(_)),
        ));
        assert!(matches!(
            validate(r#"<a href="vbscript:msgbox(1)">x</a>"#),
            Err(Violation::ForbiddenScheme(_)),
        ));
    }

    #[test]
    fn scheme_check_covers_all_elements() {
        // Not just <a>/<script>: a <span src> still trips the check.
        assert!(matches!(
            validate(r#"<span src="javascript:void(0)">x</span>"#),
            Err(Violation::ForbiddenScheme(_)),
        ));
    }

    #[test]
    fn allow_listed_script_source_passes() {
        let markup = r#"<script src="https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js"></script>"#;
        assert!(validate(markup).is_ok());
    }

    #[test]
    fn unlisted_script_source_is_rejected() {
        let verdict = validate(r#"<script src="https://evil.example.com/x.js"></script>"#);
        match verdict {
            Err(Violation::UntrustedScriptSource(url)) => {
                assert!(url.contains("evil.example.com"));
            }
            other => panic!("expected UntrustedScriptSource, got {other:?}"),
        }
    }

    #[test]
    fn subdomain_matching_does_not_allow_suffix_spoofing() {
        // "notgooglesyndication.com" ends with the domain text but is not a
        // subdomain of it.
        assert!(matches!(
            validate(r#"<script src="https://notgooglesyndication.com/a.js"></script>"#),
            Err(Violation::UntrustedScriptSource(_)),
        ));
    }

    #[test]
    fn protocol_relative_script_source_resolves() {
        let markup =
            r#"<script src="//pl28380371.effectivegatecpm.com/28/38/03/invoke.js"></script>"#;
        assert!(validate(markup).is_ok());
    }

    #[test]
    fn relative_script_source_is_rejected() {
        assert!(matches!(
            validate(r#"<script src="local/ads.js"></script>"#),
            Err(Violation::UntrustedScriptSource(_)),
        ));
    }

    #[test]
    fn inline_script_body_is_rejected() {
        assert_eq!(
            validate("<script>alert(1)</script>"),
            Err(Violation::InlineScript),
        );
    }

    #[test]
    fn empty_script_with_allowed_src_passes() {
        let markup = r#"<script src="https://www.googletagmanager.com/gtag/js" async></script>"#;
        assert!(validate(markup).is_ok());
    }

    #[test]
    fn whitespace_only_script_body_is_not_inline_script() {
        assert!(validate("<script>  \n  </script>").is_ok());
    }

    #[test]
    fn event_handler_attributes_are_rejected_any_casing() {
        assert_eq!(
            validate(r#"<img src="x" onerror="steal()">"#),
            Err(Violation::DangerousEventHandler("onerror".into())),
        );
        assert_eq!(
            validate(r#"<div ONLOAD="x()">hi</div>"#),
            Err(Violation::DangerousEventHandler("onload".into())),
        );
        assert_eq!(
            validate(r#"<span OnClick="x()">hi</span>"#),
            Err(Violation::DangerousEventHandler("onclick".into())),
        );
    }

    #[test]
    fn forbidden_tag_wins_over_later_rules() {
        // An <iframe> with an onload handler reports the tag, because the
        // tag pass runs before the handler pass.
        assert!(matches!(
            validate(r#"<iframe onload="x()"></iframe>"#),
            Err(Violation::ForbiddenTag(_)),
        ));
    }

    #[test]
    fn malformed_markup_degrades_gracefully() {
        assert!(validate("<div><span>unclosed").is_ok());
        assert!(validate("just plain text, no tags").is_ok());
        assert!(validate("<<<>>>").is_ok());
    }

    #[test]
    fn validation_is_idempotent() {
        let markup = r#"<img src="x" onerror="y()">"#;
        assert_eq!(validate(markup), validate(markup));
        let ok = r#"<div class="slot"></div>"#;
        assert_eq!(validate(ok), validate(ok));
    }

    #[test]
    fn violation_messages_name_the_offender() {
        let err = validate("<object></object>").unwrap_err();
        assert!(err.to_string().contains("object"));

        let err = validate(r#"<script src="https://evil.test/x.js"></script>"#).unwrap_err();
        assert!(err.to_string().contains("evil.test"));

        let err = validate(r#"<div onclick="x()">x</div>"#).unwrap_err();
        assert!(err.to_string().contains("onclick"));
    }
}
