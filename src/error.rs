//! Policy violations reported by the validator.

/// All reasons an ad snippet can be rejected.
///
/// Every variant carries enough context for an operator to diagnose why a
/// given snippet was blocked. Violations are surfaced as data through
/// [`Verdict`], never panicked or thrown, so render code stays branch-free
/// beyond a single `is_ok()` check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A disallowed element (`<iframe>`, `<form>`, ...) is present.
    #[error("Forbidden tag <{0}> is not allowed in ad code")]
    ForbiddenTag(String),

    /// A `src`/`href` attribute uses a `javascript:`, `data:` or
    /// `vbscript:` URL.
    #[error("Dangerous URL protocol in attribute value: {0}")]
    ForbiddenScheme(String),

    /// A `<script src>` points at a host outside the ad network allow-list.
    #[error("Script source not on the allowed ad network list: {0}")]
    UntrustedScriptSource(String),

    /// A `<script>` element has a body but no `src`. Inline script can
    /// never be origin-verified, so it is rejected regardless of content.
    #[error("Inline script bodies are not allowed in ad code")]
    InlineScript,

    /// An intrinsic event-handler attribute (`onclick`, `onerror`, ...)
    /// appears on any element.
    #[error("Dangerous event handler attribute: {0}")]
    DangerousEventHandler(String),

    /// The HTML parser failed on the snippet. Distinct from policy
    /// violations but produces the same rejection shape.
    #[error("Failed to parse ad code: {0}")]
    Parse(String),
}

/// Outcome of validating one ad snippet: `Ok(())` means safe to mount.
pub type Verdict = std::result::Result<(), Violation>;
