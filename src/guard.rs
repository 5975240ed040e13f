//! Slot-side helper that wires validation (and optionally sanitization)
//! into one call.
//!
//! Ad slot components hold a [`SlotGuard`] and pass it the admin-configured
//! snippet for their placement on every render or config change. Rejected
//! snippets are logged for operators via `tracing` and the slot renders
//! nothing; end users never see a validation error.

use crate::error::Violation;
use crate::sanitizer::{AdSanitizer, Sanitizer};
use crate::validator::validate;

/// Decides what markup, if any, an ad slot may mount.
///
/// By default an accepted snippet is returned unchanged. In hardened mode
/// accepted markup is additionally passed through a [`Sanitizer`] before
/// being returned, trading byte-for-byte fidelity of the admin's snippet
/// for defense in depth. The validator and sanitizer remain independently
/// callable; this type only composes them.
///
/// # Example
///
/// ```
/// use ad_gate::SlotGuard;
///
/// let guard = SlotGuard::new().hardened();
/// assert!(guard.prepare(r#"<script>alert(1)</script>"#).is_none());
/// assert!(guard.prepare(r#"<div class="slot"></div>"#).is_some());
/// ```
pub struct SlotGuard {
    sanitizer: Option<Box<dyn Sanitizer>>,
}

impl SlotGuard {
    /// Create a guard that mounts accepted markup as-is.
    pub fn new() -> Self {
        Self { sanitizer: None }
    }

    /// Pass accepted markup through [`AdSanitizer`] before returning it.
    pub fn hardened(self) -> Self {
        self.with_sanitizer(AdSanitizer::new())
    }

    /// Pass accepted markup through a custom [`Sanitizer`].
    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Some(Box::new(sanitizer));
        self
    }

    /// Validate a snippet and return the markup to mount, or `None` if the
    /// slot must stay empty.
    ///
    /// The rejection reason is logged at warn level; callers do not need
    /// their own diagnostics.
    pub fn prepare(&self, markup: &str) -> Option<String> {
        match self.check(markup) {
            Ok(()) => Some(match &self.sanitizer {
                Some(sanitizer) => sanitizer.sanitize(markup),
                None => markup.to_string(),
            }),
            Err(violation) => {
                tracing::warn!("Ad code rejected, slot left empty: {violation}");
                None
            }
        }
    }

    /// Validate a snippet without preparing output. Exposed for callers
    /// that want the [`Violation`] itself, e.g. an admin preview surface.
    pub fn check(&self, markup: &str) -> Result<(), Violation> {
        validate(markup)
    }
}

impl Default for SlotGuard {
    fn default() -> Self {
        Self::new()
    }
}
