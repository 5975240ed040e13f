//! # ad_gate
//!
//! Policy layer for admin-configured ad markup: decide whether a snippet of
//! HTML/JS is safe to inject into a live page, and reduce accepted markup
//! to an allow-listed subset as a second line of defense.
//!
//! ## Overview
//!
//! Ad slots render markup entered by site administrators, which makes every
//! slot a potential XSS vector. `ad_gate` provides two independent pure
//! functions over static policy tables:
//!
//! - [`validate`] rejects snippets containing forbidden elements, dangerous
//!   URL schemes, script sources outside the trusted ad network list,
//!   inline script bodies, or inline event handlers. The first violation
//!   found is reported as a [`Violation`]; nothing is ever thrown.
//! - [`AdSanitizer`] strips everything outside a fixed tag/attribute
//!   allow-list. It enforces no origin policy of its own and never decides
//!   pass/fail; it is total over all inputs.
//!
//! [`SlotGuard`] composes the two for slot components: validate, log the
//! rejection reason for operators, and hand back the markup to mount (or
//! nothing).
//!
//! Both functions are synchronous, allocation-only, and safe to call from
//! several slots rendering in parallel: they touch only their input and
//! build-time constant tables.
//!
//! ## Quick start
//!
//! ```rust
//! use ad_gate::{SlotGuard, Violation, validate};
//!
//! // Accepted: container plus a script from a trusted ad network.
//! let snippet = r#"<ins class="adsbygoogle" data-ad-client="ca-pub-1"></ins>
//! <script src="https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js" async></script>"#;
//! assert!(validate(snippet).is_ok());
//!
//! // Rejected: inline handlers cannot be origin-verified.
//! let verdict = validate(r#"<img src="x" onerror="alert(1)">"#);
//! assert_eq!(verdict, Err(Violation::DangerousEventHandler("onerror".into())));
//!
//! // Slot components usually go through the guard instead:
//! let guard = SlotGuard::new().hardened();
//! assert!(guard.prepare(snippet).is_some());
//! ```

pub mod error;
pub mod guard;
pub mod policy;
pub mod sanitizer;
pub mod validator;

pub use error::{Verdict, Violation};
pub use guard::SlotGuard;
pub use policy::allowed_domains;
pub use sanitizer::{AdSanitizer, Sanitizer};
pub use validator::validate;
