//! Outbound mail module.
//!
//! This module provides:
//! - The transient [`OutboundEmail`] envelope produced by every template
//! - The [`MailRelay`] seam and its SMTP implementation
//!
//! ## Flow
//!
//! ```text
//! Template → OutboundEmail → MailRelay::send → SMTP relay
//! ```

#[cfg(test)]
pub mod mock;
pub mod relay;
pub mod types;

pub use relay::{DynMailRelay, MailRelay, RelayError, SmtpRelay};
pub use types::{BodyKind, OutboundEmail};
