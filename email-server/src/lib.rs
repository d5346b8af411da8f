//! Event mailer - HTTP-triggered email dispatch.
//!
//! Turns three kinds of event requests into emails relayed over SMTP:
//! - `POST /send-otp-email`: one-time passcode (plain text)
//! - `POST /send-booking-email`: hotel booking confirmation (plain text)
//! - `POST /send-donation-request`: donation request notification (HTML)
//!
//! ## Architecture
//!
//! ```text
//! HTTP request → decode → EmailTemplate::compose → MailRelay::send → HTTP response
//! ```

pub mod config;
pub mod html;
pub mod mail;
pub mod templates;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use mail::{MailRelay, OutboundEmail, RelayError, SmtpRelay};
pub use templates::{BookingConfirmation, DonationRequest, EmailTemplate, OtpMessage, Senders};
pub use web::{router, AppState};
