//! Event templates.
//!
//! Each event type is a request record that knows its route, its success
//! message and how to turn itself into an [`OutboundEmail`]. The web layer
//! mounts one generic handler per template.
//!
//! ```text
//! JSON body → T: EmailTemplate → OutboundEmail → MailRelay
//! ```

pub mod booking;
pub mod donation;
pub mod otp;

use serde::de::DeserializeOwned;

use crate::mail::relay::parse_mailbox;
use crate::mail::{OutboundEmail, RelayError};
use crate::Config;

pub use booking::BookingConfirmation;
pub use donation::DonationRequest;
pub use otp::OtpMessage;

/// Sender addresses available to templates.
#[derive(Debug, Clone)]
pub struct Senders {
    /// Authenticated account address, used for OTP and booking emails
    pub account: String,
    /// No-reply address used for donation notifications
    pub donation: String,
}

impl Senders {
    /// Build sender addresses from configuration, rejecting unparseable ones.
    pub fn from_config(config: &Config) -> Result<Self, RelayError> {
        parse_mailbox(&config.email_from)?;
        parse_mailbox(&config.donation_from)?;

        Ok(Self {
            account: config.email_from.clone(),
            donation: config.donation_from.clone(),
        })
    }
}

/// An event request that renders into exactly one outbound email.
pub trait EmailTemplate: DeserializeOwned + Send + 'static {
    /// Short name used in log events.
    const KIND: &'static str;

    /// Route the template is mounted on.
    const PATH: &'static str;

    /// Plain-text body returned on a successful send.
    const SUCCESS_MESSAGE: &'static str;

    /// Address the email is delivered to.
    fn recipient(&self) -> &str;

    /// Render the outbound email.
    fn compose(&self, senders: &Senders) -> OutboundEmail;
}

#[cfg(test)]
pub(crate) fn test_senders() -> Senders {
    Senders {
        account: "sender@example.com".to_string(),
        donation: "no-reply@example.com".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senders_from_config() {
        let config = Config::from_lookup(|name| match name {
            "EMAIL_FROM" => Some("sender@example.com".to_string()),
            "EMAIL_PASSWORD" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap();

        let senders = Senders::from_config(&config).unwrap();
        assert_eq!(senders.account, "sender@example.com");
        assert_eq!(senders.donation, "no-reply@yourdomain.com");
    }

    #[test]
    fn test_senders_reject_invalid_address() {
        let config = Config::from_lookup(|name| match name {
            "EMAIL_FROM" => Some("not-an-address".to_string()),
            "EMAIL_PASSWORD" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(Senders::from_config(&config).is_err());
    }

    #[test]
    fn test_paths_are_distinct() {
        let paths = [OtpMessage::PATH, BookingConfirmation::PATH, DonationRequest::PATH];
        assert_eq!(paths, ["/send-otp-email", "/send-booking-email", "/send-donation-request"]);
    }
}
