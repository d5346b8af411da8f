//! One-time passcode email.

use serde::Deserialize;

use super::{EmailTemplate, Senders};
use crate::mail::OutboundEmail;

/// OTP delivery request.
#[derive(Debug, Clone, Deserialize)]
pub struct OtpMessage {
    pub name: String,
    pub email: String,
    pub otp: i64,
}

impl EmailTemplate for OtpMessage {
    const KIND: &'static str = "otp";
    const PATH: &'static str = "/send-otp-email";
    const SUCCESS_MESSAGE: &'static str = "OTP email sent";

    fn recipient(&self) -> &str {
        &self.email
    }

    fn compose(&self, senders: &Senders) -> OutboundEmail {
        OutboundEmail::plain(
            senders.account.clone(),
            self.email.clone(),
            "Your OTP Code",
            format!(
                "Hi {},\n\nYour OTP code is: {}.\n\nThanks!",
                self.name, self.otp
            ),
        )
    }
}
