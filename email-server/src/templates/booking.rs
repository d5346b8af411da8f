//! Hotel booking confirmation email.

use serde::Deserialize;

use super::{EmailTemplate, Senders};
use crate::mail::OutboundEmail;

/// Booking confirmation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub name: String,
    pub email: String,
    pub room_no: i64,
    pub room_type: String,
    pub nights: i64,
}

impl EmailTemplate for BookingConfirmation {
    const KIND: &'static str = "booking";
    const PATH: &'static str = "/send-booking-email";
    const SUCCESS_MESSAGE: &'static str = "Booking email sent";

    fn recipient(&self) -> &str {
        &self.email
    }

    fn compose(&self, senders: &Senders) -> OutboundEmail {
        OutboundEmail::plain(
            senders.account.clone(),
            self.email.clone(),
            "Hotel Booking Confirmation",
            format!(
                "Hi {},\n\nYour booking is confirmed for Room {} ({}) for {} nights.\n\nThanks!",
                self.name, self.room_no, self.room_type, self.nights
            ),
        )
    }
}
