//! Donation request notification (HTML).
//!
//! All values come straight from the caller and are escaped before they are
//! placed in the body, so markup in any field arrives as inert text.

use std::fmt::Write;

use serde::Deserialize;

use super::{EmailTemplate, Senders};
use crate::html::escape_html;
use crate::mail::OutboundEmail;

/// Donation request. Every field is free-form text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub food_type: String,
    pub quantity: String,
    pub amount: String,
    pub message: String,
}

impl DonationRequest {
    /// Labelled fields in display order.
    fn labelled_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Address", self.address.as_str()),
            ("Food Type", self.food_type.as_str()),
            ("Quantity", self.quantity.as_str()),
            ("Donation Amount", self.amount.as_str()),
            ("Message", self.message.as_str()),
        ]
    }

    /// Render the HTML body.
    pub fn render_html(&self) -> String {
        let mut body = String::from("<h3>New Donation Request Received</h3>\n");
        for (label, value) in self.labelled_fields() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                body,
                "<p><strong>{}:</strong> {}</p>",
                label,
                escape_html(value)
            );
        }
        body
    }
}

impl EmailTemplate for DonationRequest {
    const KIND: &'static str = "donation";
    const PATH: &'static str = "/send-donation-request";
    const SUCCESS_MESSAGE: &'static str = "Donation email sent successfully";

    fn recipient(&self) -> &str {
        &self.email
    }

    fn compose(&self, senders: &Senders) -> OutboundEmail {
        OutboundEmail::html(
            senders.donation.clone(),
            self.email.clone(),
            "New Donation Request",
            self.render_html(),
        )
    }
}
