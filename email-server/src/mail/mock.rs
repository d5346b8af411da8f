//! Recording relay used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::relay::{MailRelay, RelayError};
use super::types::OutboundEmail;

/// Relay that records every email it is asked to send.
#[derive(Default)]
pub struct RecordingRelay {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay whose every send fails with a transport-style error.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailRelay for RecordingRelay {
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError> {
        self.sent.lock().unwrap().push(email.clone());

        if self.fail {
            // Any RelayError variant will do.
            return Err(super::relay::parse_mailbox("relay unavailable").unwrap_err());
        }
        Ok(())
    }
}
