//! Request failure mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::mail::RelayError;

/// Why an event request did not produce a sent email.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The body did not decode into the expected record.
    #[error("invalid request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The relay refused or failed the send.
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            DispatchError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text reason returned to the caller. Never includes internals.
    pub fn public_message(&self) -> &'static str {
        match self {
            DispatchError::MalformedBody(_) => "Invalid request",
            DispatchError::Relay(_) => "Failed to send email",
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err: DispatchError = serde_json::from_str::<u8>("{").unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid request");
    }

    #[test]
    fn test_relay_failure_is_internal_error() {
        let relay_err = crate::mail::relay::parse_mailbox("nope").unwrap_err();
        let err = DispatchError::from(relay_err);

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
