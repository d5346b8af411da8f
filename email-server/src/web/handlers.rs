//! Event endpoint handlers.
//!
//! One generic handler serves every event type. Failures exit at the step
//! where they happen: nothing is sent when decoding fails, and a failed send
//! is reported without retrying.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{error, info, warn};

use super::error::DispatchError;
use crate::mail::DynMailRelay;
use crate::templates::{EmailTemplate, Senders};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: DynMailRelay,
    pub senders: Arc<Senders>,
}

impl AppState {
    pub fn new(relay: DynMailRelay, senders: Senders) -> Self {
        Self {
            relay,
            senders: Arc::new(senders),
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Event Dispatch
// =============================================================================

/// Fallback for any non-POST method on an event route.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// Decode, render and relay one event email.
///
/// The body is taken as raw bytes so that every decode failure, including a
/// missing content type, maps to 400.
pub async fn send_email<T: EmailTemplate>(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), DispatchError> {
    info!(kind = T::KIND, body_length = body.len(), "email_dispatch_received");

    let request: T = serde_json::from_slice(&body).map_err(|e| {
        warn!(kind = T::KIND, error = %e, "email_body_invalid");
        DispatchError::MalformedBody(e)
    })?;

    let email = request.compose(&state.senders);

    if let Err(e) = state.relay.send(&email).await {
        error!(
            kind = T::KIND,
            to = %request.recipient(),
            error = %e,
            "email_send_failed"
        );
        return Err(DispatchError::Relay(e));
    }

    info!(kind = T::KIND, to = %request.recipient(), "email_sent");

    Ok((StatusCode::OK, T::SUCCESS_MESSAGE))
}
