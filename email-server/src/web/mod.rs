//! Web server module.
//!
//! Each event endpoint runs the same linear pipeline:
//! 1. Reject anything but POST
//! 2. Decode the JSON body into the event record
//! 3. Render the email
//! 4. Hand it to the mail relay once
//! 5. Report the outcome as plain text

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::templates::{BookingConfirmation, DonationRequest, EmailTemplate, OtpMessage};

pub use error::DispatchError;
pub use handlers::{health, method_not_allowed, send_email, AppState, HealthResponse};

/// Event routes: path and the POST-only method router serving it.
pub fn event_routes() -> [(&'static str, MethodRouter<AppState>); 3] {
    [
        event_route::<OtpMessage>(),
        event_route::<BookingConfirmation>(),
        event_route::<DonationRequest>(),
    ]
}

fn event_route<T: EmailTemplate>() -> (&'static str, MethodRouter<AppState>) {
    (T::PATH, post(send_email::<T>).fallback(method_not_allowed))
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    event_routes()
        .into_iter()
        .fold(Router::new().route("/health", get(health)), |router, (path, route)| {
            router.route(path, route)
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
