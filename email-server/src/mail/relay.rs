//! SMTP relay client.
//!
//! [`SmtpRelay`] opens one STARTTLS connection per send. The transport is
//! built without a connection pool, so nothing is kept alive between
//! requests. Credentials are resolved once at startup and handed to the
//! constructor.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::info;

use super::types::{BodyKind, OutboundEmail};
use crate::Config;

/// Failure of a single relay attempt. Every variant is terminal for the request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A From or To address could not be parsed.
    #[error("invalid address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The message envelope could not be assembled.
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// Connection, authentication or relay rejection.
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound mail seam shared by every handler.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver one email. Called at most once per request.
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError>;
}

pub type DynMailRelay = Arc<dyn MailRelay>;

/// Production relay backed by `lettre`'s async SMTP transport.
#[derive(Clone)]
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpRelay {
    /// Create a STARTTLS relay to `host:port` authenticated as `username`.
    ///
    /// No connection is opened here; the first network round trip happens
    /// inside [`MailRelay::send`].
    pub fn new(
        host: &str,
        port: u16,
        username: String,
        password: String,
        timeout: Option<Duration>,
    ) -> Result<Self, RelayError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(Credentials::new(username, password));

        if let Some(timeout) = timeout {
            builder = builder.timeout(Some(timeout));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }

    /// Create a relay from the resolved application configuration.
    pub fn from_config(config: &Config) -> Result<Self, RelayError> {
        Self::new(
            &config.smtp_host,
            config.smtp_port,
            config.email_from.clone(),
            config.email_password.clone(),
            config.smtp_timeout_secs.map(Duration::from_secs),
        )
    }
}

/// Parse an address string into a mailbox.
pub fn parse_mailbox(address: &str) -> Result<Mailbox, RelayError> {
    address
        .parse()
        .map_err(|source| RelayError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

/// Assemble the wire message for an outbound email.
pub fn build_message(email: &OutboundEmail) -> Result<Message, RelayError> {
    let content_type = match email.kind {
        BodyKind::Plain => ContentType::TEXT_PLAIN,
        BodyKind::Html => ContentType::TEXT_HTML,
    };

    let message = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.as_str())
        .header(content_type)
        .body(email.body.clone())?;

    Ok(message)
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError> {
        let message = build_message(email)?;

        let response = self.transport.send(message).await?;

        info!(
            to = %email.to,
            subject = %email.subject,
            smtp_positive = response.is_positive(),
            "smtp_relay_accepted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(to: &str) -> OutboundEmail {
        OutboundEmail::plain(
            "sender@example.com".to_string(),
            to.to_string(),
            "Subject",
            "Body".to_string(),
        )
    }

    fn relay() -> SmtpRelay {
        SmtpRelay::new(
            "localhost",
            1025,
            "sender@example.com".to_string(),
            "secret".to_string(),
            Some(Duration::from_secs(5)),
        )
        .unwrap()
    }

    #[test]
    fn test_relay_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpRelay>();
    }

    #[test]
    fn test_build_message_plain() {
        let message = build_message(&sample("to@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("To: to@example.com"));
        assert!(raw.contains("Subject: Subject"));
        assert!(raw.contains("text/plain"));
    }

    #[test]
    fn test_build_message_html() {
        let email = OutboundEmail::html(
            "sender@example.com".to_string(),
            "to@example.com".to_string(),
            "Subject",
            "<p>Hi</p>".to_string(),
        );
        let raw = String::from_utf8(build_message(&email).unwrap().formatted()).unwrap();

        assert!(raw.contains("text/html"));
    }

    #[test]
    fn test_build_message_invalid_recipient() {
        let err = build_message(&sample("not an address")).unwrap_err();
        assert!(matches!(err, RelayError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_recipient_before_connecting() {
        let err = relay().send(&sample("")).await.unwrap_err();
        assert!(matches!(err, RelayError::InvalidAddress { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_lookup(|name| match name {
            "EMAIL_FROM" => Some("sender@example.com".to_string()),
            "EMAIL_PASSWORD" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(SmtpRelay::from_config(&config).is_ok());
    }
}
