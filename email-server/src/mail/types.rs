//! Outbound envelope types.

/// Content type of an outbound body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// `text/plain; charset=utf-8`
    Plain,
    /// `text/html; charset=utf-8`
    Html,
}

/// A fully rendered email, ready to hand to a relay.
///
/// Addresses are kept as caller-supplied strings; the relay parses them so
/// that a malformed recipient surfaces as a relay failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Rendered body
    pub body: String,
    /// Body content type
    pub kind: BodyKind,
}

impl OutboundEmail {
    /// Create a plain-text email.
    pub fn plain(from: String, to: String, subject: impl Into<String>, body: String) -> Self {
        Self {
            from,
            to,
            subject: subject.into(),
            body,
            kind: BodyKind::Plain,
        }
    }

    /// Create an HTML email.
    pub fn html(from: String, to: String, subject: impl Into<String>, body: String) -> Self {
        Self {
            from,
            to,
            subject: subject.into(),
            body,
            kind: BodyKind::Html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        let plain = OutboundEmail::plain(
            "a@example.com".to_string(),
            "b@example.com".to_string(),
            "Hello",
            "body".to_string(),
        );
        assert_eq!(plain.kind, BodyKind::Plain);
        assert_eq!(plain.subject, "Hello");

        let html = OutboundEmail::html(
            "a@example.com".to_string(),
            "b@example.com".to_string(),
            "Hello",
            "<p>body</p>".to_string(),
        );
        assert_eq!(html.kind, BodyKind::Html);
    }
}
