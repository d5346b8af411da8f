//! Configuration module for environment variable parsing.
//!
//! Everything is resolved once at startup. A local `.env` file may seed the
//! process environment before [`Config::from_env`] runs, but is never required.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::warn;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 9090;

/// Default SMTP relay host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP relay port (STARTTLS submission).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default From address for donation notifications.
pub const DEFAULT_DONATION_FROM: &str = "no-reply@yourdomain.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Sender address; also the SMTP username
    pub email_from: String,

    /// SMTP secret for `email_from`
    pub email_password: String,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// Optional SMTP session timeout in seconds
    pub smtp_timeout_secs: Option<u64>,

    /// From address used for donation notifications
    pub donation_from: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let email_from = required(&lookup, "EMAIL_FROM")?;
        let email_password = required(&lookup, "EMAIL_PASSWORD")?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),

            email_from,

            email_password,

            smtp_host: lookup("SMTP_HOST")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),

            smtp_port: parse_or(&lookup, "SMTP_PORT", DEFAULT_SMTP_PORT),

            smtp_timeout_secs: parse_optional(&lookup, "SMTP_TIMEOUT_SECS"),

            donation_from: lookup("DONATION_FROM")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_DONATION_FROM.to_string()),
        })
    }
}

/// Read a variable that must be present and non-blank.
fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{name} must be set"))
}

/// Parse a variable, falling back to `default` when absent or invalid.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    parse_optional(lookup, name).unwrap_or(default)
}

fn parse_optional<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid value, using default");
            None
        }
    }
}
