//! Runtime configuration: sender credentials and endpoint settings.

use std::env;
use std::fmt;

use tracing::warn;

use crate::constants::*;

/// Sender account used to authenticate against the relay.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Missing variables become empty strings; the relay rejects them at login.
    pub fn from_env() -> Self {
        Self::new(
            env::var(SENDER_EMAIL_VAR).unwrap_or_default(),
            env::var(SENDER_PASSWORD_VAR).unwrap_or_default(),
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where to look for slots and how to deliver the notification.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub base_url: String,
    pub relay_host: String,
    pub relay_port: u16,
    pub subject: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: BOOKING_BASE_URL.to_string(),
            relay_host: SMTP_RELAY_HOST.to_string(),
            relay_port: SMTP_RELAY_PORT,
            subject: MAIL_SUBJECT.to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(url) = lookup(BOOKING_URL_VAR).filter(|v| !v.trim().is_empty()) {
            cfg.base_url = url.trim().to_string();
        }
        if let Some(host) = lookup(SMTP_HOST_VAR).filter(|v| !v.trim().is_empty()) {
            cfg.relay_host = host.trim().to_string();
        }
        if let Some(port) = lookup(SMTP_PORT_VAR) {
            match port.trim().parse::<u16>() {
                Ok(port) => cfg.relay_port = port,
                Err(e) => warn!(
                    "Ignoring {}={:?} ({}), using port {}",
                    SMTP_PORT_VAR, port, e, cfg.relay_port
                ),
            }
        }
        cfg
    }

    pub fn details_url(&self, date: &str) -> String {
        details_url(&self.base_url, date)
    }
}
