//! Error types for the slot checker.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for fetching, parsing and mailing.
pub enum Error {
    /// Underlying HTTP client error (DNS, connect, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Booking page answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Sender or recipient is not a usable mailbox.
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    /// The notification could not be assembled.
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    /// Authentication or transport failure talking to the relay.
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Result type for slot checker operations.
pub type Result<T> = std::result::Result<T, Error>;
