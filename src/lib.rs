//! Kilmainham slot watch library
//!
//! This library fetches the Kilmainham Gaol tour booking page for a date,
//! extracts the time slots that are not sold out, and emails them to a
//! recipient over SMTP.

pub mod config;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod models;
pub mod service;

pub use config::{CheckerConfig, Credentials};
pub use error::{Error, Result};
pub use service::{CheckOutcome, SlotChecker};

// Re-export key types for convenience
pub use helpers::email::{Mailer, SmtpMailer};
pub use helpers::fetch::{HttpPageSource, PageSource};
pub use helpers::slots::parse_time_slots;
pub use models::slot::{SlotNotification, TimeSlot};
