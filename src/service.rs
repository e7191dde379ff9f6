use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::{
    config::CheckerConfig,
    error::Result,
    helpers::{email::Mailer, fetch::PageSource, slots::parse_time_slots},
    models::slot::{SlotNotification, TimeSlot},
};

/// How a check ended when nothing fatal happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The booking page could not be retrieved.
    FetchFailed,
    /// The page had no bookable slots.
    NoSlots,
    /// Slots were found and the recipient was mailed.
    Notified(Vec<TimeSlot>),
}

impl CheckOutcome {
    /// Neutral outcomes end the run successfully without sending anything.
    pub fn is_neutral(&self) -> bool {
        !matches!(self, CheckOutcome::Notified(_))
    }
}

/// Fetches the booking page for a date and mails any free slots.
pub struct SlotChecker<S, M> {
    source: S,
    mailer: M,
    config: CheckerConfig,
}

impl<S: PageSource, M: Mailer> SlotChecker<S, M> {
    pub fn new(source: S, mailer: M, config: CheckerConfig) -> Self {
        Self {
            source,
            mailer,
            config,
        }
    }

    /// Run one check. Only a failed notification is returned as an error.
    pub async fn check(&self, date: &str, recipient: &str) -> Result<CheckOutcome> {
        let Some(slots) = self.available_slots(date).await else {
            return Ok(CheckOutcome::FetchFailed);
        };

        if slots.is_empty() {
            info!("No available time slots found for {}", date);
            return Ok(CheckOutcome::NoSlots);
        }

        println!("Available Time Slots:");
        for slot in &slots {
            println!("{}", slot);
        }

        let body = SlotNotification::new(date, &slots).to_string();
        self.mailer
            .send_email(recipient, &self.config.subject, &body)
            .await?;

        Ok(CheckOutcome::Notified(slots))
    }

    /// Fetch and parse the slots for `date`; `None` when the page is unavailable.
    pub async fn available_slots(&self, date: &str) -> Option<Vec<TimeSlot>> {
        if NaiveDate::parse_from_str(date, "%Y%m%d").is_err() {
            warn!("Date {:?} is not in YYYYMMDD form, querying anyway", date);
        }

        let url = self.config.details_url(date);
        match self.source.fetch_page(&url).await {
            Ok(html) => Some(parse_time_slots(&html)),
            Err(e) => {
                error!("Failed to retrieve booking page: {}", e);
                None
            }
        }
    }
}
