use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::constants::{SLOT_SELECTOR, SOLD_OUT_CLASS};
use crate::models::slot::TimeSlot;

/// Extract the bookable time slots from a booking details page.
///
/// Entries flagged sold out and anchors without a target are skipped. A page
/// without the times container simply yields no slots.
pub fn parse_time_slots(html: &str) -> Vec<TimeSlot> {
    let doc = Html::parse_document(html);
    let selector = match Selector::parse(SLOT_SELECTOR) {
        Ok(selector) => selector,
        Err(e) => {
            warn!("Invalid slot selector {}: {}", SLOT_SELECTOR, e);
            return Vec::new();
        }
    };

    let mut slots = Vec::new();
    let mut sold_out = 0;
    for node in doc.select(&selector) {
        if node.value().classes().any(|class| class == SOLD_OUT_CLASS) {
            sold_out += 1;
            continue;
        }
        let Some(href) = node.value().attr("href") else {
            continue;
        };
        let label = node.text().collect::<String>().trim().to_string();
        slots.push(TimeSlot::new(label, href));
    }

    info!(
        "Parsed {} available slot(s), skipped {} sold out",
        slots.len(),
        sold_out
    );
    slots
}
