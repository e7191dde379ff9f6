use std::fmt;

/// One bookable tour time and the link that books it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub link: String,
}

impl TimeSlot {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time: {}, Link: {}", self.label, self.link)
    }
}

/// Plain-text mail body listing the free slots for a date.
#[derive(Debug, Clone)]
pub struct SlotNotification<'a> {
    pub date: &'a str,
    pub slots: &'a [TimeSlot],
}

impl<'a> SlotNotification<'a> {
    pub fn new(date: &'a str, slots: &'a [TimeSlot]) -> Self {
        Self { date, slots }
    }
}

impl fmt::Display for SlotNotification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found the following free slots on {}:", self.date)?;
        for slot in self.slots {
            write!(f, "\nTime: {}\nLink: {}", slot.label, slot.link)?;
        }
        Ok(())
    }
}
