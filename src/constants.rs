pub const BOOKING_BASE_URL: &str = "https://kilmainhamgaol.admit-one.eu";
pub const SMTP_RELAY_HOST: &str = "smtp.mail.de";
pub const SMTP_RELAY_PORT: u16 = 465;
pub const MAIL_SUBJECT: &str = "Kilmainham Slots";

pub const SENDER_EMAIL_VAR: &str = "KILM_SENDER_EMAIL";
pub const SENDER_PASSWORD_VAR: &str = "KILM_SENDER_EMAIL_PASSWORD";
pub const BOOKING_URL_VAR: &str = "KILM_BOOKING_URL";
pub const SMTP_HOST_VAR: &str = "KILM_SMTP_HOST";
pub const SMTP_PORT_VAR: &str = "KILM_SMTP_PORT";

pub const MAX_ERROR_BODY_CHARS: usize = 200;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Markup hooks on the booking page
pub const SLOT_SELECTOR: &str = "div.OPW_timesHolder div a";
pub const SOLD_OUT_CLASS: &str = "soldOut";

/// Booking page for a single tour date.
pub fn details_url(base: &str, date: &str) -> String {
    format!(
        "{}/?p=details&ga=1&dt={date}&ev=TOUR",
        base.trim_end_matches('/')
    )
}
