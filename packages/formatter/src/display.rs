use chrono::{DateTime, Local, Utc};
use partnerdesk_core::{present, PartnershipType};

/// Local calendar date, e.g. `3/1/2024`
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y")
        .to_string()
}

/// Local date and time, e.g. `3/1/2024, 9:30:00 AM`
pub fn format_datetime(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Short lowercase caption shown under a company name, e.g. `joint venture`
pub fn type_caption(partnership_type: PartnershipType) -> String {
    partnership_type.as_str().replacen('-', " ", 1)
}

/// The value when present and not blank, otherwise `placeholder`
pub fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    present(value).unwrap_or(placeholder)
}
