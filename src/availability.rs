//! Which booking slots are offered on a given date.
//!
//! Slots depend only on the day of the week. Existing bookings are not
//! consulted, so any number of orders may share a slot.

use chrono::{Datelike, NaiveDate, Weekday};

/// Slots offered Monday to Friday.
pub const WEEKDAY_SLOTS: [&str; 7] = [
    "09:00 - 10:00",
    "10:00 - 11:00",
    "11:00 - 12:00",
    "12:00 - 13:00",
    "16:00 - 17:00",
    "17:00 - 18:00",
    "18:00 - 19:00",
];

/// Saturday opens mornings only.
pub const SATURDAY_SLOTS: [&str; 3] = ["09:00 - 10:00", "10:00 - 11:00", "11:00 - 12:00"];

pub fn slots_for(date: NaiveDate) -> &'static [&'static str] {
    match date.weekday() {
        Weekday::Sun => &[],
        Weekday::Sat => &SATURDAY_SLOTS,
        _ => &WEEKDAY_SLOTS,
    }
}

pub fn is_offered(date: NaiveDate, slot: &str) -> bool {
    slots_for(date).iter().any(|offered| *offered == slot)
}
