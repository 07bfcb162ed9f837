//! Slot catalogs offered to the user while the real availability service
//! does not exist. Both generators are pure so the wizard can be tested
//! against pinned calendars.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

/// How far ahead of today dates are offered.
pub const LOOKAHEAD_DAYS: u8 = 14;

/// Fixed half-hour grid, independent of center and date.
pub const TIME_SLOTS: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
];

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The dates from `today + 1` through `today + days`, ascending.
pub fn available_dates(today: Date, days: u8) -> Vec<Date> {
    (1..=i64::from(days))
        .map(|offset| today.saturating_add(Duration::days(offset)))
        .collect()
}

/// The bookable times of day for any date.
pub fn available_times() -> Vec<&'static str> {
    TIME_SLOTS.to_vec()
}

/// `YYYY-MM-DD`, timezone naive, no time-of-day component.
pub fn iso_date(date: Date) -> String {
    date.format(ISO_DATE)
        .expect("constant format description always renders")
}

/// Long human form for summaries, e.g. `Tuesday, 04 June 2024`.
pub fn long_date(date: Date) -> String {
    format!("{}, {:02} {} {}", date.weekday(), date.day(), date.month(), date.year())
}
