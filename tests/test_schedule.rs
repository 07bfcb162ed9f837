use citaflow::schedule::{self, LOOKAHEAD_DAYS, TIME_SLOTS};
use time::macros::date;

#[test]
fn seven_day_window_from_june_first() {
    let dates = schedule::available_dates(date!(2024 - 06 - 01), 7);
    let iso: Vec<String> = dates.iter().copied().map(schedule::iso_date).collect();
    assert_eq!(
        iso,
        [
            "2024-06-02",
            "2024-06-03",
            "2024-06-04",
            "2024-06-05",
            "2024-06-06",
            "2024-06-07",
            "2024-06-08",
        ]
    );
}

#[test]
fn window_is_ascending_without_duplicates() {
    let dates = schedule::available_dates(date!(2024 - 12 - 28), LOOKAHEAD_DAYS);
    assert_eq!(dates.len(), usize::from(LOOKAHEAD_DAYS));
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    // the window crosses the year boundary without skipping a day
    assert_eq!(schedule::iso_date(dates[3]), "2025-01-01");
    assert_eq!(schedule::iso_date(dates[4]), "2025-01-02");
}

#[test]
fn time_catalog_is_the_half_hour_grid() {
    let times = schedule::available_times();
    assert_eq!(times, TIME_SLOTS);
    assert!(
        times
            .iter()
            .all(|slot| slot.len() == 5 && slot.as_bytes()[2] == b':')
    );
}

#[test]
fn long_date_names_the_weekday() {
    assert_eq!(schedule::long_date(date!(2024 - 06 - 04)), "Tuesday, 04 June 2024");
}
