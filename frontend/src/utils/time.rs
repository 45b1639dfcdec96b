use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn month_bounds(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let last = next_month.checked_sub_signed(Duration::days(1))?;
    Some((first, last))
}

/// Polish month-and-year caption used in report headers, e.g. "czerwiec 2025".
pub fn month_caption(year: i32, month: u32) -> String {
    const MONTHS: [&str; 12] = [
        "styczeń",
        "luty",
        "marzec",
        "kwiecień",
        "maj",
        "czerwiec",
        "lipiec",
        "sierpień",
        "wrzesień",
        "październik",
        "listopad",
        "grudzień",
    ];
    let name = MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{name} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn month_bounds_returns_expected_range() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 18).unwrap();
        let (start, end) = month_bounds(date).unwrap();
        assert_eq!(start.day(), 1);
        assert_eq!(end.day(), 28);
    }

    #[test]
    fn month_bounds_handles_leap_february() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let (_, end) = month_bounds(date).unwrap();
        assert_eq!(end.day(), 29);
    }

    #[test]
    fn month_caption_is_polish() {
        assert_eq!(month_caption(2025, 6), "czerwiec 2025");
        assert_eq!(month_caption(2024, 12), "grudzień 2024");
    }
}
