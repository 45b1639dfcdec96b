//! Polish statutory public-holiday calendar. Lookup is pure and total:
//! a date that is not in the calendar is simply not a holiday.

use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Fixed-date holidays as (month, day).
static FIXED_HOLIDAYS: Lazy<HashSet<(u32, u32)>> = Lazy::new(|| {
    [
        (1, 1),   // Nowy Rok
        (1, 6),   // Trzech Króli
        (5, 1),   // Święto Pracy
        (5, 3),   // Święto Konstytucji 3 Maja
        (8, 15),  // Wniebowzięcie NMP
        (11, 1),  // Wszystkich Świętych
        (11, 11), // Święto Niepodległości
        (12, 25), // Boże Narodzenie
        (12, 26), // drugi dzień Świąt
    ]
    .into_iter()
    .collect()
});

/// Gregorian Easter Sunday (Meeus/Jones/Butcher).
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

pub fn is_public_holiday(date: NaiveDate) -> bool {
    if FIXED_HOLIDAYS.contains(&(date.month(), date.day())) {
        return true;
    }
    // Wigilia is statutory from 2025 onward.
    if date.month() == 12 && date.day() == 24 && date.year() >= 2025 {
        return true;
    }
    let Some(easter) = easter_sunday(date.year()) else {
        return false;
    };
    // Easter Sunday, Easter Monday, Pentecost, Corpus Christi.
    matches!((date - easter).num_days(), 0 | 1 | 49 | 60)
}

pub fn is_holiday_or_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun || is_public_holiday(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn computus_matches_known_easters() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
    }

    #[test]
    fn movable_feasts_are_holidays() {
        assert!(is_public_holiday(date(2025, 4, 21))); // Poniedziałek Wielkanocny
        assert!(is_public_holiday(date(2025, 6, 8))); // Zielone Świątki
        assert!(is_public_holiday(date(2025, 6, 19))); // Boże Ciało
        assert!(!is_public_holiday(date(2025, 6, 18)));
    }

    #[test]
    fn fixed_holidays_every_year() {
        assert!(is_public_holiday(date(2024, 11, 11)));
        assert!(is_public_holiday(date(2030, 5, 3)));
        assert!(!is_public_holiday(date(2025, 3, 14)));
    }

    #[test]
    fn christmas_eve_only_from_2025() {
        assert!(!is_public_holiday(date(2024, 12, 24)));
        assert!(is_public_holiday(date(2025, 12, 24)));
    }

    #[test]
    fn sundays_count_as_rest_days() {
        assert!(is_holiday_or_sunday(date(2025, 6, 1)));
        assert!(!is_holiday_or_sunday(date(2025, 6, 2)));
    }
}
