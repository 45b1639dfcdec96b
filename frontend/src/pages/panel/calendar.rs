use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use leptos::*;

use crate::{
    report::{holidays, DayStatus},
    utils::time::month_bounds,
};

/// Month laid out in Monday-first weeks; leading and trailing `None` cells
/// pad the first and last week.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(anchor) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some((first, last)) = month_bounds(anchor) else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    cells.resize(first.weekday().num_days_from_monday() as usize, None);
    let mut day = first;
    while day <= last {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

fn day_cell_classes(date: NaiveDate, status: Option<DayStatus>) -> String {
    let status_classes = match status {
        Some(DayStatus::Present) => "bg-green-100 text-green-900",
        Some(DayStatus::Absent) => "bg-red-100 text-red-900",
        Some(DayStatus::OnLeave) => "bg-blue-100 text-blue-900",
        None if holidays::is_holiday_or_sunday(date) => "bg-gray-100 text-gray-400",
        None => "bg-white text-gray-700",
    };
    format!("h-14 rounded border border-gray-200 p-1 text-sm {status_classes}")
}

#[component]
pub fn MonthCalendar(
    #[prop(into)] year: Signal<i32>,
    #[prop(into)] month: Signal<u32>,
    #[prop(into)] statuses: Signal<BTreeMap<NaiveDate, DayStatus>>,
) -> impl IntoView {
    const WEEKDAYS: [&str; 7] = ["Pn", "Wt", "Śr", "Cz", "Pt", "So", "Nd"];

    view! {
        <div class="bg-white shadow rounded-lg p-4">
            <div class="grid grid-cols-7 gap-1 text-center text-xs font-medium text-gray-500 mb-1">
                {WEEKDAYS
                    .iter()
                    .map(|name| view! { <div>{*name}</div> })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-7 gap-1">
                {move || {
                    let statuses = statuses.get();
                    month_grid(year.get(), month.get())
                        .into_iter()
                        .map(|cell| match cell {
                            Some(date) => {
                                let status = statuses.get(&date).copied();
                                view! {
                                    <div class=day_cell_classes(date, status)>
                                        <div class="font-medium">{date.day()}</div>
                                        <div class="text-xs truncate">
                                            {status.map(|s| s.label()).unwrap_or("")}
                                        </div>
                                    </div>
                                }
                                .into_view()
                            }
                            None => view! { <div class="h-14"></div> }.into_view(),
                        })
                        .collect_view()
                }}
            </div>
            <div class="flex space-x-4 mt-3 text-xs text-gray-600">
                <span class="flex items-center"><span class="w-3 h-3 rounded bg-green-100 border border-green-300 mr-1"></span>"Obecny"</span>
                <span class="flex items-center"><span class="w-3 h-3 rounded bg-red-100 border border-red-300 mr-1"></span>"Nieobecny"</span>
                <span class="flex items-center"><span class="w-3 h-3 rounded bg-blue-100 border border-blue-300 mr-1"></span>"Urlop"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn june_2025_starts_on_sunday_column() {
        // 2025-06-01 is a Sunday, so six leading pads in a Monday-first grid.
        let grid = month_grid(2025, 6);
        assert_eq!(grid.iter().take_while(|cell| cell.is_none()).count(), 6);
        assert_eq!(grid.iter().flatten().count(), 30);
        assert_eq!(grid.len() % 7, 0);
    }

    #[test]
    fn grid_cells_are_chronological() {
        let days: Vec<_> = month_grid(2024, 2).into_iter().flatten().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first().unwrap().day(), 1);
        assert_eq!(days.last().unwrap().day(), 29);
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(month_grid(2025, 13).is_empty());
    }
}
