//! Fully-computed report tables. Everything past this point is presentation:
//! the renderer (CSV download today, a PDF engine behind the same contract)
//! receives display strings and applies no further business logic. Hour
//! values are rounded to whole hours here and nowhere else.

use crate::api::types::HoursSummary;
use crate::report::chronological::{DailyReportRow, DayCategory};
use crate::utils::time::month_caption;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub period: String,
    pub head: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Half-hours round away from zero, so 2.5 renders as "3".
fn format_hours(hours: f64) -> String {
    format!("{:.0}", hours.round())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Joins per-employee tables into one download, a blank line between them.
pub fn csv_bundle(tables: &[ReportTable]) -> String {
    tables
        .iter()
        .map(ReportTable::to_csv)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ReportTable {
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&csv_field(&self.title));
        out.push('\n');
        out.push_str(&csv_field(&self.period));
        out.push('\n');
        out.push_str(
            &self
                .head
                .iter()
                .map(|cell| csv_field(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
        out.push('\n');
        for row in &self.rows {
            out.push_str(
                &row.iter()
                    .map(|cell| csv_field(cell))
                    .collect::<Vec<_>>()
                    .join(","),
            );
            out.push('\n');
        }
        out
    }
}

/// One table line per report row, dates ascending.
pub fn chronological_table(
    employee_name: &str,
    rows: &[DailyReportRow],
    year: i32,
    month: u32,
) -> ReportTable {
    let body = rows
        .iter()
        .map(|row| {
            let overtime = match row.category {
                DayCategory::Work => format_hours(row.overtime_hours),
                DayCategory::Leave => String::new(),
            };
            vec![
                row.date.format("%Y-%m-%d").to_string(),
                row.category.label().to_string(),
                format_hours(row.regular_hours),
                overtime,
                row.leave_kind
                    .as_deref()
                    .map(|kind| kind.replace('_', " "))
                    .unwrap_or_default(),
                row.overtime_category
                    .map(|c| c.label().to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();

    ReportTable {
        title: format!("Raport chronologiczny - {employee_name}"),
        period: format!("Okres: {}", month_caption(year, month)),
        head: ["Data", "Typ", "Godziny pracy", "Nadgodziny", "Typ urlopu", "Typ nadgodzin"]
            .map(String::from)
            .to_vec(),
        rows: body,
    }
}

fn summary_rows(summary: &HoursSummary) -> Vec<Vec<String>> {
    let entries: [(&str, f64); 16] = [
        ("Suma", summary.total()),
        ("Normalne", summary.regular),
        ("Nadgodziny dzienne", summary.overtime_day),
        ("Nadgodziny nocne", summary.overtime_night),
        ("Nadgodziny świąteczne", summary.overtime_holiday),
        ("Urlop wypoczynkowy", summary.leave_vacation),
        ("Urlop okolicznościowy", summary.leave_circumstance),
        ("Urlop szkoleniowy", summary.leave_training),
        ("Urlop chorobowy", summary.sick_leave),
        ("Urlop bezpłatny", summary.leave_unpaid),
        ("Urlop wychowawczy", summary.leave_parental),
        ("Urlop macierzyński", summary.leave_pregnant),
        ("Urlop na poszukiwanie pracy", summary.leave_job_search),
        ("Oddanie krwi", summary.leave_blood),
        ("Siła wyższa", summary.leave_higher_power),
        ("Opiekuńczy", summary.leave_carer),
    ];
    entries
        .into_iter()
        .map(|(label, value)| vec![label.to_string(), format_hours(value)])
        .collect()
}

/// The per-category monthly summary with a leading total row.
pub fn summary_table(
    employee_name: &str,
    summary: &HoursSummary,
    year: i32,
    month: u32,
) -> ReportTable {
    ReportTable {
        title: format!("Raport sumaryczny - {employee_name}"),
        period: format!("Okres: {}", month_caption(year, month)),
        head: ["Rodzaj", "Liczba godzin"].map(String::from).to_vec(),
        rows: summary_rows(summary),
    }
}

/// Company-wide variant: the same category rows aggregated over every
/// employee, without a name in the title.
pub fn company_summary_table(summary: &HoursSummary, year: i32, month: u32) -> ReportTable {
    ReportTable {
        title: "Ogólny raport sumaryczny".to_string(),
        period: format!("Okres: {}", month_caption(year, month)),
        head: ["Rodzaj", "Liczba godzin"].map(String::from).to_vec(),
        rows: summary_rows(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::chronological::OvertimeCategory;
    use chrono::NaiveDate;

    fn work_row(overtime: f64) -> DailyReportRow {
        DailyReportRow {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            category: DayCategory::Work,
            regular_hours: 8.0,
            overtime_hours: overtime,
            leave_kind: None,
            overtime_category: (overtime > 0.0).then_some(OvertimeCategory::Daytime),
        }
    }

    #[test]
    fn hours_round_to_whole_at_format_time() {
        let table = chronological_table("Jan Kowalski", &[work_row(1.75)], 2025, 6);
        let cells = &table.rows[0];
        assert_eq!(cells[2], "8");
        assert_eq!(cells[3], "2");
        assert_eq!(cells[5], "Nadgodziny dzienne");
    }

    #[test]
    fn leave_row_blanks_overtime_and_expands_kind() {
        let row = DailyReportRow {
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            category: DayCategory::Leave,
            regular_hours: 8.0,
            overtime_hours: 0.0,
            leave_kind: Some("SIŁA_WYŻSZA".into()),
            overtime_category: None,
        };
        let table = chronological_table("Jan Kowalski", &[row], 2025, 6);
        let cells = &table.rows[0];
        assert_eq!(cells[1], "Urlop");
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "SIŁA WYŻSZA");
    }

    #[test]
    fn table_header_carries_polish_period() {
        let table = chronological_table("Jan Kowalski", &[], 2025, 6);
        assert_eq!(table.title, "Raport chronologiczny - Jan Kowalski");
        assert_eq!(table.period, "Okres: czerwiec 2025");
    }

    #[test]
    fn summary_table_leads_with_total() {
        let summary = HoursSummary {
            regular: 160.0,
            overtime_day: 4.0,
            ..Default::default()
        };
        let table = summary_table("Jan Kowalski", &summary, 2025, 6);
        assert_eq!(table.rows[0], vec!["Suma".to_string(), "164".to_string()]);
        assert_eq!(table.rows.len(), 16);
    }

    #[test]
    fn half_hours_round_away_from_zero() {
        let table = chronological_table("Jan Kowalski", &[work_row(2.5)], 2025, 6);
        assert_eq!(table.rows[0][3], "3");

        let summary = HoursSummary {
            regular: 0.5,
            ..Default::default()
        };
        let table = summary_table("Jan Kowalski", &summary, 2025, 6);
        assert_eq!(table.rows[1], vec!["Normalne".to_string(), "1".to_string()]);
    }

    #[test]
    fn company_summary_has_no_employee_in_title() {
        let summary = HoursSummary {
            regular: 320.0,
            ..Default::default()
        };
        let table = company_summary_table(&summary, 2025, 6);
        assert_eq!(table.title, "Ogólny raport sumaryczny");
        assert_eq!(table.period, "Okres: czerwiec 2025");
        assert_eq!(table.rows[0], vec!["Suma".to_string(), "320".to_string()]);
    }

    #[test]
    fn bundle_separates_tables_with_blank_line() {
        let one = chronological_table("Jan Kowalski", &[], 2025, 6);
        let two = chronological_table("Anna Nowak", &[], 2025, 6);
        let bundle = csv_bundle(&[one.clone(), two]);
        assert!(bundle.starts_with(&one.to_csv()));
        assert!(bundle.contains("\n\nRaport chronologiczny - Anna Nowak"));
    }

    #[test]
    fn csv_escapes_separator_and_quotes() {
        let table = ReportTable {
            title: "Raport, test".into(),
            period: "Okres".into(),
            head: vec!["A".into()],
            rows: vec![vec!["x\"y".into()]],
        };
        let csv = table.to_csv();
        assert!(csv.starts_with("\"Raport, test\"\n"));
        assert!(csv.contains("\"x\"\"y\""));
    }
}
