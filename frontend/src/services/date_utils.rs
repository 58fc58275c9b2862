use chrono::{Datelike, NaiveDate};
use js_sys::Date;

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Heading of a diary day, e.g. "2024년 3월 5일"
pub fn format_diary_heading(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}
