//! Date utilities for the monthly calendar.
//!
//! Everything in here is a pure function of its arguments. The current date
//! is always passed in by the caller, never read from the clock, so the grid
//! and bucket logic can be exercised for any month in tests.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Sunday-first weekday headers.
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

const MONTH_KEY_FORMAT: &str = "%Y%m";
const DIARY_ID_FORMAT: &str = "%Y%m%d";

/// Canonical `yyyyMM` identifier of a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the calendar grid, Sunday through Saturday.
pub type Week = [NaiveDate; 7];

/// How a grid cell relates to the displayed month, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBucket {
    Today,
    InMonth,
    OutsideMonth,
}

impl DayBucket {
    pub fn css_class(&self) -> &'static str {
        match self {
            DayBucket::Today => "day today",
            DayBucket::InMonth => "day in-month",
            DayBucket::OutsideMonth => "day outside-month",
        }
    }
}

pub fn month_key(date: NaiveDate) -> MonthKey {
    MonthKey(date.format(MONTH_KEY_FORMAT).to_string())
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| last_of_month(first).day())
        .unwrap_or(0)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The day before the first of the following month.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Shift by whole calendar months. The day of month is kept when the target
/// month has it and clamped to the month's last day otherwise.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Partition the month containing `date` into Sunday-first weeks, padding the
/// first and last week with days from the neighbouring months.
pub fn build_month_grid(date: NaiveDate) -> Vec<Week> {
    let first = first_of_month(date);
    let last = last_of_month(date);

    let lead = i64::from(first.weekday().num_days_from_sunday());
    let trail = 6 - i64::from(last.weekday().num_days_from_sunday());
    let start = first - Duration::days(lead);
    let end = last + Duration::days(trail);

    let mut weeks = Vec::with_capacity(6);
    let mut cursor = start;
    while cursor <= end {
        let week_start = cursor;
        weeks.push(std::array::from_fn(|offset| {
            week_start + Duration::days(offset as i64)
        }));
        cursor = week_start + Duration::days(7);
    }
    weeks
}

pub fn day_bucket(day: NaiveDate, displayed: NaiveDate, today: NaiveDate) -> DayBucket {
    if day == today {
        DayBucket::Today
    } else if day.year() == displayed.year() && day.month() == displayed.month() {
        DayBucket::InMonth
    } else {
        DayBucket::OutsideMonth
    }
}

/// `yyyyMMdd` identifier of a diary day.
pub fn diary_id(date: NaiveDate) -> String {
    date.format(DIARY_ID_FORMAT).to_string()
}

pub fn parse_diary_id(id: &str) -> Result<NaiveDate, CalendarError> {
    if id.len() != 8 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidDiaryId(id.to_string()));
    }
    NaiveDate::parse_from_str(id, DIARY_ID_FORMAT)
        .map_err(|_| CalendarError::InvalidDiaryId(id.to_string()))
}

/// Two-digit day number shown in a grid cell.
pub fn day_label(date: NaiveDate) -> String {
    format!("{:02}", date.day())
}

pub fn year_label(date: NaiveDate) -> String {
    format!("{}년", date.year())
}

pub fn month_label(date: NaiveDate) -> String {
    format!("{}월", date.month())
}

/// Route of the per-day diary detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryRoute {
    pub diary_id: String,
}

impl DiaryRoute {
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            diary_id: diary_id(day),
        }
    }

    pub fn path(&self) -> String {
        format!("/diary/{}", self.diary_id)
    }

    /// Recover the route from a `/diary/{yyyyMMdd}` path.
    pub fn from_path(path: &str) -> Result<Self, CalendarError> {
        let id = path
            .strip_prefix("/diary/")
            .ok_or_else(|| CalendarError::InvalidDiaryId(path.to_string()))?;
        parse_diary_id(id)?;
        Ok(Self {
            diary_id: id.to_string(),
        })
    }

    pub fn date(&self) -> Result<NaiveDate, CalendarError> {
        parse_diary_id(&self.diary_id)
    }
}
