//! State container behind the monthly calendar.
//!
//! All transitions go through [`CalendarState::apply`]. Fetch results carry
//! the month key they were requested for, and a result whose key no longer
//! matches the displayed month is dropped instead of overwriting newer data.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::calendar::{
    add_months, build_month_grid, day_bucket, day_label, diary_id, month_key, month_label,
    year_label, DayBucket, DiaryRoute, MonthKey,
};
use crate::summary::{find_summary, format_expense, format_income, DaySummary, Emotion};

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    GoToToday { today: NaiveDate },
    PreviousMonth,
    NextMonth,
    SelectDay(NaiveDate),
    FetchStarted(MonthKey),
    SummariesLoaded {
        key: MonthKey,
        summaries: Vec<DaySummary>,
    },
    FetchFailed { key: MonthKey },
}

impl CalendarAction {
    /// Action to dispatch for a click on `day`, paired with the diary route
    /// the caller should navigate to.
    pub fn select_day(day: NaiveDate) -> (Self, DiaryRoute) {
        (CalendarAction::SelectDay(day), DiaryRoute::for_day(day))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LoadedSummaries {
    key: MonthKey,
    summaries: Vec<DaySummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
    displayed_month: NaiveDate,
    loaded: Option<LoadedSummaries>,
    in_flight: Option<MonthKey>,
}

impl CalendarState {
    pub fn new(displayed_month: NaiveDate) -> Self {
        Self {
            displayed_month,
            loaded: None,
            in_flight: None,
        }
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn month_key(&self) -> MonthKey {
        month_key(self.displayed_month)
    }

    /// Summaries for the displayed month, or `None` while nothing has been
    /// loaded for it.
    pub fn summaries(&self) -> Option<&[DaySummary]> {
        let current = self.month_key();
        self.loaded
            .as_ref()
            .filter(|loaded| loaded.key == current)
            .map(|loaded| loaded.summaries.as_slice())
    }

    pub fn in_flight(&self) -> Option<&MonthKey> {
        self.in_flight.as_ref()
    }

    /// False when an identical request is already pending.
    pub fn should_fetch(&self, key: &MonthKey) -> bool {
        self.in_flight.as_ref() != Some(key)
    }

    pub fn apply(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::GoToToday { today } => self.displayed_month = today,
            CalendarAction::PreviousMonth => {
                self.displayed_month = add_months(self.displayed_month, -1);
            }
            CalendarAction::NextMonth => {
                self.displayed_month = add_months(self.displayed_month, 1);
            }
            CalendarAction::SelectDay(day) => self.displayed_month = day,
            CalendarAction::FetchStarted(key) => {
                debug!("calendar: fetching summaries for {key}");
                self.in_flight = Some(key);
            }
            CalendarAction::SummariesLoaded { key, summaries } => {
                self.finish(&key);
                if key != self.month_key() {
                    debug!(
                        "calendar: dropping {} summaries for {key}, now showing {}",
                        summaries.len(),
                        self.month_key()
                    );
                    return;
                }
                debug!("calendar: loaded {} summaries for {key}", summaries.len());
                self.loaded = Some(LoadedSummaries { key, summaries });
            }
            CalendarAction::FetchFailed { key } => {
                self.finish(&key);
                warn!("calendar: fetch for {key} failed, keeping previous summaries");
            }
        }
    }

    fn finish(&mut self, key: &MonthKey) {
        if self.in_flight.as_ref() == Some(key) {
            self.in_flight = None;
        }
    }

    /// Join the displayed month's grid with whatever summaries are loaded.
    pub fn view(&self, today: NaiveDate) -> CalendarView {
        let summaries = self.summaries().unwrap_or_default();
        let displayed = self.displayed_month;

        let weeks = build_month_grid(displayed)
            .into_iter()
            .map(|week| {
                week.map(|date| DayCell {
                    date,
                    diary_id: diary_id(date),
                    label: day_label(date),
                    bucket: day_bucket(date, displayed, today),
                    summary: find_summary(summaries, date).map(SummaryDisplay::from),
                })
            })
            .collect();

        CalendarView {
            year_label: year_label(displayed),
            month_label: month_label(displayed),
            weeks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub year_label: String,
    pub month_label: String,
    pub weeks: Vec<[DayCell; 7]>,
}

impl CalendarView {
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub diary_id: String,
    pub label: String,
    pub bucket: DayBucket,
    pub summary: Option<SummaryDisplay>,
}

/// What a day cell shows for a recorded diary day.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDisplay {
    /// `None` for a tag this client does not know; the cell shows no emoji
    pub emotion: Option<Emotion>,
    pub etc: bool,
    pub income: Option<String>,
    pub expense: Option<String>,
}

impl From<&DaySummary> for SummaryDisplay {
    fn from(summary: &DaySummary) -> Self {
        Self {
            emotion: summary.emotion,
            etc: summary.etc,
            income: format_income(summary.account.income),
            expense: format_expense(summary.account.expense),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::AccountTotals;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn summary(date: &str, income: Option<f64>, expense: Option<f64>) -> DaySummary {
        DaySummary {
            date: date.to_string(),
            emotion: Some(Emotion::Happy),
            etc: true,
            account: AccountTotals { income, expense },
        }
    }

    #[test]
    fn test_navigation_round_trip() {
        for start in [date(2024, 1, 31), date(2024, 3, 15), date(2023, 12, 1)] {
            let mut state = CalendarState::new(start);
            let key = state.month_key();

            state.apply(CalendarAction::NextMonth);
            assert_ne!(state.month_key(), key);
            state.apply(CalendarAction::PreviousMonth);
            assert_eq!(state.month_key(), key);
        }
    }

    #[test]
    fn test_next_month_uses_calendar_arithmetic() {
        let mut state = CalendarState::new(date(2024, 1, 31));
        state.apply(CalendarAction::NextMonth);
        assert_eq!(state.displayed_month(), date(2024, 2, 29));
    }

    #[test]
    fn test_go_to_today() {
        let mut state = CalendarState::new(date(2020, 5, 5));
        state.apply(CalendarAction::GoToToday {
            today: date(2024, 3, 18),
        });
        assert_eq!(state.displayed_month(), date(2024, 3, 18));
    }

    #[test]
    fn test_select_day_returns_route() {
        let mut state = CalendarState::new(date(2024, 3, 1));
        let (action, route) = CalendarAction::select_day(date(2024, 4, 2));
        state.apply(action);

        assert_eq!(route.path(), "/diary/20240402");
        assert_eq!(state.displayed_month(), date(2024, 4, 2));
    }

    #[test]
    fn test_loaded_summaries_join_grid() {
        let mut state = CalendarState::new(date(2024, 3, 1));
        let key = state.month_key();
        state.apply(CalendarAction::FetchStarted(key.clone()));
        state.apply(CalendarAction::SummariesLoaded {
            key,
            summaries: vec![
                summary("20240305", Some(15000.0), Some(3200.0)),
                summary("20240306", None, Some(0.0)),
            ],
        });
        assert!(state.in_flight().is_none());

        let view = state.view(date(2024, 3, 18));
        assert_eq!(view.year_label, "2024년");
        assert_eq!(view.month_label, "3월");

        let with_summary: Vec<&DayCell> = view.days().filter(|c| c.summary.is_some()).collect();
        assert_eq!(with_summary.len(), 2);

        let fifth = with_summary[0].summary.as_ref().unwrap();
        assert_eq!(with_summary[0].diary_id, "20240305");
        assert_eq!(fifth.emotion.map(|e| e.emoji()), Some("😊"));
        assert!(fifth.etc);
        assert_eq!(fifth.income.as_deref(), Some("+15,000원"));
        assert_eq!(fifth.expense.as_deref(), Some("-3,200원"));

        let sixth = with_summary[1].summary.as_ref().unwrap();
        assert_eq!(sixth.income, None);
        assert_eq!(sixth.expense, None);

        let today = view.days().find(|c| c.bucket == DayBucket::Today).unwrap();
        assert_eq!(today.diary_id, "20240318");
    }

    #[test]
    fn test_unknown_emotion_still_shows_amounts() {
        let mut state = CalendarState::new(date(2024, 3, 1));
        let mut odd = summary("20240305", Some(1500.0), None);
        odd.emotion = None;
        state.apply(CalendarAction::SummariesLoaded {
            key: state.month_key(),
            summaries: vec![odd],
        });

        let view = state.view(date(2024, 3, 18));
        let cell = view.days().find(|c| c.diary_id == "20240305").unwrap();
        let shown = cell.summary.as_ref().unwrap();
        assert_eq!(shown.emotion, None);
        assert!(shown.etc);
        assert_eq!(shown.income.as_deref(), Some("+1,500원"));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = CalendarState::new(date(2024, 3, 1));
        let march = state.month_key();
        state.apply(CalendarAction::FetchStarted(march.clone()));

        state.apply(CalendarAction::NextMonth);
        let april = state.month_key();
        state.apply(CalendarAction::FetchStarted(april.clone()));

        // March arrives late while April is displayed
        state.apply(CalendarAction::SummariesLoaded {
            key: march,
            summaries: vec![summary("20240305", Some(1.0), None)],
        });
        assert!(state.summaries().is_none());
        assert_eq!(state.in_flight(), Some(&april));

        state.apply(CalendarAction::SummariesLoaded {
            key: april,
            summaries: vec![summary("20240402", None, Some(500.0))],
        });
        assert_eq!(state.summaries().map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_summaries_hidden_after_navigating_away() {
        let mut state = CalendarState::new(date(2024, 3, 1));
        state.apply(CalendarAction::SummariesLoaded {
            key: state.month_key(),
            summaries: vec![summary("20240305", Some(1.0), None)],
        });
        assert!(state.summaries().is_some());

        state.apply(CalendarAction::NextMonth);
        assert!(state.summaries().is_none());
        assert!(state.view(date(2024, 3, 18)).days().all(|c| c.summary.is_none()));
    }

    #[test]
    fn test_in_flight_deduplication() {
        let mut state = CalendarState::new(date(2024, 3, 1));
        let key = state.month_key();
        assert!(state.should_fetch(&key));

        state.apply(CalendarAction::FetchStarted(key.clone()));
        assert!(!state.should_fetch(&key));

        state.apply(CalendarAction::FetchFailed { key: key.clone() });
        assert!(state.should_fetch(&key));
    }

    #[test]
    fn test_failed_fetch_keeps_previous_summaries() {
        let mut state = CalendarState::new(date(2024, 3, 1));
        let key = state.month_key();
        state.apply(CalendarAction::SummariesLoaded {
            key: key.clone(),
            summaries: vec![summary("20240305", Some(1.0), None)],
        });

        state.apply(CalendarAction::FetchStarted(key.clone()));
        state.apply(CalendarAction::FetchFailed { key });
        assert_eq!(state.summaries().map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_unloaded_view_is_empty_not_error() {
        let state = CalendarState::new(date(2024, 3, 1));
        let view = state.view(date(2024, 3, 18));

        assert!(view.weeks.iter().all(|week| week.len() == 7));
        assert!(view.days().all(|cell| cell.summary.is_none()));
    }
}
