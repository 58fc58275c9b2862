//! Platform-neutral core of the diary frontend: date utilities, wire types
//! and the state containers the Yew components render.

pub mod calendar;
pub mod calendar_state;
pub mod credentials;
pub mod diary;
pub mod error;
pub mod ids;
pub mod ledger;
pub mod summary;
pub mod tutorial;

pub use calendar::{
    add_months, build_month_grid, day_bucket, diary_id, month_key, parse_diary_id, DayBucket,
    DiaryRoute, MonthKey, Week, WEEKDAY_LABELS,
};
pub use calendar_state::{CalendarAction, CalendarState, CalendarView, DayCell, SummaryDisplay};
pub use credentials::{CredentialProvider, StaticToken};
pub use diary::{DiaryState, EmotionDiary, EmotionRecord, TodoItem};
pub use error::{CalendarError, FetchError, LedgerError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use ledger::{
    category_options, money_flow_options, parse_amount, Category, DraftField, LedgerBook,
    LedgerDraft, LedgerRow, MoneyFlow, SelectOption,
};
pub use summary::{
    decode_month_summaries, find_summary, format_expense, format_income, AccountTotals,
    DaySummary, Emotion, SummaryRequest,
};
pub use tutorial::{ContentKind, ContentOption, TutorialSelection};
