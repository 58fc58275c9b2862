pub mod use_calendar;
pub mod use_ledger;
pub mod use_location;
