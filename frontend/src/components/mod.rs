pub mod account_book;
pub mod calendar;
pub mod diary_page;
