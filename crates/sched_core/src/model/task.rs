use crate::error::AppError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

pub const DEFAULT_LENGTH_MINUTES: i64 = 60;
pub const DEFAULT_IMPORTANCE: i64 = 50;

const DUE_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// A scheduled task. `due_date` is an ISO calendar date (`YYYY-MM-DD`) and is
/// always concrete once the task is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub length_minutes: i64,
    pub importance: i64,
    pub due_date: String,
}

pub fn validate_name(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("task name is required"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_length_minutes(value: i64) -> Result<i64, AppError> {
    if value <= 0 {
        return Err(AppError::invalid_input(
            "task length must be a positive number of minutes",
        ));
    }
    Ok(value)
}

pub fn validate_importance(value: i64) -> Result<i64, AppError> {
    if !(1..=100).contains(&value) {
        return Err(AppError::invalid_input(
            "importance must be between 1 and 100",
        ));
    }
    Ok(value)
}

pub fn parse_due_date(raw: &str) -> Result<Date, AppError> {
    Date::parse(raw, DUE_DATE_FORMAT)
        .map_err(|_| AppError::corrupt_store(format!("due_date must be YYYY-MM-DD, got '{raw}'")))
}

pub fn format_due_date(date: Date) -> Result<String, AppError> {
    date.format(DUE_DATE_FORMAT)
        .map_err(|err| AppError::io(err.to_string()))
}
