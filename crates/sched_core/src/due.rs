use crate::error::AppError;
use crate::model::{self, Task};
use time::{Date, Duration, OffsetDateTime, UtcOffset};

/// Today's date in the local timezone, falling back to UTC when the local
/// offset cannot be determined.
pub fn local_today() -> Date {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// Resolves a relative day offset into an absolute due date.
///
/// With no offset, a new task is queued behind every already-scheduled
/// deadline: one day after the latest stored due date, or tomorrow when the
/// schedule is empty. A negative offset is legal and yields an already
/// overdue task.
pub fn resolve_due_date(
    days_from_now: Option<i64>,
    tasks: &[Task],
    today: Date,
) -> Result<Date, AppError> {
    let due = match days_from_now {
        Some(days) => today.checked_add(Duration::days(days)),
        None => latest_due_date(tasks)?
            .unwrap_or(today)
            .checked_add(Duration::days(1)),
    };

    due.ok_or_else(|| AppError::invalid_input("due date offset is out of range"))
}

fn latest_due_date(tasks: &[Task]) -> Result<Option<Date>, AppError> {
    let mut latest = None;
    for task in tasks {
        let due = model::parse_due_date(&task.due_date)?;
        if latest.is_none_or(|current| due > current) {
            latest = Some(due);
        }
    }
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::resolve_due_date;
    use crate::model::Task;
    use time::{Date, Duration, Month};

    fn task_due(name: &str, due_date: &str) -> Task {
        Task {
            name: name.to_string(),
            length_minutes: 60,
            importance: 50,
            due_date: due_date.to_string(),
        }
    }

    fn today() -> Date {
        Date::from_calendar_date(2026, Month::August, 30).unwrap()
    }

    #[test]
    fn explicit_offset_is_added_to_today() {
        let due = resolve_due_date(Some(3), &[], today()).unwrap();
        assert_eq!(due, today() + Duration::days(3));
    }

    #[test]
    fn negative_offset_yields_past_date() {
        let due = resolve_due_date(Some(-2), &[], today()).unwrap();
        assert_eq!(due, today() - Duration::days(2));
    }

    #[test]
    fn no_offset_on_empty_schedule_is_tomorrow() {
        let due = resolve_due_date(None, &[], today()).unwrap();
        assert_eq!(due, today() + Duration::days(1));
    }

    #[test]
    fn no_offset_queues_behind_latest_deadline() {
        let tasks = vec![
            task_due("Email", "2026-09-01"),
            task_due("Write report", "2026-09-10"),
            task_due("Laundry", "2026-09-04"),
        ];

        let due = resolve_due_date(None, &tasks, today()).unwrap();
        assert_eq!(
            due,
            Date::from_calendar_date(2026, Month::September, 11).unwrap()
        );
    }

    #[test]
    fn extreme_offset_is_rejected() {
        let err = resolve_due_date(Some(i64::MAX), &[], today()).unwrap_err();
        assert_eq!(err.code(), "invalid_input");
    }

    #[test]
    fn bad_stored_due_date_is_corrupt() {
        let tasks = vec![task_due("Email", "whenever")];
        let err = resolve_due_date(None, &tasks, today()).unwrap_err();
        assert_eq!(err.code(), "corrupt_store");
    }
}
