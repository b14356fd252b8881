use crate::due;
use crate::error::AppError;
use crate::model::{self, Task};
use crate::storage::json_store;
use std::path::Path;

/// Adds a task or overwrites the one with the same name, then persists.
/// Returns the updated schedule.
pub fn upsert_task(
    name: &str,
    length_minutes: i64,
    importance: i64,
    days_from_now: Option<i64>,
) -> Result<Vec<Task>, AppError> {
    let path = json_store::store_path()?;
    upsert_task_with_path(&path, name, length_minutes, importance, days_from_now)
}

/// Removes the task with the given name, then persists. Removing a name that
/// is not in the schedule is a no-op, not an error.
pub fn remove_task(name: &str) -> Result<Vec<Task>, AppError> {
    let path = json_store::store_path()?;
    remove_task_with_path(&path, name)
}

/// Read-only snapshot of the current schedule.
pub fn load_schedule() -> Result<Vec<Task>, AppError> {
    let path = json_store::store_path()?;
    json_store::load_store(&path)
}

fn upsert_task_with_path(
    path: &Path,
    name: &str,
    length_minutes: i64,
    importance: i64,
    days_from_now: Option<i64>,
) -> Result<Vec<Task>, AppError> {
    let name = model::validate_name(name)?;
    let length_minutes = model::validate_length_minutes(length_minutes)?;
    let importance = model::validate_importance(importance)?;

    let mut tasks = json_store::load_store(path)?;

    // The default due date is derived from the schedule as it stands before
    // this task is added.
    let due = due::resolve_due_date(days_from_now, &tasks, due::local_today())?;
    let due_date = model::format_due_date(due)?;

    let task = Task {
        name: name.clone(),
        length_minutes,
        importance,
        due_date,
    };

    match tasks.iter_mut().find(|existing| existing.name == name) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }

    json_store::save_store(path, &tasks)?;

    Ok(tasks)
}

fn remove_task_with_path(path: &Path, name: &str) -> Result<Vec<Task>, AppError> {
    let name = model::validate_name(name)?;

    let mut tasks = json_store::load_store(path)?;
    tasks.retain(|task| task.name != name);
    json_store::save_store(path, &tasks)?;

    Ok(tasks)
}
