use crate::error::AppError;
use crate::model::{self, Task};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;
const STORE_FILE_NAME: &str = "schedule.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredSchedule {
    schema_version: u32,
    tasks: Vec<Task>,
}

pub fn store_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var("SCHEDCLI_STORE_PATH")
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::io("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("schedcli").join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::io("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("schedcli")
            .join(STORE_FILE_NAME))
    }
}

/// Loads the schedule, creating and persisting an empty one on first run.
/// A file that exists but does not parse into the expected schema is a
/// `corrupt_store` error, never silently reset.
pub fn load_store(path: &Path) -> Result<Vec<Task>, AppError> {
    if !path.exists() {
        let tasks = Vec::new();
        save_store(path, &tasks)?;
        return Ok(tasks);
    }

    let content = std::fs::read_to_string(path).map_err(|err| AppError::io(err.to_string()))?;
    let stored: StoredSchedule =
        serde_json::from_str(&content).map_err(|err| AppError::corrupt_store(err.to_string()))?;

    if !(1..=SCHEMA_VERSION).contains(&stored.schema_version) {
        return Err(AppError::corrupt_store("schema_version mismatch"));
    }

    validate_tasks(&stored.tasks)?;

    Ok(stored.tasks)
}

fn validate_tasks(tasks: &[Task]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for task in tasks {
        let name = model::validate_name(&task.name)
            .map_err(|err| AppError::corrupt_store(err.message().to_string()))?;
        if !seen.insert(name.clone()) {
            return Err(AppError::corrupt_store(format!(
                "duplicate task name '{name}'"
            )));
        }
        model::validate_length_minutes(task.length_minutes)
            .map_err(|err| AppError::corrupt_store(err.message().to_string()))?;
        model::validate_importance(task.importance)
            .map_err(|err| AppError::corrupt_store(err.message().to_string()))?;
        model::parse_due_date(&task.due_date)?;
    }

    Ok(())
}

/// Writes the full schedule, replacing the previous content. The write goes
/// to a sibling temp file first and is renamed over the target so a crash
/// cannot leave a truncated store behind.
pub fn save_store(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let stored = StoredSchedule {
        schema_version: SCHEMA_VERSION,
        tasks: tasks.to_vec(),
    };
    let content = serde_json::to_string_pretty(&stored)
        .map_err(|err| AppError::corrupt_store(err.to_string()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(STORE_FILE_NAME);
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    std::fs::write(&tmp_path, content).map_err(|err| AppError::io(err.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&tmp_path, permissions)
            .map_err(|err| AppError::io(err.to_string()))?;
    }

    std::fs::rename(&tmp_path, path).map_err(|err| AppError::io(err.to_string()))?;

    Ok(())
}
