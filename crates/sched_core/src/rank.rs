use crate::error::AppError;
use crate::model::{self, Task};
use std::cmp::Ordering;
use time::Date;

/// Saturation bound on the urgency exponent. `exp(709)` overflows f64, and
/// past sixty days the urgency term already dominates (or vanishes against)
/// the importance and length factors.
const DELTA_DAYS_CLAMP: i64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedTask {
    pub name: String,
    pub utility: f64,
    pub length_hours: f64,
}

/// Scores every task and returns them sorted by utility, highest first.
///
/// `utility = exp(-days_until_due) * importance / length_minutes`: urgency
/// grows exponentially as a deadline approaches or passes, importance scales
/// linearly, and time-expensive tasks are discounted. The sort is stable, so
/// equal utilities keep the schedule's insertion order.
pub fn rank_tasks(tasks: &[Task], today: Date) -> Result<Vec<RankedTask>, AppError> {
    let mut ranked = Vec::with_capacity(tasks.len());

    for task in tasks {
        let due = model::parse_due_date(&task.due_date)?;
        let delta_days = (due - today).whole_days();
        let clamped = delta_days.clamp(-DELTA_DAYS_CLAMP, DELTA_DAYS_CLAMP);
        let utility =
            (-(clamped as f64)).exp() * task.importance as f64 / task.length_minutes as f64;
        let length_hours = (task.length_minutes as f64 / 60.0 * 100.0).round() / 100.0;

        ranked.push(RankedTask {
            name: task.name.clone(),
            utility,
            length_hours,
        });
    }

    ranked.sort_by(|a, b| b.utility.partial_cmp(&a.utility).unwrap_or(Ordering::Equal));

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::rank_tasks;
    use crate::model::Task;
    use time::{Date, Month};

    fn task(name: &str, length_minutes: i64, importance: i64, due_date: &str) -> Task {
        Task {
            name: name.to_string(),
            length_minutes,
            importance,
            due_date: due_date.to_string(),
        }
    }

    fn today() -> Date {
        Date::from_calendar_date(2026, Month::August, 30).unwrap()
    }

    #[test]
    fn nearer_deadline_ranks_higher() {
        let tasks = vec![
            task("Write report", 120, 80, "2026-09-02"),
            task("Email", 30, 20, "2026-08-31"),
        ];

        let ranked = rank_tasks(&tasks, today()).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Email");
        assert_eq!(ranked[1].name, "Write report");
        assert!((ranked[0].utility - 0.2453).abs() < 1e-4);
        assert!((ranked[1].utility - 0.0332).abs() < 1e-4);
        assert_eq!(ranked[0].length_hours, 0.5);
        assert_eq!(ranked[1].length_hours, 2.0);
    }

    #[test]
    fn utility_decreases_as_deadline_recedes() {
        let due_dates = ["2026-08-28", "2026-08-30", "2026-09-01", "2026-09-15"];
        let tasks: Vec<Task> = due_dates
            .iter()
            .map(|due| task("same", 60, 50, due))
            .collect();

        let mut utilities = Vec::new();
        for single in &tasks {
            let ranked = rank_tasks(std::slice::from_ref(single), today()).unwrap();
            utilities.push(ranked[0].utility);
        }

        for pair in utilities.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn overdue_tasks_dominate() {
        let tasks = vec![
            task("Future", 60, 100, "2026-09-20"),
            task("Overdue", 60, 1, "2026-08-20"),
        ];

        let ranked = rank_tasks(&tasks, today()).unwrap();
        assert_eq!(ranked[0].name, "Overdue");
    }

    #[test]
    fn far_extremes_stay_finite() {
        let tasks = vec![
            task("Ancient", 60, 100, "1970-01-01"),
            task("Distant", 60, 100, "2999-12-31"),
        ];

        let ranked = rank_tasks(&tasks, today()).unwrap();
        assert!(ranked.iter().all(|entry| entry.utility.is_finite()));
        assert_eq!(ranked[0].name, "Ancient");
    }

    #[test]
    fn ties_keep_insertion_order() {
        let tasks = vec![
            task("First", 60, 50, "2026-09-02"),
            task("Second", 60, 50, "2026-09-02"),
            task("Third", 60, 50, "2026-09-02"),
        ];

        let ranked = rank_tasks(&tasks, today()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn duplicate_utilities_are_not_collapsed() {
        let tasks = vec![
            task("Twin A", 60, 50, "2026-09-02"),
            task("Twin B", 60, 50, "2026-09-02"),
        ];

        let ranked = rank_tasks(&tasks, today()).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn length_hours_rounds_to_two_decimals() {
        let tasks = vec![task("Odd length", 100, 50, "2026-09-02")];
        let ranked = rank_tasks(&tasks, today()).unwrap();
        assert_eq!(ranked[0].length_hours, 1.67);
    }
}
