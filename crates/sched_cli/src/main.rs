use clap::Parser;
use sched_cli::cli::Cli;
use sched_cli::prompt;
use sched_core::config;
use sched_core::due;
use sched_core::error::AppError;
use sched_core::rank::{self, RankedTask};
use sched_core::task_api;
use std::io;

const DEFAULT_TOP_TASKS: usize = 5;

fn print_ranked_plain(ranked: &[RankedTask], limit: usize) {
    println!("\nHere is the next set of tasks you should do in order:\n");
    for (index, task) in ranked.iter().take(limit).enumerate() {
        println!(
            "{}. {} - Estimated Time (in hours) = {}",
            index + 1,
            task.name,
            task.length_hours
        );
    }
    println!();
}

fn print_ranked_json(ranked: &[RankedTask], limit: usize) {
    let payload: Vec<serde_json::Value> = ranked
        .iter()
        .take(limit)
        .map(|task| {
            serde_json::json!({
                "name": task.name,
                "utility": task.utility,
                "length_hours": task.length_hours,
            })
        })
        .collect();
    println!("{}", serde_json::Value::Array(payload));
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config_load = config::load_config_with_fallback();
    if let Some(err) = config_load.error {
        eprintln!("WARNING: {}", err);
    }

    // First run initializes an empty store on disk.
    let mut tasks = task_api::load_schedule()?;

    if cli.add_task {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stdout();
        let input = prompt::prompt_task_input(&mut reader, &mut writer)?;
        tasks = task_api::upsert_task(
            &input.name,
            input.length_minutes,
            input.importance,
            input.days_from_now,
        )?;
    }

    if cli.remove_task {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stdout();
        let name = prompt::prompt_task_name(&mut reader, &mut writer)?;
        tasks = task_api::remove_task(&name)?;
    }

    if tasks.is_empty() {
        println!("Schedule is clear! Add a task with the --addTask flag.");
        return Ok(());
    }

    let ranked = rank::rank_tasks(&tasks, due::local_today())?;
    let limit = if cli.view_tasks {
        ranked.len()
    } else {
        config_load
            .config
            .top_tasks
            .unwrap_or(DEFAULT_TOP_TASKS)
            .min(ranked.len())
    };

    if cli.json {
        print_ranked_json(&ranked, limit);
    } else {
        print_ranked_plain(&ranked, limit);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
