use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prompt for a new task and add it to the schedule
    #[arg(long = "addTask")]
    pub add_task: bool,

    /// Prompt for a task name and remove it from the schedule
    #[arg(long = "removeTask")]
    pub remove_task: bool,

    /// Print the full ranked list instead of the top tasks
    #[arg(long = "viewTasks")]
    pub view_tasks: bool,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}
