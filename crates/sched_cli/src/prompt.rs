use sched_core::error::AppError;
use sched_core::model;
use std::io::{BufRead, Write};

/// Answers collected from the interactive add-task flow. Blank optional
/// answers have already been replaced by their defaults; the deadline stays
/// `None` so the repository can derive it from the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub name: String,
    pub length_minutes: i64,
    pub importance: i64,
    pub days_from_now: Option<i64>,
}

pub fn prompt_task_input(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<TaskInput, AppError> {
    let name = loop {
        let answer = ask(
            reader,
            writer,
            "\nWhat is the name of the task you would like to add to your schedule? ",
        )?;
        match model::validate_name(&answer) {
            Ok(name) => break name,
            Err(_) => say(writer, "Please enter a task name")?,
        }
    };

    let length_minutes = loop {
        let answer = ask(
            reader,
            writer,
            "(Optional) How long do you think this will take you (in minutes)? ",
        )?;
        if answer.is_empty() {
            break model::DEFAULT_LENGTH_MINUTES;
        }
        match parse_integer(&answer).and_then(model::validate_length_minutes) {
            Ok(value) => break value,
            Err(_) => say(
                writer,
                "Please enter a valid integer duration greater than 0, or leave it blank for the default 60 minutes.",
            )?,
        }
    };

    let importance = loop {
        let answer = ask(
            reader,
            writer,
            "(Optional) How important is this task to you on a scale of 1-100? ",
        )?;
        if answer.is_empty() {
            break model::DEFAULT_IMPORTANCE;
        }
        match parse_integer(&answer).and_then(model::validate_importance) {
            Ok(value) => break value,
            Err(_) => say(
                writer,
                "Please enter a valid integer between 1-100, or leave it blank for the default 50.",
            )?,
        }
    };

    let days_from_now = loop {
        let answer = ask(
            reader,
            writer,
            "(Optional) In how many days is this task due? ",
        )?;
        if answer.is_empty() {
            break None;
        }
        match parse_integer(&answer) {
            Ok(value) => break Some(value),
            Err(_) => say(
                writer,
                "Please enter an integer indicating days until your task is due, or leave it blank.",
            )?,
        }
    };

    Ok(TaskInput {
        name,
        length_minutes,
        importance,
        days_from_now,
    })
}

pub fn prompt_task_name(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<String, AppError> {
    loop {
        let answer = ask(
            reader,
            writer,
            "\nWhich task would you like to remove from your schedule? ",
        )?;
        match model::validate_name(&answer) {
            Ok(name) => return Ok(name),
            Err(_) => say(writer, "Please enter a task name")?,
        }
    }
}

fn parse_integer(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::invalid_input(format!("'{raw}' is not an integer")))
}

fn ask(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    question: &str,
) -> Result<String, AppError> {
    write!(writer, "{question}").map_err(|err| AppError::io(err.to_string()))?;
    writer.flush().map_err(|err| AppError::io(err.to_string()))?;

    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .map_err(|err| AppError::io(err.to_string()))?;
    if bytes == 0 {
        return Err(AppError::invalid_input("input ended before the prompt was answered"));
    }

    Ok(line.trim().to_string())
}

fn say(writer: &mut impl Write, message: &str) -> Result<(), AppError> {
    writeln!(writer, "{message}").map_err(|err| AppError::io(err.to_string()))
}
