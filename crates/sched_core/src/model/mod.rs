mod task;

pub use task::{
    DEFAULT_IMPORTANCE, DEFAULT_LENGTH_MINUTES, Task, format_due_date, parse_due_date,
    validate_importance, validate_length_minutes, validate_name,
};
