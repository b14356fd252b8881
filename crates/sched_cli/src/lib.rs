pub mod cli;
pub mod prompt;
