use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Password};

use crate::domain::AppError;
use crate::ports::Console;

/// Terminal-backed console built on dialoguer prompts.
///
/// Empty answers are rejected by the prompts themselves; end-of-input maps
/// to `AppError::Cancelled` so the pipeline aborts instead of proceeding
/// with partial fields.
pub struct DialoguerConsole;

impl DialoguerConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for DialoguerConsole {
    fn prompt_line(&self, prompt: &str) -> Result<String, AppError> {
        match Input::<String>::new().with_prompt(prompt).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if is_end_of_input(&err) => Err(AppError::Cancelled),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }

    fn prompt_secret(&self, prompt: &str) -> Result<String, AppError> {
        match Password::new().with_prompt(prompt).interact() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if is_end_of_input(&err) => Err(AppError::Cancelled),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }

    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if is_end_of_input(&err) => Err(AppError::Cancelled),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}

fn is_end_of_input(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted)
}
