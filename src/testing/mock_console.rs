use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// Console fed from pre-scripted answers, recording the prompts it serves.
///
/// An exhausted script behaves like end-of-input on a mandatory prompt.
pub(crate) struct ScriptedConsole {
    lines: RefCell<VecDeque<String>>,
    secrets: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    pub(crate) prompts: RefCell<Vec<String>>,
    pub(crate) secret_prompts: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    pub(crate) fn new(lines: &[&str], secrets: &[&str], confirms: &[bool]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|s| s.to_string()).collect()),
            secrets: RefCell::new(secrets.iter().map(|s| s.to_string()).collect()),
            confirms: RefCell::new(confirms.iter().copied().collect()),
            prompts: RefCell::new(Vec::new()),
            secret_prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Console for ScriptedConsole {
    fn prompt_line(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.lines.borrow_mut().pop_front().ok_or(AppError::Cancelled)
    }

    fn prompt_secret(&self, prompt: &str) -> Result<String, AppError> {
        self.secret_prompts.borrow_mut().push(prompt.to_string());
        self.secrets.borrow_mut().pop_front().ok_or(AppError::Cancelled)
    }

    fn confirm(&self, _prompt: &str) -> Result<bool, AppError> {
        self.confirms.borrow_mut().pop_front().ok_or(AppError::Cancelled)
    }
}
