use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::StackLauncher;

/// Launcher that records invocations instead of spawning processes.
#[derive(Default)]
pub(crate) struct RecordingLauncher {
    pub(crate) calls: RefCell<Vec<String>>,
}

impl StackLauncher for RecordingLauncher {
    fn pull_images(&self) -> Result<(), AppError> {
        self.calls.borrow_mut().push("pull".to_string());
        Ok(())
    }

    fn start_stack(&self, project: &str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(format!("up:{project}"));
        Ok(())
    }

    fn open_browser(&self, url: &str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(format!("open:{url}"));
        Ok(())
    }
}
