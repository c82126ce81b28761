use crate::domain::AppError;

/// Interactive terminal used for operator prompts.
///
/// Every prompt is mandatory: implementations must surface end-of-input as
/// `AppError::Cancelled` rather than returning an empty answer.
pub trait Console {
    /// Read one line of input, echoed back to the terminal.
    fn prompt_line(&self, prompt: &str) -> Result<String, AppError>;

    /// Read a secret without echoing it.
    fn prompt_secret(&self, prompt: &str) -> Result<String, AppError>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}
