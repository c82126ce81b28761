use crate::domain::compose::{API_PORT, AUTH_CALLBACK_PATH, UI_PORT};
use crate::domain::credentials::ScmCredentials;
use crate::domain::{AppError, ScmProvider};
use crate::ports::Console;

/// Prompt until the operator names a supported SCM provider.
///
/// The only retry loop in the system: invalid input re-prompts, while a
/// failed read (end-of-input) aborts.
pub(super) fn select_provider<C: Console>(console: &C) -> Result<ScmProvider, AppError> {
    let options = ScmProvider::ALL.map(|provider| provider.plugin_name()).join("/");
    let prompt = format!("📤   Which SCM provider would you like to use? ({options})");

    loop {
        let answer = console.prompt_line(&prompt)?;
        if let Some(provider) = ScmProvider::from_name(&answer) {
            return Ok(provider);
        }
    }
}

/// Walk the operator through OAuth application registration and read the
/// resulting credentials. The secret is never echoed.
pub(super) fn collect_credentials<C: Console>(
    console: &C,
    provider: ScmProvider,
    host: &str,
) -> Result<ScmCredentials, AppError> {
    let profile = provider.profile();

    println!();
    println!("    Please create a new OAuth application on {}", profile.service_name);
    println!("    Go to {} to start the process", profile.registration_url);
    if let Some(field) = profile.homepage_field {
        println!("    For '{field}' put http://{host}:{UI_PORT}");
    }
    println!(
        "    For '{}' put http://{host}:{API_PORT}{AUTH_CALLBACK_PATH}",
        profile.callback_field
    );
    if let Some(extra) = profile.extra_instructions {
        println!("    {extra}");
    }
    println!("    When done, please provide the following values:");

    let client_id = console.prompt_line(&format!("    {}", profile.client_id_label))?;
    let client_secret = console.prompt_secret(&format!("    {}", profile.client_secret_label))?;
    println!();

    Ok(ScmCredentials::new(provider, client_id, client_secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppError;
    use crate::testing::ScriptedConsole;

    #[test]
    fn accepts_the_first_valid_provider_case_insensitively() {
        let console = ScriptedConsole::new(&["GitHub"], &[], &[]);
        assert_eq!(select_provider(&console).unwrap(), ScmProvider::Github);
        assert_eq!(console.prompts.borrow().len(), 1);
    }

    #[test]
    fn reprompts_until_a_valid_provider_is_named() {
        let console = ScriptedConsole::new(&["svn", "mercurial", "", "bitbucket"], &[], &[]);
        assert_eq!(select_provider(&console).unwrap(), ScmProvider::Bitbucket);
        assert_eq!(console.prompts.borrow().len(), 4);
    }

    #[test]
    fn end_of_input_during_selection_cancels() {
        let console = ScriptedConsole::new(&["svn"], &[], &[]);
        match select_provider(&console).unwrap_err() {
            AppError::Cancelled => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_the_secret_through_the_masked_prompt() {
        let console = ScriptedConsole::new(&["my-client-id"], &["my-secret"], &[]);

        let credentials =
            collect_credentials(&console, ScmProvider::Github, "10.0.0.5").unwrap();

        assert_eq!(console.prompts.borrow().as_slice(), ["    Client ID"]);
        assert_eq!(console.secret_prompts.borrow().as_slice(), ["    Client Secret"]);
        let json = credentials.to_json().unwrap();
        assert!(json.contains("\"oauthClientId\":\"my-client-id\""));
        assert!(json.contains("\"oauthClientSecret\":\"my-secret\""));
    }

    #[test]
    fn provider_prompt_labels_follow_the_profile() {
        let console = ScriptedConsole::new(&["key"], &["sec"], &[]);

        collect_credentials(&console, ScmProvider::Bitbucket, "10.0.0.5").unwrap();

        assert_eq!(console.prompts.borrow().as_slice(), ["    Key"]);
        assert_eq!(console.secret_prompts.borrow().as_slice(), ["    Secret"]);
    }
}
