/// Supported SCM providers.
///
/// A closed enumeration: the provider is selected once at the credential
/// prompt and carried through the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScmProvider {
    Github,
    Gitlab,
    Bitbucket,
}

/// Registration walkthrough details and prompt labels for one SCM provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderProfile {
    /// Human-readable service name shown in the walkthrough.
    pub service_name: &'static str,
    /// Where the operator registers a new OAuth application.
    pub registration_url: &'static str,
    /// Label of the homepage URL field on the registration form, if the
    /// provider has one.
    pub homepage_field: Option<&'static str>,
    /// Label of the OAuth callback URL field on the registration form.
    pub callback_field: &'static str,
    /// Provider-specific extra setup steps.
    pub extra_instructions: Option<&'static str>,
    /// Label used when prompting for the client identifier.
    pub client_id_label: &'static str,
    /// Label used when prompting for the client secret.
    pub client_secret_label: &'static str,
    /// Fixed webhook signing secret placeholder, where the plugin expects one.
    pub webhook_secret: Option<&'static str>,
}

const GITHUB: ProviderProfile = ProviderProfile {
    service_name: "GitHub.com",
    registration_url: "https://github.com/settings/applications/new",
    homepage_field: Some("Homepage URL"),
    callback_field: "Authorization callback URL",
    extra_instructions: None,
    client_id_label: "Client ID",
    client_secret_label: "Client Secret",
    webhook_secret: Some("SUPER-SECRET-SIGNING-THING"),
};

const GITLAB: ProviderProfile = ProviderProfile {
    service_name: "Gitlab.com",
    registration_url: "https://gitlab.com/profile/applications",
    homepage_field: None,
    callback_field: "Redirect URL",
    extra_instructions: None,
    client_id_label: "Application Id",
    client_secret_label: "Secret",
    webhook_secret: None,
};

const BITBUCKET: ProviderProfile = ProviderProfile {
    service_name: "Bitbucket.org",
    registration_url: "https://bitbucket.org/account/user/<your username>/oauth-consumers/new",
    homepage_field: Some("URL"),
    callback_field: "Callback URL",
    extra_instructions: Some(
        "for 'Permissions' enable Read checkbox for Repositories, Account and Pull requests",
    ),
    client_id_label: "Key",
    client_secret_label: "Secret",
    webhook_secret: None,
};

impl ScmProvider {
    /// All supported providers in prompt order.
    pub const ALL: [ScmProvider; 3] =
        [ScmProvider::Github, ScmProvider::Gitlab, ScmProvider::Bitbucket];

    /// Plugin name as embedded in the SCM settings block.
    pub fn plugin_name(&self) -> &'static str {
        match self {
            ScmProvider::Github => "github",
            ScmProvider::Gitlab => "gitlab",
            ScmProvider::Bitbucket => "bitbucket",
        }
    }

    /// Parse a provider from operator input, case-insensitively.
    pub fn from_name(name: &str) -> Option<ScmProvider> {
        match name.trim().to_lowercase().as_str() {
            "github" => Some(ScmProvider::Github),
            "gitlab" => Some(ScmProvider::Gitlab),
            "bitbucket" => Some(ScmProvider::Bitbucket),
            _ => None,
        }
    }

    /// Registration walkthrough and prompt labels for this provider.
    pub fn profile(&self) -> &'static ProviderProfile {
        match self {
            ScmProvider::Github => &GITHUB,
            ScmProvider::Gitlab => &GITLAB,
            ScmProvider::Bitbucket => &BITBUCKET,
        }
    }
}
