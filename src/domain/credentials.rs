use serde::Serialize;

use super::AppError;
use super::provider::ScmProvider;

/// Username the platform commits and comments as.
pub const BOT_USERNAME: &str = "sd-buildbot";

/// Contact address recorded on bot commits.
pub const BOT_EMAIL: &str = "dev-null@screwdriver.cd";

/// OAuth application credentials plus the fixed bot identity.
///
/// Serialized to compact JSON for direct substitution into the SCM settings
/// block of the compose descriptor. Field order here fixes the wire order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScmCredentials {
    username: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<String>,
    oauth_client_id: String,
    oauth_client_secret: String,
}

impl ScmCredentials {
    pub fn new(provider: ScmProvider, client_id: String, client_secret: String) -> Self {
        Self {
            username: BOT_USERNAME.to_string(),
            email: BOT_EMAIL.to_string(),
            secret: provider.profile().webhook_secret.map(str::to_string),
            oauth_client_id: client_id,
            oauth_client_secret: client_secret,
        }
    }

    /// Compact JSON encoding for template embedding.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}
