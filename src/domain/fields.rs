use std::collections::BTreeMap;

/// Key/value environment accumulated across pipeline stages and consumed
/// once by the template renderer.
///
/// Keys are fixed and known in advance; each pipeline stage contributes its
/// output through a named setter so a forgotten stage shows up as a missing
/// field at render time, not as a silently defaulted substitution.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    values: BTreeMap<String, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the externally reachable host address.
    pub fn set_ip(&mut self, ip: &str) {
        self.insert("ip", ip);
    }

    /// Record the block-indented signing key pair.
    pub fn set_signing_keys(&mut self, public_key: &str, private_key: &str) {
        self.insert("public_key", public_key);
        self.insert("private_key", private_key);
    }

    /// Record the chosen SCM plugin and its serialized credential config.
    pub fn set_scm(&mut self, plugin: &str, config_json: &str) {
        self.insert("scm_plugin", plugin);
        self.insert("scm_config", config_json);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
